//! Android hosts.
//!
//! Two ways in, both ending at the same gate:
//! - a native activity (`android_main`), where we query the Activity's default
//!   display through JNI ourselves ([`ActivityMetrics`]);
//! - a Java activity that computes `xdpi / 160f` and calls a static native
//!   `tellScale(float)` ([`tell_scale_impl`], exported by [`crate::java_scale_hook`]).

use android_activity::AndroidApp;
use density_bridge::{
    BridgeError, DisplayMetrics, MetricsSource, STARTUP_GATE, engine, forward_host_scale,
};
use jni::objects::{JClass, JObject, JValue};
use jni::{JNIEnv, JavaVM, sys};

/// Default display metrics of the running Activity, read through JNI.
pub struct ActivityMetrics<'a> {
    app: &'a AndroidApp,
}

impl<'a> ActivityMetrics<'a> {
    pub fn new(app: &'a AndroidApp) -> Self {
        Self { app }
    }

    fn query(&self) -> Result<DisplayMetrics, String> {
        let vm = unsafe { JavaVM::from_raw(self.app.vm_as_ptr() as *mut sys::JavaVM) }
            .map_err(|e| format!("Failed to get JavaVM: {:?}", e))?;
        let mut env = vm
            .attach_current_thread()
            .map_err(|e| format!("Failed to attach thread: {:?}", e))?;

        let result = Self::read_metrics(&mut env, self.app);
        if result.is_err() && env.exception_check().unwrap_or(false) {
            // Leave the JVM usable for the host's own error reporting
            let _ = env.exception_describe();
            let _ = env.exception_clear();
        }
        result
    }

    fn read_metrics(env: &mut JNIEnv, app: &AndroidApp) -> Result<DisplayMetrics, String> {
        let activity = unsafe { JObject::from_raw(app.activity_as_ptr() as sys::jobject) };

        let window_manager = env
            .call_method(
                &activity,
                "getWindowManager",
                "()Landroid/view/WindowManager;",
                &[],
            )
            .and_then(|v| v.l())
            .map_err(|e| format!("Failed to call getWindowManager: {:?}", e))?;
        let display = env
            .call_method(
                &window_manager,
                "getDefaultDisplay",
                "()Landroid/view/Display;",
                &[],
            )
            .and_then(|v| v.l())
            .map_err(|e| format!("Failed to call getDefaultDisplay: {:?}", e))?;
        if display.is_null() {
            return Err("Activity has no default display".to_string());
        }

        let metrics = env
            .new_object("android/util/DisplayMetrics", "()V", &[])
            .map_err(|e| format!("Failed to create DisplayMetrics: {:?}", e))?;
        env.call_method(
            &display,
            "getMetrics",
            "(Landroid/util/DisplayMetrics;)V",
            &[JValue::Object(&metrics)],
        )
        .map_err(|e| format!("Failed to call getMetrics: {:?}", e))?;

        let xdpi = env
            .get_field(&metrics, "xdpi", "F")
            .and_then(|v| v.f())
            .map_err(|e| format!("Failed to read xdpi: {:?}", e))?;
        let ydpi = env
            .get_field(&metrics, "ydpi", "F")
            .and_then(|v| v.f())
            .map_err(|e| format!("Failed to read ydpi: {:?}", e))?;
        let density_dpi = env
            .get_field(&metrics, "densityDpi", "I")
            .and_then(|v| v.i())
            .map_err(|e| format!("Failed to read densityDpi: {:?}", e))?;

        Ok(DisplayMetrics {
            xdpi,
            ydpi,
            density_dpi: density_dpi.max(0) as u32,
        })
    }
}

impl MetricsSource for ActivityMetrics<'_> {
    fn default_display_metrics(&self) -> density_bridge::Result<DisplayMetrics> {
        self.query().map_err(BridgeError::MetricsUnavailable)
    }
}

/// Body of the exported `Java_<class>_tellScale(JNIEnv*, jclass, jfloat)`.
///
/// Each call is one `onCreate`, so one startup. An invalid scale is not
/// forwarded; the Java host gets an `IllegalStateException` instead, which
/// aborts its `onCreate`.
pub fn tell_scale_impl(app_name: &str, mut env: JNIEnv, _class: JClass, scale: sys::jfloat) {
    crate::logging::setup_android_logging(app_name);
    crate::run::begin_startup();

    let result =
        STARTUP_GATE.report_once(|| forward_host_scale(scale, engine::set_display_scale));
    if let Err(e) = result {
        log::error!("Rejected display scale from Java host: {e}");
        if let Err(throw_err) = env.throw_new("java/lang/IllegalStateException", e.to_string()) {
            log::error!("Failed to throw into Java host: {:?}", throw_err);
        }
    }
}

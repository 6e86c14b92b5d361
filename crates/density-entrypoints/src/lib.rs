//! Host entry points that report the display density scale before the engine starts
//!
//! The host owns the lifecycle; this crate only provides the hook that runs at
//! startup, reports `xdpi / 160` to the engine once per startup, and then hands control to
//! the engine's main loop.
//!
//! # Usage
//!
//! In your application's `lib.rs` (or `main.rs`), use the `density_app!` macro:
//!
//! ```ignore
//! density_entrypoints::density_app!("Retro", |host| retro::engine_main(host));
//! ```
//!
//! This generates:
//! - Android: `android_main` entry point for a native activity
//! - Native: `run_native()` function to call from `main.rs`
//!
//! Java activities that compute the scale themselves and call a static native
//! `tellScale(float)` export the matching JNI symbol instead:
//!
//! ```ignore
//! density_entrypoints::java_scale_hook!("Retro", "me_melchor9000_retro_RetroActivity");
//! ```

pub mod cli;
pub mod logging;
pub mod run;

#[cfg(target_os = "android")]
pub mod android;

mod metadata;
pub use metadata::{log_version_info, short_version_info};

pub use cli::{HostArgs, parse_args};
pub use density_bridge;
pub use run::report_startup_scale;

#[cfg(target_os = "android")]
pub use android_activity;
#[cfg(target_os = "android")]
pub use jni;

/// What the engine main loop receives from the host once the scale is reported.
#[cfg(target_os = "android")]
pub type HostApp = android_activity::AndroidApp;
/// What the engine main loop receives from the host once the scale is reported.
#[cfg(not(target_os = "android"))]
pub type HostApp = ();

/// Unified macro to define the platform entry points of an application.
///
/// # Arguments
///
/// * `$app_name` - A string literal with the application name (used for logging)
/// * `$engine_main` - A closure taking [`HostApp`]; runs only after the scale was reported
///
/// # Generated Code
///
/// For **Android** targets:
/// ```ignore
/// #[no_mangle]
/// pub fn android_main(app: android_activity::AndroidApp) { ... }
/// ```
///
/// For **native** targets:
/// ```ignore
/// pub fn run_native() { ... }  // Call this from main.rs
/// ```
#[macro_export]
macro_rules! density_app {
    ($app_name:expr, $engine_main:expr) => {
        // ==========================================
        // Android entry point
        // ==========================================
        #[cfg(target_os = "android")]
        #[unsafe(no_mangle)] // SAFETY: there is no other global function of this name
        pub fn android_main(app: $crate::android_activity::AndroidApp) {
            $crate::android_main_impl($app_name, app, $engine_main);
        }

        // ==========================================
        // Native entry point (called from main.rs)
        // ==========================================
        /// Run the application on native (desktop) platforms.
        #[cfg(not(any(target_arch = "wasm32", target_os = "android")))]
        pub fn run_native() {
            $crate::native_main_impl($app_name, $engine_main);
        }
    };
}

/// Exports `Java_<class>_tellScale` for a Java activity declaring
/// `private static native void tellScale(float scale);`.
///
/// `$app_name` tags the log output; `$class` is the JNI-mangled class name
/// (`.` replaced by `_`).
#[macro_export]
macro_rules! java_scale_hook {
    ($app_name:expr, $class:literal) => {
        #[cfg(target_os = "android")]
        #[unsafe(export_name = concat!("Java_", $class, "_tellScale"))]
        pub extern "system" fn java_tell_scale(
            env: $crate::jni::JNIEnv<'_>,
            class: $crate::jni::objects::JClass<'_>,
            scale: $crate::jni::sys::jfloat,
        ) {
            $crate::android::tell_scale_impl($app_name, env, class, scale);
        }
    };
}

/// Internal implementation for the Android entry point.
/// Use the `density_app!` macro instead of calling this directly.
#[cfg(target_os = "android")]
#[doc(hidden)]
pub fn android_main_impl(
    app_name: &str,
    app: android_activity::AndroidApp,
    engine_main: impl FnOnce(HostApp),
) {
    logging::setup_android_logging(app_name);
    log::info!("Starting {} on Android", app_name);
    log_version_info();

    // android_main runs again when the activity is recreated in a warm process
    run::begin_startup();
    let reported = report_startup_scale(android::ActivityMetrics::new(&app));
    match reported {
        Ok(scale) => log::info!("Display scale {} handed to the engine", scale),
        Err(e) => {
            // Returning from android_main finishes the activity
            log::error!("Aborting startup of {}: {}", app_name, e);
            return;
        }
    }

    engine_main(app);
}

/// Internal implementation for the native (desktop) entry point.
/// Use the `density_app!` macro instead of calling this directly.
#[cfg(not(any(target_arch = "wasm32", target_os = "android")))]
#[doc(hidden)]
pub fn native_main_impl(app_name: &str, engine_main: impl FnOnce(HostApp)) {
    logging::setup_logging();

    let args = match parse_args::<HostArgs>() {
        Ok(args) => args,
        Err(e) => e.exit(),
    };

    log_version_info();
    tracing::info!("Starting {app_name}");

    match run::desktop_startup_scale(&args) {
        Ok(scale) => tracing::info!("Display scale {scale} handed to the engine"),
        Err(e) => {
            tracing::error!("Aborting startup of {app_name}: {e}");
            std::process::exit(1);
        }
    }

    engine_main(());
}

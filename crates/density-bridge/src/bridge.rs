use std::sync::atomic::{AtomicU8, Ordering};

use crate::metrics::MetricsSource;
use crate::scale::ScaleFactor;
use crate::sink::ScaleSink;
use crate::{BridgeError, Result};

/// Reads the default display metrics, computes the scale and forwards it.
///
/// [`DensityBridge::report_display_scale`] consumes the bridge, so a single
/// bridge can only ever notify the engine once. Use a [`ReportGate`] to extend
/// that guarantee to a whole startup.
pub struct DensityBridge<S, N> {
    source: S,
    sink: N,
}

impl<S, N> DensityBridge<S, N>
where
    S: MetricsSource,
    N: ScaleSink,
{
    pub fn new(source: S, sink: N) -> Self {
        Self { source, sink }
    }

    /// Computes `xdpi / 160` and passes it to the engine.
    ///
    /// On any error the sink is never called.
    pub fn report_display_scale(self) -> Result<ScaleFactor> {
        let Self { source, mut sink } = self;

        let metrics = source.default_display_metrics()?;
        tracing::debug!(
            "Default display metrics: xdpi={} ydpi={} densityDpi={}",
            metrics.xdpi,
            metrics.ydpi,
            metrics.density_dpi
        );
        if metrics.is_anisotropic() {
            tracing::debug!("Non-square pixel density; using horizontal dpi only");
        }

        let scale = ScaleFactor::from_dpi(metrics.xdpi)?;
        sink.notify_display_scale(scale.get());
        tracing::info!("Reported display scale {scale} (xdpi {})", metrics.xdpi);
        Ok(scale)
    }
}

/// Forwards a scale the host already computed, after validating it.
pub fn forward_host_scale<N: ScaleSink>(scale: f32, mut sink: N) -> Result<ScaleFactor> {
    let scale = ScaleFactor::new(scale)?;
    sink.notify_display_scale(scale.get());
    tracing::info!("Forwarded host display scale {scale}");
    Ok(scale)
}

/// Where a [`ReportGate`] is in its single report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BridgeState {
    Uninitialized,
    Reporting,
    ScaleReported,
    Failed,
}

impl BridgeState {
    const fn to_u8(self) -> u8 {
        match self {
            Self::Uninitialized => 0,
            Self::Reporting => 1,
            Self::ScaleReported => 2,
            Self::Failed => 3,
        }
    }

    const fn from_u8(value: u8) -> Self {
        match value {
            0 => Self::Uninitialized,
            1 => Self::Reporting,
            2 => Self::ScaleReported,
            _ => Self::Failed,
        }
    }

    pub fn is_terminal(self) -> bool {
        matches!(self, Self::ScaleReported | Self::Failed)
    }
}

/// Once-per-startup guard around the scale notification.
///
/// The first caller of [`ReportGate::report_once`] runs its report; every later
/// or concurrent caller gets [`BridgeError::AlreadyReported`] without running
/// anything. A failed report is terminal too: there is no retry.
///
/// A warm process can host several startups (an activity recreated while the
/// library stays loaded), so each host entry calls [`ReportGate::begin_startup`]
/// first to re-arm a gate left terminal by the previous startup.
#[derive(Debug)]
pub struct ReportGate {
    state: AtomicU8,
}

/// The gate shared by every host entry point in the process.
pub static STARTUP_GATE: ReportGate = ReportGate::new();

impl ReportGate {
    pub const fn new() -> Self {
        Self {
            state: AtomicU8::new(BridgeState::Uninitialized.to_u8()),
        }
    }

    pub fn state(&self) -> BridgeState {
        BridgeState::from_u8(self.state.load(Ordering::Acquire))
    }

    /// Re-arms a terminal gate for a new startup.
    ///
    /// Returns `false` while a report is in flight; that report keeps the gate.
    pub fn begin_startup(&self) -> bool {
        let mut current = self.state.load(Ordering::Acquire);
        loop {
            match BridgeState::from_u8(current) {
                BridgeState::Uninitialized => return true,
                BridgeState::Reporting => return false,
                BridgeState::ScaleReported | BridgeState::Failed => {}
            }
            match self.state.compare_exchange(
                current,
                BridgeState::Uninitialized.to_u8(),
                Ordering::AcqRel,
                Ordering::Acquire,
            ) {
                Ok(_) => return true,
                Err(actual) => current = actual,
            }
        }
    }

    pub fn report_once(
        &self,
        report: impl FnOnce() -> Result<ScaleFactor>,
    ) -> Result<ScaleFactor> {
        self.state
            .compare_exchange(
                BridgeState::Uninitialized.to_u8(),
                BridgeState::Reporting.to_u8(),
                Ordering::AcqRel,
                Ordering::Acquire,
            )
            .map_err(|_| BridgeError::AlreadyReported)?;

        let result = report();
        let next = if result.is_ok() {
            BridgeState::ScaleReported
        } else {
            BridgeState::Failed
        };
        self.state.store(next.to_u8(), Ordering::Release);
        result
    }

    /// Runs `bridge` through the gate.
    pub fn report<S, N>(&self, bridge: DensityBridge<S, N>) -> Result<ScaleFactor>
    where
        S: MetricsSource,
        N: ScaleSink,
    {
        self.report_once(|| bridge.report_display_scale())
    }
}

impl Default for ReportGate {
    fn default() -> Self {
        Self::new()
    }
}

//! Density Bridge - display scale handoff between the host and the native engine
//!
//! At startup the host's default display metrics are read, the horizontal DPI is
//! turned into a dimensionless scale factor relative to the 160 DPI baseline, and
//! that factor is passed once to the native engine through a one-way call.
//!
//! # Architecture
//!
//! - **[`ScaleFactor`]**: validated, immutable `actual_dpi / 160` ratio
//! - **[`MetricsSource`]**: where the default display metrics come from
//! - **[`ScaleSink`]**: the one-way `notifyDisplayScale(f32)` boundary
//! - **[`DensityBridge`]**: reads, computes and forwards; consumed by the report
//! - **[`ReportGate`]**: process-wide guard so the engine is notified at most once per startup
//! - **[`engine`]**: the engine-side cell that receives the notification

mod bridge;
pub mod engine;
mod metrics;
mod scale;
mod sink;

// Public API exports
pub use bridge::{BridgeState, DensityBridge, ReportGate, STARTUP_GATE, forward_host_scale};
pub use metrics::{DisplayMetrics, FixedMetrics, MetricsSource};
pub use scale::{BASELINE_DPI, ScaleFactor};
pub use sink::{EngineFn, NotifyDisplayScaleFn, ScaleSink};

/// Error types for the display scale handoff
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum BridgeError {
    #[error("Display metrics unavailable: {0}")]
    MetricsUnavailable(String),

    #[error("Invalid display scale: {0} (must be positive and finite)")]
    InvalidScale(f32),

    #[error("Display scale already reported")]
    AlreadyReported,
}

pub type Result<T> = std::result::Result<T, BridgeError>;

//! Receiving end of the display scale handoff, on the engine side.
//!
//! The engine keeps one process-wide display scale. Until the host reports the
//! real value it holds [`DEFAULT_DISPLAY_SCALE`]. The engine has no validation of
//! its own: whatever arrives through [`notify_display_scale`] is stored as is,
//! so callers go through [`crate::DensityBridge`] or [`crate::forward_host_scale`].

use std::sync::atomic::{AtomicBool, AtomicU32, Ordering};

/// Scale used by the engine before (or without) a notification.
pub const DEFAULT_DISPLAY_SCALE: f32 = 1.5;

/// Lock-free cell holding the engine's display scale.
#[derive(Debug)]
pub struct EngineScale {
    bits: AtomicU32,
    notified: AtomicBool,
}

impl EngineScale {
    pub const fn new() -> Self {
        Self {
            bits: AtomicU32::new(DEFAULT_DISPLAY_SCALE.to_bits()),
            notified: AtomicBool::new(false),
        }
    }

    /// Overwrites the scale; a relaunched activity in a warm process reports again.
    pub fn store(&self, scale: f32) {
        let previous = f32::from_bits(self.bits.swap(scale.to_bits(), Ordering::AcqRel));
        if self.notified.swap(true, Ordering::AcqRel) {
            tracing::debug!("Engine display scale updated from {previous} to {scale}");
        }
    }

    pub fn get(&self) -> f32 {
        f32::from_bits(self.bits.load(Ordering::Acquire))
    }

    /// Whether the host has reported a scale yet.
    pub fn is_notified(&self) -> bool {
        self.notified.load(Ordering::Acquire)
    }
}

impl Default for EngineScale {
    fn default() -> Self {
        Self::new()
    }
}

static ENGINE_SCALE: EngineScale = EngineScale::new();

/// Stores the scale the host reported. This is the sink the entry points use.
pub fn set_display_scale(scale: f32) {
    ENGINE_SCALE.store(scale);
    tracing::debug!("Engine display scale set to {scale}");
}

/// `notifyDisplayScale(scale: float32) -> void`
///
/// Exported with C linkage so a foreign host can call it directly.
#[unsafe(export_name = "notifyDisplayScale")]
pub extern "C" fn notify_display_scale(scale: f32) {
    set_display_scale(scale);
}

/// Current display scale as seen by the engine.
pub fn display_scale() -> f32 {
    ENGINE_SCALE.get()
}

pub fn display_scale_notified() -> bool {
    ENGINE_SCALE.is_notified()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_before_notification() {
        let cell = EngineScale::new();
        assert_eq!(cell.get(), 1.5);
        assert!(!cell.is_notified());
    }

    #[test]
    fn test_store_overwrites_default() {
        let cell = EngineScale::default();
        cell.store(2.75);
        assert_eq!(cell.get(), 2.75);
        assert!(cell.is_notified());
    }

    #[test]
    fn test_store_again_overwrites() {
        let cell = EngineScale::new();
        cell.store(3.0);
        cell.store(2.0);
        assert_eq!(cell.get(), 2.0);
        assert!(cell.is_notified());
    }

    #[test]
    fn test_value_is_bit_exact() {
        let cell = EngineScale::new();
        let scale = 403.411 / 160.0_f32;
        cell.store(scale);
        assert_eq!(cell.get().to_bits(), scale.to_bits());
    }
}

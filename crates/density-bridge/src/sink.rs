/// Signature of the engine's `notifyDisplayScale` entry point.
pub type NotifyDisplayScaleFn = extern "C" fn(f32);

/// The one-way boundary into the native engine.
///
/// Receives an IEEE-754 single precision ratio (not a percentage, not a DPI).
/// No return value, no acknowledgment.
pub trait ScaleSink {
    fn notify_display_scale(&mut self, scale: f32);
}

// Rust-ABI functions and closures; C-ABI pointers go through `EngineFn`.
impl<F> ScaleSink for F
where
    F: FnMut(f32),
{
    fn notify_display_scale(&mut self, scale: f32) {
        self(scale)
    }
}

/// Sink calling a foreign `notifyDisplayScale` through its C function pointer.
#[derive(Debug, Clone, Copy)]
pub struct EngineFn(pub NotifyDisplayScaleFn);

impl ScaleSink for EngineFn {
    fn notify_display_scale(&mut self, scale: f32) {
        (self.0)(scale)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicU32, Ordering};

    static LAST: AtomicU32 = AtomicU32::new(0);

    extern "C" fn record(scale: f32) {
        LAST.store(scale.to_bits(), Ordering::SeqCst);
    }

    #[test]
    fn test_function_pointer_sink() {
        let mut sink = EngineFn(record);
        sink.notify_display_scale(2.625);
        assert_eq!(f32::from_bits(LAST.load(Ordering::SeqCst)), 2.625);
    }

    #[test]
    fn test_closure_sink() {
        let mut received = Vec::new();
        let mut sink = |scale: f32| received.push(scale);
        sink.notify_display_scale(0.75);
        assert_eq!(received, vec![0.75]);
    }
}

use std::fmt;

use crate::{BridgeError, Result};

/// Dots per inch that the host's density-independent pixel convention treats as 1x.
///
/// The engine expects ratios against exactly this value.
pub const BASELINE_DPI: f32 = 160.0;

/// Ratio of the display's actual density to [`BASELINE_DPI`].
///
/// Always positive and finite; the only ways to build one validate the value.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct ScaleFactor(f32);

impl ScaleFactor {
    /// Wraps an already computed ratio, rejecting non-positive and non-finite values.
    pub fn new(scale: f32) -> Result<Self> {
        if scale.is_finite() && scale > 0.0 {
            Ok(Self(scale))
        } else {
            Err(BridgeError::InvalidScale(scale))
        }
    }

    /// Computes `dpi / 160` from a horizontal dots-per-inch reading.
    pub fn from_dpi(dpi: f32) -> Result<Self> {
        Self::new(dpi / BASELINE_DPI)
    }

    /// The raw value handed across the engine boundary.
    pub fn get(self) -> f32 {
        self.0
    }
}

impl TryFrom<f32> for ScaleFactor {
    type Error = BridgeError;

    fn try_from(scale: f32) -> Result<Self> {
        Self::new(scale)
    }
}

impl fmt::Display for ScaleFactor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x", self.0)
    }
}

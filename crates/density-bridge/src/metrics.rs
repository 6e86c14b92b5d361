//! Default display metrics as reported by the host.

use crate::Result;

/// The subset of the host's display metrics the bridge reads or logs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DisplayMetrics {
    /// Exact physical pixels per inch along the X axis. The only input to the scale.
    pub xdpi: f32,
    /// Exact physical pixels per inch along the Y axis.
    pub ydpi: f32,
    /// The host's bucketed density (e.g. 160, 240, 320, 480).
    pub density_dpi: u32,
}

impl DisplayMetrics {
    /// Metrics of a display with square pixels at `dpi`.
    pub fn uniform(dpi: f32) -> Self {
        Self {
            xdpi: dpi,
            ydpi: dpi,
            density_dpi: dpi.max(0.0).round() as u32,
        }
    }

    pub fn is_anisotropic(&self) -> bool {
        self.xdpi != self.ydpi
    }
}

/// Something that can answer "what are the default display's metrics?".
///
/// Failures must come back as [`crate::BridgeError::MetricsUnavailable`].
pub trait MetricsSource {
    fn default_display_metrics(&self) -> Result<DisplayMetrics>;
}

impl<F> MetricsSource for F
where
    F: Fn() -> Result<DisplayMetrics>,
{
    fn default_display_metrics(&self) -> Result<DisplayMetrics> {
        self()
    }
}

/// Metrics known up front, e.g. from configuration on desktop hosts.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedMetrics(pub DisplayMetrics);

impl MetricsSource for FixedMetrics {
    fn default_display_metrics(&self) -> Result<DisplayMetrics> {
        Ok(self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::BridgeError;

    #[test]
    fn test_uniform_metrics() {
        let metrics = DisplayMetrics::uniform(320.0);
        assert_eq!(metrics.xdpi, 320.0);
        assert_eq!(metrics.ydpi, 320.0);
        assert_eq!(metrics.density_dpi, 320);
        assert!(!metrics.is_anisotropic());
    }

    #[test]
    fn test_anisotropic_metrics() {
        let metrics = DisplayMetrics {
            xdpi: 403.4,
            ydpi: 402.0,
            density_dpi: 420,
        };
        assert!(metrics.is_anisotropic());
    }

    #[test]
    fn test_closure_source() {
        let failing = || -> Result<DisplayMetrics> {
            Err(BridgeError::MetricsUnavailable("no default display".into()))
        };
        assert!(matches!(
            failing.default_display_metrics(),
            Err(BridgeError::MetricsUnavailable(_))
        ));
    }

    #[test]
    fn test_fixed_source() {
        let source = FixedMetrics(DisplayMetrics::uniform(480.0));
        assert_eq!(
            source.default_display_metrics().unwrap(),
            DisplayMetrics::uniform(480.0)
        );
    }
}

use clap::Parser;
use density_bridge::{BASELINE_DPI, DisplayMetrics};

/// Display configuration for hosts that cannot query a real display.
///
/// Every flag falls back to its environment variable, then to the 160 dpi baseline.
#[derive(Parser, Debug, Clone, PartialEq)]
#[command(version, about = "Reports the display density scale to the engine, then runs it")]
pub struct HostArgs {
    /// Horizontal dots per inch of the default display
    #[arg(
        long,
        env = "DENSITY_XDPI",
        default_value_t = BASELINE_DPI,
        allow_negative_numbers = true
    )]
    pub xdpi: f32,

    /// Vertical dots per inch (defaults to --xdpi)
    #[arg(long, env = "DENSITY_YDPI", allow_negative_numbers = true)]
    pub ydpi: Option<f32>,

    /// Bucketed density reported alongside the exact values (defaults to rounded --xdpi)
    #[arg(long, env = "DENSITY_DPI")]
    pub density_dpi: Option<u32>,
}

impl HostArgs {
    pub fn metrics(&self) -> DisplayMetrics {
        let defaults = DisplayMetrics::uniform(self.xdpi);
        DisplayMetrics {
            xdpi: self.xdpi,
            ydpi: self.ydpi.unwrap_or(defaults.ydpi),
            density_dpi: self.density_dpi.unwrap_or(defaults.density_dpi),
        }
    }
}

/// Parses from the command line arguments (and their environment fallbacks).
pub fn parse_args<T: Parser>() -> Result<T, clap::Error> {
    T::try_parse()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_flags() {
        let args = HostArgs::try_parse_from([
            "density-probe",
            "--xdpi",
            "480",
            "--ydpi",
            "478.5",
            "--density-dpi",
            "480",
        ])
        .unwrap();
        assert_eq!(
            args.metrics(),
            DisplayMetrics {
                xdpi: 480.0,
                ydpi: 478.5,
                density_dpi: 480,
            }
        );
    }

    #[test]
    fn test_ydpi_and_density_follow_xdpi() {
        let args =
            HostArgs::try_parse_from(["density-probe", "--xdpi", "401.7", "--density-dpi", "400"])
                .unwrap();
        let metrics = args.metrics();
        assert_eq!(metrics.ydpi, 401.7);
        assert_eq!(metrics.density_dpi, 400);

        let args =
            HostArgs::try_parse_from(["density-probe", "--xdpi", "401.7", "--ydpi", "401.7"])
                .unwrap();
        assert_eq!(args.metrics().density_dpi, 402);
    }

    #[test]
    fn test_negative_dpi_parses_for_the_bridge_to_reject() {
        let args = HostArgs::try_parse_from(["density-probe", "--xdpi", "-160"]).unwrap();
        assert_eq!(args.xdpi, -160.0);
        assert_eq!(args.metrics().density_dpi, 0);
    }

    #[test]
    fn test_rejects_garbage() {
        assert!(HostArgs::try_parse_from(["density-probe", "--xdpi", "dense"]).is_err());
    }
}

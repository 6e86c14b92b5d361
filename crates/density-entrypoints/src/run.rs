use density_bridge::{
    DensityBridge, FixedMetrics, MetricsSource, ReportGate, STARTUP_GATE, ScaleFactor, ScaleSink,
    engine,
};

use crate::cli::HostArgs;

/// Starts a new startup on the process-wide gate.
///
/// Called once at the top of every host entry (`android_main`, `tellScale`,
/// `run_native`). A relaunch in a warm process reports again; a report still
/// in flight on another thread keeps the gate and the new one is rejected.
pub fn begin_startup() {
    if !STARTUP_GATE.begin_startup() {
        tracing::warn!("Display scale report already in flight");
    }
}

/// Reports the display scale to the engine through the process-wide gate.
///
/// Within one startup the engine is notified at most once.
pub fn report_startup_scale<S: MetricsSource>(source: S) -> density_bridge::Result<ScaleFactor> {
    report_through(&STARTUP_GATE, source, engine::set_display_scale)
}

/// Desktop startup: the display is described by configuration instead of a query.
pub fn desktop_startup_scale(args: &HostArgs) -> density_bridge::Result<ScaleFactor> {
    begin_startup();
    report_startup_scale(FixedMetrics(args.metrics()))
}

fn report_through<S, N>(
    gate: &ReportGate,
    source: S,
    sink: N,
) -> density_bridge::Result<ScaleFactor>
where
    S: MetricsSource,
    N: ScaleSink,
{
    gate.report(DensityBridge::new(source, sink))
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use density_bridge::{BridgeError, BridgeState};

    fn configured(xdpi: &str) -> FixedMetrics {
        let args = HostArgs::try_parse_from(["density-probe", "--xdpi", xdpi]).unwrap();
        FixedMetrics(args.metrics())
    }

    #[test]
    fn test_configured_scale_is_reported() {
        let gate = ReportGate::new();
        let mut calls = Vec::new();

        let scale =
            report_through(&gate, configured("320"), |scale: f32| calls.push(scale)).unwrap();

        assert_eq!(scale.get(), 2.0);
        assert_eq!(calls, vec![2.0]);
        assert_eq!(gate.state(), BridgeState::ScaleReported);
    }

    #[test]
    fn test_bad_configured_dpi_fails_fast() {
        let gate = ReportGate::new();
        let mut calls = Vec::new();

        let result = report_through(&gate, configured("0"), |scale: f32| calls.push(scale));

        assert_eq!(result, Err(BridgeError::InvalidScale(0.0)));
        assert!(calls.is_empty());
        assert_eq!(gate.state(), BridgeState::Failed);
    }

    #[test]
    fn test_only_first_host_path_reports() {
        let gate = ReportGate::new();
        let mut calls = Vec::new();

        report_through(&gate, configured("240"), |scale: f32| calls.push(scale)).unwrap();
        let second = report_through(&gate, configured("480"), |scale: f32| calls.push(scale));

        assert_eq!(second, Err(BridgeError::AlreadyReported));
        assert_eq!(calls, vec![1.5]);
    }

    #[test]
    fn test_startup_gate_notifies_engine() {
        // The only test touching the process-wide gate and engine cell
        let first = desktop_startup_scale(
            &HostArgs::try_parse_from(["density-probe", "--xdpi", "400"]).unwrap(),
        );
        assert_eq!(first.unwrap().get(), 2.5);
        assert_eq!(STARTUP_GATE.state(), BridgeState::ScaleReported);
        assert!(engine::display_scale_notified());
        assert_eq!(engine::display_scale(), 2.5);

        // Same startup: refused, engine untouched
        let again = report_startup_scale(configured("160"));
        assert_eq!(again, Err(BridgeError::AlreadyReported));
        assert_eq!(engine::display_scale(), 2.5);

        // Relaunch in the same process reports again
        begin_startup();
        let relaunch = report_startup_scale(configured("480"));
        assert_eq!(relaunch.unwrap().get(), 3.0);
        assert_eq!(engine::display_scale(), 3.0);

        let desktop_again = desktop_startup_scale(
            &HostArgs::try_parse_from(["density-probe", "--xdpi", "120"]).unwrap(),
        );
        assert_eq!(desktop_again.unwrap().get(), 0.75);
        assert_eq!(engine::display_scale(), 0.75);
    }
}

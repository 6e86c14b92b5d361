//! Density Probe - minimal host application
//!
//! Reports the display scale through the entry points, then runs a stand-in for
//! the engine main loop that only reads back what the engine received.

use density_entrypoints::HostApp;
use density_entrypoints::density_bridge::engine;

/// Stand-in engine main loop.
pub fn engine_main(_host: HostApp) {
    tracing::info!(
        "Engine sees display scale {} (notified: {})",
        engine::display_scale(),
        engine::display_scale_notified()
    );
}

// Define all platform entry points using the unified macro
density_entrypoints::density_app!("Density Probe", engine_main);

// Java activities built on SDLActivity call `tellScale(xdpi / 160f)` from onCreate
density_entrypoints::java_scale_hook!("Density Probe", "me_melchor9000_retro_RetroActivity");

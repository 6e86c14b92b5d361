/*!
Logging setup for the host entry points.

- Desktop: a `tracing-subscriber` fmt layer filtered by `RUST_LOG`
  (defaults to [`DEFAULT_FILTER`] when unset).
- Android: `android_logger` behind the `log` facade; `tracing` records reach it
  through `tracing`'s `log` feature since no subscriber is installed there.

Both are safe to call more than once; later calls are ignored.
*/

/// Filter used when `RUST_LOG` is not set.
pub const DEFAULT_FILTER: &str = "info";

#[cfg(not(target_arch = "wasm32"))]
pub fn setup_logging() {
    use tracing_subscriber::EnvFilter;
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    let fmt_layer = fmt::layer().with_filter(filter);

    if tracing_subscriber::registry()
        .with(fmt_layer)
        .try_init()
        .is_ok()
    {
        tracing::debug!("Logging initialized");
    }
}

#[cfg(target_os = "android")]
pub fn setup_android_logging(tag: &str) {
    android_logger::init_once(
        android_logger::Config::default()
            .with_max_level(log::LevelFilter::Info)
            .with_tag(tag),
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_setup_logging_twice() {
        setup_logging();
        setup_logging();
        tracing::info!("still logging after a second setup");
    }
}

//! Logging configuration.
//!
//! Logs go to stdout at INFO. Set `DEBUG_LOGGING=1` to enable debug output
//! for the meter crates.

use tracing_subscriber::{
    EnvFilter,
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

pub fn init() {
    let debug_logging = std::env::var("DEBUG_LOGGING").is_ok();

    let stdout_layer = fmt::layer()
        .with_writer(std::io::stdout)
        .with_target(false)
        .with_span_events(FmtSpan::NONE);

    let filter_directive = if debug_logging {
        "info,meter_core=debug,meter_cli=debug,pantheon_meter=debug"
    } else {
        "info"
    };

    tracing_subscriber::registry()
        .with(stdout_layer)
        .with(EnvFilter::new(filter_directive))
        .init();

    tracing::debug!(debug_logging, "Logging initialized");
}

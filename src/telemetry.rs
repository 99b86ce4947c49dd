//! Tracing initialization
//!
//! Console logging by default, JSON output when `LOG_FORMAT=json` is set
//! (for log aggregation in deployed environments). The filter honors
//! `RUST_LOG` and falls back to debug-level output for this crate.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initialize the global tracing subscriber
///
/// Safe to call more than once; subsequent calls are no-ops. Tests rely on
/// this when several of them initialize telemetry independently.
pub fn init_telemetry() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| "coursekit=debug,info".into());

    let json = std::env::var("LOG_FORMAT")
        .map(|v| v.eq_ignore_ascii_case("json"))
        .unwrap_or(false);

    if json {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().json().with_current_span(true))
            .try_init()
            .ok();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().with_target(false).with_level(true))
            .try_init()
            .ok();
    }
}

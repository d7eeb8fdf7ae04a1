use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, fmt::{self, format::FmtSpan}};

/// Installs the global subscriber. `RUST_LOG` selects the filter (default
/// `info`); a debug filter also logs span timings on close.
///
/// Logs go to stderr: stdout carries the user-facing report.
pub fn init() {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info"));
    let span_events = span_events_for(&env_filter.to_string());

    let fmt_layer = fmt::layer()
        .with_target(false)
        .with_writer(std::io::stderr)
        .with_timer(fmt::time::uptime())
        .with_span_events(span_events);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .init();
}

/// Stage timings are only worth the noise when some directive asks for
/// debug or trace output.
fn span_events_for(filter: &str) -> FmtSpan {
    let verbose = filter
        .split(',')
        .any(|directive| directive.ends_with("debug") || directive.ends_with("trace"));
    if verbose { FmtSpan::CLOSE } else { FmtSpan::NONE }
}

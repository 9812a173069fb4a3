use tracing_subscriber::{fmt, prelude::*, EnvFilter};

pub const LOG_VAR: &str = "SCOREKEEPER_LOG";

/// Filter from `SCOREKEEPER_LOG`, then `RUST_LOG`, defaulting to `warn`.
fn env_filter() -> EnvFilter {
    EnvFilter::try_from_env(LOG_VAR)
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| EnvFilter::new("warn"))
}

/// Install the global subscriber. Logs go to stderr so they never mix with
/// the shell's output.
pub fn init_tracing(json: bool) {
    let registry = tracing_subscriber::registry().with(env_filter());

    if json {
        let fmt_layer = fmt::layer()
            .with_target(false)
            .with_file(false)
            .with_line_number(false)
            .with_thread_ids(false)
            .with_thread_names(false)
            .with_ansi(false)
            .with_writer(std::io::stderr)
            .json();
        registry.with(fmt_layer).init();
    } else {
        let fmt_layer = fmt::layer()
            .with_target(false)
            .compact()
            .with_writer(std::io::stderr);
        registry.with(fmt_layer).init();
    }
}

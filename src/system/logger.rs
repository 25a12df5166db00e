use tracing_subscriber::{EnvFilter, FmtSubscriber};

/// Filter used when no valid directive is configured.
const DEFAULT_DIRECTIVE: &str = "info";
const VERBOSE_DIRECTIVE: &str = "debug";

/// Install the global `tracing` subscriber, logging to stderr.
///
/// `LOADREPORT_LOG` takes precedence over `RUST_LOG`. Later calls are no-ops.
pub fn init_logging(verbose: bool, no_color: bool) {
    let configured = std::env::var("LOADREPORT_LOG")
        .or_else(|_| std::env::var("RUST_LOG"))
        .ok();

    let subscriber = FmtSubscriber::builder()
        .with_env_filter(log_filter(verbose, configured.as_deref()))
        .with_ansi(!no_color)
        .with_writer(std::io::stderr)
        .finish();

    if let Err(err) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Failed to set global default subscriber: {}", err);
    }
}

/// A configured directive wins over `verbose`; an invalid one falls back to `info`.
fn log_filter(verbose: bool, configured: Option<&str>) -> EnvFilter {
    configured.map_or_else(
        || {
            if verbose {
                EnvFilter::new(VERBOSE_DIRECTIVE)
            } else {
                EnvFilter::new(DEFAULT_DIRECTIVE)
            }
        },
        |value| EnvFilter::try_new(value).unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVE)),
    )
}

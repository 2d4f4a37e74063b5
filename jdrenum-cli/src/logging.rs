use tracing_subscriber::{fmt, EnvFilter};

const VERBOSE_LOG_FILTER: &str = "jdrenum=debug,jdrenum_core=debug";
const DEFAULT_LOG_FILTER: &str = "warn";

/// Pick the log filter: `RUST_LOG` wins, then `--verbose`, then warnings only.
pub fn log_filter(verbose: bool) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(if verbose {
            VERBOSE_LOG_FILTER
        } else {
            DEFAULT_LOG_FILTER
        })
    })
}

/// Send tracing output to stderr so stdout only carries the report.
///
/// Installs the global subscriber; call once, from `main`.
pub fn init_logging(verbose: bool, use_color: bool) {
    fmt()
        .with_env_filter(log_filter(verbose))
        .with_writer(std::io::stderr)
        .with_ansi(use_color)
        .with_target(false)
        .init();
}

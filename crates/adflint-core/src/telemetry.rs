//! One-time tracing initialisation for adflint binaries.
//!
//! Loader and checker diagnostics go through `tracing`, never stdout, so
//! the rendered report stays machine-readable. Call [`init_tracing`] once
//! at program start; the global subscriber can only be installed once per
//! process, and subsequent calls are silently ignored.

use tracing::Level;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

/// Install the global tracing subscriber.
///
/// * `json`: when `true`, emit newline-delimited JSON log lines instead
///   of the human-readable format.
/// * `verbose`: default to `DEBUG` instead of `INFO` when `RUST_LOG` is
///   not set.
///
/// `RUST_LOG` always wins for fine-grained filtering; the `verbose` flag
/// only picks the fallback level.
pub fn init_tracing(json: bool, verbose: bool) {
    let default_level = if verbose { Level::DEBUG } else { Level::INFO };
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level.as_str()));

    // Logs go to stderr; stdout is reserved for the rendered report.
    if json {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_writer(std::io::stderr)
                    .json(),
            )
            .try_init()
            .ok();
    } else {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
            .try_init()
            .ok();
    }
}

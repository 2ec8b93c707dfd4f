//! Tracing setup for the CLI.

use tracing_subscriber::EnvFilter;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize tracing to stderr.
///
/// The filter defaults to `info`; override it with the `PROFEED_LOG`
/// environment variable (standard `RUST_LOG` syntax). Output goes to
/// stderr so the rendered aggregate on stdout stays clean.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_env("PROFEED_LOG").unwrap_or_else(|_| EnvFilter::new("info"));

    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true);

    tracing_subscriber::registry()
        .with(filter)
        .with(stderr_layer)
        .init();
}

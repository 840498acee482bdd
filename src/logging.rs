//! Diagnostics for the CLI.
//!
//! Configure via `RUST_LOG`:
//! - `RUST_LOG=debug` - corpus loading and per-document timing
//! - `RUST_LOG=seekbench::bench=debug` - module-level filtering
//!
//! Output goes to stderr so reports on stdout stay machine-readable.

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Install the global subscriber. Defaults to `warn` when `RUST_LOG` is unset
/// or invalid. Calling it twice is harmless: the second call is ignored.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    let console_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_line_number(true);

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(console_layer)
        .try_init();
}

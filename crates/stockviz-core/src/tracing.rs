//! Logging setup with stage prefixes.
//!
//! Every binary in the workspace configures logging through here so output
//! looks the same regardless of entry point.

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize tracing with the default `info` filter.
pub fn init() {
    init_with_filter("info");
}

/// Initialize tracing with a custom default filter.
///
/// `RUST_LOG` wins over `default_filter` when set. Calling this twice is a
/// no-op rather than a panic.
pub fn init_with_filter(default_filter: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().compact().with_target(false))
        .try_init();
}

/// Stage prefixes for log lines.
pub mod prefix {
    /// Embedding file ingestion
    pub const LOAD: &str = "⊔";
    /// Dimensionality reduction
    pub const REDUCE: &str = "꩜";
    /// Scene drawing and display
    pub const RENDER: &str = "✿";
}

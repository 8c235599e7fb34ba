//! Logging setup for the binary.
//!
//! Diagnostics go to stderr; stdout carries nothing but translation output.

use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::LevelFilter;

/// Environment variable whose filter directives override the CLI level.
pub const LOG_ENV: &str = "RULEBRIDGE_LOG";

/// Builds the filter from an optional directive string and a fallback level.
///
/// Invalid or empty directives fall back to `level`.
#[must_use]
pub fn build_filter(directives: Option<&str>, level: LevelFilter) -> EnvFilter {
    directives
        .filter(|d| !d.trim().is_empty())
        .and_then(|d| EnvFilter::try_new(d).ok())
        .unwrap_or_else(|| {
            EnvFilter::builder()
                .with_default_directive(level.into())
                .parse_lossy("")
        })
}

/// Installs the global subscriber. Later calls are ignored.
pub fn init(level: LevelFilter) {
    let directives = std::env::var(LOG_ENV).ok();
    let filter = build_filter(directives.as_deref(), level);
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

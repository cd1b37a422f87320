//! Structured logging setup using the `tracing` ecosystem.
//!
//! The client only emits events; it never installs a subscriber on its own.
//! Applications and tests call `init_console_logging` once.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initialize a console-only tracing subscriber.
///
/// # Arguments
/// * `level` - Log level string: "trace", "debug", "info", "warn", "error"
///
/// Subsequent calls are no-ops.
pub fn init_console_logging(level: &str) {
    let env_filter = EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new("info"));

    let _ = tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer().with_target(true).compact())
        .try_init();

    tracing::debug!("console logging initialized at level={level}");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_console_logging_does_not_panic() {
        // Just verify it doesn't panic. Subsequent calls are no-ops.
        init_console_logging("debug");
        init_console_logging("not-a-level");
    }
}

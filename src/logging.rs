//! Logging bootstrap.
//!
//! Logs go to stderr only: stdout belongs to the terminal front-end.
//! `RUST_LOG` wins over the configured level when it is set.

use tracing_subscriber::EnvFilter;

/// Install the global `tracing` subscriber.
///
/// Returns `false` if a subscriber was already installed (for example by an
/// earlier call); the existing one is kept. Never panics.
pub fn init(default_level: &str) -> bool {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_is_idempotent() {
        // A second call must not panic; whichever call came first wins.
        let _ = init("warn");
        assert!(!init("debug"));
    }
}

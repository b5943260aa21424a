//! Structured logging.
//!
//! # Responsibilities
//! - Initialize the tracing subscriber for test runs
//! - Honour `RUST_LOG`, falling back to a configured directive
//!
//! # Design Decisions
//! - Output goes through the test writer so `cargo test` captures it
//! - Safe to call from every test: only the first call installs anything

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::ObservabilityConfig;

/// Install a global subscriber. Returns `false` if one was already set.
pub fn init_logging(default_directive: &str) -> bool {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_directive));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_test_writer())
        .try_init()
        .is_ok()
}

/// Install a subscriber using a fixture's observability settings.
pub fn init_from_config(config: &ObservabilityConfig) -> bool {
    init_logging(&config.log_level)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_second_init_is_harmless() {
        init_logging("route_tester=debug");
        assert!(!init_from_config(&ObservabilityConfig::default()));
    }
}

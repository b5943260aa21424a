//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! routing, assertions, fixture loading produce:
//!     → tracing events (resolution, generation, verdicts)
//!
//! Consumers:
//!     → logging.rs subscriber (test output, filtered by RUST_LOG)
//! ```
//!
//! # Design Decisions
//! - Structured fields, never formatted-only messages
//! - Library code emits events; only tests or the caller install a subscriber

pub mod logging;

pub use logging::init_logging;

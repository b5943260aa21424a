//! Simulated HTTP requests.
//!
//! # Data Flow
//! ```text
//! literal url + method
//!     → request.rs (normalize to "~/..." form, parse method)
//!     → SimulatedRequest (axum::http::Request<()>)
//!     → Router::resolve / Router::generate_url
//! ```

pub mod request;

pub use request::{normalize_url, HttpRequestSimulator, RequestSimulator, SimulatedRequest};

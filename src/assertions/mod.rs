//! Route assertions.
//!
//! # Data Flow
//! ```text
//! RouteTester::with_incoming_request(url)
//!     → incoming.rs (resolve, then area → controller → action → values)
//!     → Ok(()) or AssertionError
//!
//! RouteTester::with_route_info(controller, action, values)
//!     → outgoing.rs (generate, exact comparison)
//!     → Ok(()) or AssertionError
//! ```
//!
//! # Design Decisions
//! - Assertions borrow the router; they never mutate it
//! - Mismatches are values, not panics; callers decide how to fail

pub mod incoming;
pub mod outgoing;

pub use incoming::IncomingRouteAssertion;
pub use outgoing::OutgoingRouteAssertion;

//! Routing subsystem.
//!
//! # Data Flow
//! ```text
//! Incoming test (url, method)
//!     → router.rs (route lookup, first match wins)
//!     → matcher.rs (pattern match, defaults)
//!     → Return: RouteData or None
//!
//! Outgoing test (area, controller, action, values)
//!     → router.rs (first route that can express the values)
//!     → matcher.rs (bind values into a path)
//!     → Return: virtual path or None
//!
//! Table population (fixture setup):
//!     RegistrationEntryPoint
//!     → registration.rs (area or application registration)
//!     → RouteTable (non-empty, immutable from here on)
//! ```
//!
//! # Design Decisions
//! - The assertion engine only sees the `Router` trait; `RouteTable` is one implementation
//! - Deterministic: same input always resolves to the same route

pub mod matcher;
pub mod registration;
pub mod router;

use crate::http::SimulatedRequest;
use crate::model::{GenerationTarget, RouteData};

pub use matcher::{RoutePattern, RoutePatternError};
pub use registration::{
    populate, AreaRegistration, AreaRegistrationContext, RegistrationEntryPoint, RouteRegistrar,
};
pub use router::{Route, RouteTable};

/// A routing component under test. A router owns its route table.
pub trait Router {
    /// Number of routes in the table.
    fn route_count(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.route_count() == 0
    }

    /// Resolve a simulated request, or `None` when no route matches.
    fn resolve(&self, request: &SimulatedRequest) -> Option<RouteData>;

    /// Generate a url for the target, using `context` as ambient request state.
    /// Paths carry no leading `/` except the application root, which is `/`.
    fn generate_url(&self, target: &GenerationTarget, context: &SimulatedRequest) -> Option<String>;
}

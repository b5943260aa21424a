//! Route fixture configuration.
//!
//! # Data Flow
//! ```text
//! fixture file (TOML)
//!     → loader.rs (read & deserialize)
//!     → validation.rs (semantic checks)
//!     → RouteFixture (validated)
//!     → routing::populate (application or area registration)
//!     → RouteTable shared by the tester
//! ```
//!
//! # Design Decisions
//! - A fixture is read once per test fixture; tables are never reloaded
//! - A fixture may be as small as one `[[routes]]` entry with a `url`
//! - Route patterns are checked during validation, before any table exists

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_fixture, parse_fixture, ConfigError};
pub use schema::{ConfigValue, ObservabilityConfig, RouteConfig, RouteFixture};
pub use validation::{validate_fixture, ValidationError};

//! Route assertion engine.
//!
//! Verifies that an application's route table resolves request urls to the
//! expected area, controller, action and values, and that routing attributes
//! generate the expected urls.
//!
//! ```text
//! RouteTester::new(routes)
//!     .with_incoming_request("~/products/show/42")?
//!     .should_match_route("products", "show", Some(route_values! { "id" => 42 }))?;
//! ```

pub mod assertions;
pub mod compare;
pub mod config;
pub mod error;
pub mod http;
pub mod model;
pub mod observability;
pub mod routing;
pub mod tester;
pub mod values;

pub use config::schema::RouteFixture;
pub use error::{ArgumentError, AssertionError, RouteTestError};
pub use model::{GenerationTarget, RouteExpectation};
pub use routing::{Route, RouteTable, Router};
pub use tester::RouteTester;
pub use values::{RouteValue, RouteValues};

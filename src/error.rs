//! Error taxonomy.
//!
//! Two disjoint kinds: [`ArgumentError`] for caller misuse, raised at the
//! offending call, and [`AssertionError`] for a scenario that does not hold.
//! Both carry enough context to be read without a debugger.

use thiserror::Error;

use crate::compare::ValueMismatch;
use crate::config::loader::ConfigError;
use crate::model::GenerationTarget;
use crate::values::RouteValue;

/// Caller misuse. Never recovered internally.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ArgumentError {
    /// A required string argument was empty or whitespace.
    #[error("{message} (parameter: {param})")]
    Blank {
        param: &'static str,
        message: &'static str,
    },

    #[error("There are no routes in the route table.")]
    EmptyRouteTable,

    #[error("Url \"{url}\" cannot be used as a request url: {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("\"{method}\" is not a valid HTTP method.")]
    InvalidMethod { method: String },

    #[error("A route value with key \"{key}\" was already supplied.")]
    DuplicateRouteValue { key: String },

    #[error("Unsupported registration entry point \"{kind}\"; expected \"application\" or \"area\".")]
    UnsupportedEntryPoint { kind: String },
}

impl ArgumentError {
    pub(crate) fn blank(param: &'static str, message: &'static str) -> Self {
        ArgumentError::Blank { param, message }
    }
}

/// Reject empty or whitespace-only required strings.
pub(crate) fn require_non_blank(
    value: &str,
    param: &'static str,
    message: &'static str,
) -> Result<(), ArgumentError> {
    if value.trim().is_empty() {
        return Err(ArgumentError::blank(param, message));
    }
    Ok(())
}

/// A routing scenario that does not hold.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AssertionError {
    #[error("No matching route was found (for url: \"{url}\").")]
    NoRouteMatched { url: String },

    #[error(
        "Area name mismatch. Expected: \"{}\", but was: \"{}\" (for url: \"{url}\").",
        .expected.as_deref().unwrap_or_default(),
        .actual.as_deref().unwrap_or_default()
    )]
    AreaMismatch {
        expected: Option<String>,
        actual: Option<String>,
        url: String,
    },

    #[error("Controller name mismatch. Expected: \"{expected}\", but was: \"{actual}\" (for url: \"{url}\").")]
    ControllerMismatch {
        expected: String,
        actual: RouteValue,
        url: String,
    },

    #[error("Action name mismatch. Expected: \"{expected}\", but was: \"{actual}\" (for url: \"{url}\").")]
    ActionMismatch {
        expected: String,
        actual: RouteValue,
        url: String,
    },

    #[error("Route values mismatch. Expected: {expected} route values, but was: {actual} route values (for url: \"{url}\").")]
    RouteValueCountMismatch {
        expected: usize,
        actual: usize,
        url: String,
    },

    #[error("Route values mismatch. Expected route value with key \"{key}\" was not found (for url: \"{url}\").")]
    RouteValueMissing { key: String, url: String },

    #[error(
        "Route values mismatch. Expected: route value with key \"{key}\" and value \"{expected}\", \
         but was: route value with key \"{key}\" and value \"{actual}\" (for url: \"{url}\")."
    )]
    RouteValueValueMismatch {
        key: String,
        expected: RouteValue,
        actual: RouteValue,
        url: String,
    },

    #[error("Route values mismatch. Unexpected route value with key \"{key}\" and value \"{value}\" was found (for url: \"{url}\").")]
    UnexpectedRouteValue {
        key: String,
        value: RouteValue,
        url: String,
    },

    #[error(
        "URL mismatch. Expected: \"{expected}\", but was: \"{}\" (for route: {target}).",
        .actual.as_deref().unwrap_or_default()
    )]
    UrlMismatch {
        expected: String,
        actual: Option<String>,
        target: GenerationTarget,
    },

    #[error("A matching route was found (for url: \"{url}\").")]
    RouteFoundButShouldNotMatch { url: String },

    #[error("The request was not ignored (for url: \"{url}\").")]
    RequestNotIgnored { url: String },
}

impl AssertionError {
    /// Attach the originating url to a value-set mismatch.
    pub fn from_value_mismatch(mismatch: ValueMismatch, url: &str) -> Self {
        let url = url.to_string();
        match mismatch {
            ValueMismatch::Count { expected, actual } => {
                AssertionError::RouteValueCountMismatch { expected, actual, url }
            }
            ValueMismatch::Missing { key } => AssertionError::RouteValueMissing { key, url },
            ValueMismatch::Value { key, expected, actual } => {
                AssertionError::RouteValueValueMismatch { key, expected, actual, url }
            }
            ValueMismatch::Unexpected { key, value } => {
                AssertionError::UnexpectedRouteValue { key, value, url }
            }
        }
    }
}

/// Any failure a route test can produce.
#[derive(Debug, Error)]
pub enum RouteTestError {
    #[error(transparent)]
    Argument(#[from] ArgumentError),

    #[error(transparent)]
    Assertion(#[from] AssertionError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl RouteTestError {
    pub fn as_assertion(&self) -> Option<&AssertionError> {
        match self {
            RouteTestError::Assertion(e) => Some(e),
            _ => None,
        }
    }

    pub fn as_argument(&self) -> Option<&ArgumentError> {
        match self {
            RouteTestError::Argument(e) => Some(e),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_area_mismatch_display_without_expected_area() {
        let err = AssertionError::AreaMismatch {
            expected: None,
            actual: Some("admin".into()),
            url: "admin/users".into(),
        };
        assert_eq!(
            err.to_string(),
            "Area name mismatch. Expected: \"\", but was: \"admin\" (for url: \"admin/users\")."
        );
    }

    #[test]
    fn test_value_mismatch_display() {
        let err = AssertionError::from_value_mismatch(
            ValueMismatch::Value {
                key: "id".into(),
                expected: 43.into(),
                actual: "42".into(),
            },
            "products/show/42",
        );
        assert_eq!(
            err.to_string(),
            "Route values mismatch. Expected: route value with key \"id\" and value \"43\", \
             but was: route value with key \"id\" and value \"42\" (for url: \"products/show/42\")."
        );
    }

    #[test]
    fn test_blank_display() {
        let err = ArgumentError::blank("url", "Url cannot be null or empty.");
        assert_eq!(err.to_string(), "Url cannot be null or empty. (parameter: url)");
    }

    #[test]
    fn test_require_non_blank() {
        assert!(require_non_blank("home", "controller", "x").is_ok());
        assert!(matches!(
            require_non_blank("  \t", "controller", "x"),
            Err(ArgumentError::Blank { param: "controller", .. })
        ));
    }
}

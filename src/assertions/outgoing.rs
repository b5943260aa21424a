//! Outgoing route assertions.
//!
//! Generation is held to a stricter standard than resolution: the generated
//! url must equal the expected literal exactly, case included.

use crate::error::{require_non_blank, ArgumentError, AssertionError, RouteTestError};
use crate::http::SimulatedRequest;
use crate::model::GenerationTarget;
use crate::routing::Router;

const EXPECTED_URL_PARAM: &str = "expected_url";
const URL_REQUIRED: &str = "Url cannot be null or empty.";

/// Assertions about the url generated for a set of routing attributes.
#[derive(Debug)]
pub struct OutgoingRouteAssertion<'a, R: ?Sized> {
    routes: &'a R,
    target: GenerationTarget,
    context: SimulatedRequest,
}

impl<'a, R: Router + ?Sized> OutgoingRouteAssertion<'a, R> {
    pub(crate) fn new(routes: &'a R, target: GenerationTarget, context: SimulatedRequest) -> Self {
        Self {
            routes,
            target,
            context,
        }
    }

    pub fn target(&self) -> &GenerationTarget {
        &self.target
    }

    /// Assert the target generates exactly `expected_url`.
    pub fn should_generate_url(&self, expected_url: &str) -> Result<(), RouteTestError> {
        require_non_blank(expected_url, EXPECTED_URL_PARAM, URL_REQUIRED)?;
        self.compare(expected_url)?;
        Ok(())
    }

    /// Like [`Self::should_generate_url`], but reports a mismatch as `Ok(false)`.
    /// Argument errors are still returned as errors.
    pub fn generates_url(&self, expected_url: &str) -> Result<bool, ArgumentError> {
        require_non_blank(expected_url, EXPECTED_URL_PARAM, URL_REQUIRED)?;
        Ok(self.compare(expected_url).is_ok())
    }

    fn compare(&self, expected_url: &str) -> Result<(), AssertionError> {
        let generated = self.routes.generate_url(&self.target, &self.context);
        if generated.as_deref() == Some(expected_url) {
            return Ok(());
        }

        tracing::debug!(
            expected = expected_url,
            actual = generated.as_deref().unwrap_or("-"),
            "Url assertion failed"
        );
        Err(AssertionError::UrlMismatch {
            expected: expected_url.to_string(),
            actual: generated,
            target: self.target.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::{HttpRequestSimulator, RequestSimulator};
    use crate::route_values;
    use crate::routing::RouteTable;
    use crate::values::RouteValue;

    fn routes() -> RouteTable {
        let mut routes = RouteTable::new();
        routes
            .map_route(
                "Default",
                "{controller}/{action}/{id}",
                route_values! { "action" => "Index", "id" => RouteValue::Optional },
            )
            .unwrap();
        routes
    }

    fn assertion(routes: &RouteTable, target: GenerationTarget) -> OutgoingRouteAssertion<'_, RouteTable> {
        OutgoingRouteAssertion::new(routes, target, HttpRequestSimulator.build_context())
    }

    #[test]
    fn test_generates_expected_url() {
        let routes = routes();
        let check = assertion(&routes, GenerationTarget::new("home", "about", None).unwrap());
        check.should_generate_url("home/about").unwrap();
        assert_eq!(check.generates_url("home/about"), Ok(true));
    }

    #[test]
    fn test_comparison_is_case_sensitive() {
        let routes = routes();
        let check = assertion(&routes, GenerationTarget::new("home", "about", None).unwrap());

        let err = check.should_generate_url("Home/About").unwrap_err();
        match err.as_assertion() {
            Some(AssertionError::UrlMismatch { expected, actual, .. }) => {
                assert_eq!(expected, "Home/About");
                assert_eq!(actual.as_deref(), Some("home/about"));
            }
            other => panic!("unexpected error: {:?}", other),
        }
        assert_eq!(check.generates_url("Home/About"), Ok(false));
    }

    #[test]
    fn test_nothing_generated_is_a_mismatch() {
        let routes = routes();
        let target = GenerationTarget::in_area("admin", "users", "edit", Some(route_values! { "id" => 7 })).unwrap();
        let check = assertion(&routes, target);

        let err = check.should_generate_url("admin/users/edit/7").unwrap_err();
        assert_eq!(
            err.to_string(),
            "URL mismatch. Expected: \"admin/users/edit/7\", but was: \"\" \
             (for route: area = \"admin\", controller = \"users\", action = \"edit\", values = {id = \"7\"})."
        );
    }

    #[test]
    fn test_blank_expected_url_is_an_argument_error() {
        let routes = routes();
        let check = assertion(&routes, GenerationTarget::new("home", "about", None).unwrap());
        assert!(matches!(
            check.generates_url("  "),
            Err(ArgumentError::Blank { param: "expected_url", .. })
        ));
        assert!(matches!(
            check.should_generate_url(""),
            Err(RouteTestError::Argument(ArgumentError::Blank { param: "expected_url", .. }))
        ));
    }
}

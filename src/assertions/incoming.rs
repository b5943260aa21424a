//! Incoming route assertions.
//!
//! # Responsibilities
//! - Resolve one simulated request through the router
//! - Compare the resolved area, controller, action and values to expectations
//! - Assert that a request matches nothing, or is ignored
//!
//! # Design Decisions
//! - Checks run in a fixed order and stop at the first mismatch:
//!   route found → area → controller → action → values
//! - A route registered in an area must be asserted with its area
//! - The assertion holds no mutable state; calling it twice gives the same verdict

use crate::compare::{diff_value_sets, scalar_equals};
use crate::error::{AssertionError, RouteTestError};
use crate::http::SimulatedRequest;
use crate::model::{ResolvedRoute, RouteExpectation};
use crate::routing::Router;
use crate::values::{RouteValue, RouteValues};

/// Assertions about how a single request resolves.
#[derive(Debug)]
pub struct IncomingRouteAssertion<'a, R: ?Sized> {
    routes: &'a R,
    request: SimulatedRequest,
    url: String,
}

impl<'a, R: Router + ?Sized> IncomingRouteAssertion<'a, R> {
    pub(crate) fn new(routes: &'a R, request: SimulatedRequest, url: impl Into<String>) -> Self {
        Self {
            routes,
            request,
            url: url.into(),
        }
    }

    /// The literal url under test.
    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn request(&self) -> &SimulatedRequest {
        &self.request
    }

    /// Assert the request resolves to a route inside `expected_area`.
    pub fn should_match_area_route(
        &self,
        expected_area: &str,
        expected_controller: &str,
        expected_action: &str,
        expected_values: Option<RouteValues>,
    ) -> Result<(), RouteTestError> {
        let expectation =
            RouteExpectation::in_area(expected_area, expected_controller, expected_action, expected_values)?;
        self.check(&expectation)?;
        Ok(())
    }

    /// Assert the request resolves to a route outside any area.
    pub fn should_match_route(
        &self,
        expected_controller: &str,
        expected_action: &str,
        expected_values: Option<RouteValues>,
    ) -> Result<(), RouteTestError> {
        let expectation = RouteExpectation::new(expected_controller, expected_action, expected_values)?;
        self.check(&expectation)?;
        Ok(())
    }

    /// Assert against a prepared expectation; its area decides which checks apply.
    pub fn should_match(&self, expectation: &RouteExpectation) -> Result<(), AssertionError> {
        self.check(expectation)
    }

    /// Assert that no route matches the request. Ignore routes count as matches.
    pub fn should_match_no_route(&self) -> Result<(), AssertionError> {
        if self.routes.resolve(&self.request).is_some() {
            return Err(AssertionError::RouteFoundButShouldNotMatch { url: self.url.clone() });
        }
        Ok(())
    }

    /// Assert that the request is excluded from dispatch by an ignore route.
    pub fn should_be_ignored(&self) -> Result<(), AssertionError> {
        let ignored = self
            .routes
            .resolve(&self.request)
            .is_some_and(|data| ResolvedRoute::from(&data).is_ignored);

        if !ignored {
            return Err(AssertionError::RequestNotIgnored { url: self.url.clone() });
        }
        Ok(())
    }

    fn check(&self, expectation: &RouteExpectation) -> Result<(), AssertionError> {
        let resolved = self.resolve()?;

        if let Some(expected_area) = &expectation.area {
            let actual = RouteValue::from(resolved.area.as_deref());
            if !scalar_equals(&actual, &RouteValue::from(expected_area)) {
                return Err(self.fail(AssertionError::AreaMismatch {
                    expected: Some(expected_area.clone()),
                    actual: resolved.area.clone(),
                    url: self.url.clone(),
                }));
            }
        }

        self.check_route(expectation, &resolved, expectation.area.is_some())
    }

    /// Controller, action and value checks. `area_checked` records whether the
    /// caller already verified the area; area routes are rejected otherwise.
    fn check_route(
        &self,
        expectation: &RouteExpectation,
        resolved: &ResolvedRoute,
        area_checked: bool,
    ) -> Result<(), AssertionError> {
        if let (Some(area), false) = (&resolved.area, area_checked) {
            return Err(self.fail(AssertionError::AreaMismatch {
                expected: None,
                actual: Some(area.clone()),
                url: self.url.clone(),
            }));
        }

        if !scalar_equals(&RouteValue::from(&expectation.controller), &resolved.controller) {
            return Err(self.fail(AssertionError::ControllerMismatch {
                expected: expectation.controller.clone(),
                actual: resolved.controller.clone(),
                url: self.url.clone(),
            }));
        }

        if !scalar_equals(&RouteValue::from(&expectation.action), &resolved.action) {
            return Err(self.fail(AssertionError::ActionMismatch {
                expected: expectation.action.clone(),
                actual: resolved.action.clone(),
                url: self.url.clone(),
            }));
        }

        if let Some(mismatch) = diff_value_sets(expectation.values.as_ref(), &resolved.values) {
            return Err(self.fail(AssertionError::from_value_mismatch(mismatch, &self.url)));
        }

        tracing::debug!(url = %self.url, "Route assertion passed");
        Ok(())
    }

    fn resolve(&self) -> Result<ResolvedRoute, AssertionError> {
        match self.routes.resolve(&self.request) {
            Some(data) => Ok(ResolvedRoute::from(&data)),
            None => Err(self.fail(AssertionError::NoRouteMatched { url: self.url.clone() })),
        }
    }

    fn fail(&self, error: AssertionError) -> AssertionError {
        tracing::debug!(url = %self.url, method = %self.request.method(), error = %error, "Route assertion failed");
        error
    }
}

//! Entry point for route tests.
//!
//! A [`RouteTester`] binds a router once and hands out incoming and outgoing
//! assertions. The router is shared behind an `Arc` so one table can serve
//! many tests.

use std::path::Path;
use std::sync::Arc;

use crate::assertions::{IncomingRouteAssertion, OutgoingRouteAssertion};
use crate::config::{load_fixture, validate_fixture, ConfigError, RouteFixture};
use crate::error::{ArgumentError, RouteTestError};
use crate::http::{HttpRequestSimulator, RequestSimulator};
use crate::model::GenerationTarget;
use crate::routing::{populate, RegistrationEntryPoint, RouteTable, Router};
use crate::values::RouteValues;

#[derive(Debug, Clone)]
pub struct RouteTester<R: ?Sized, S = HttpRequestSimulator> {
    routes: Arc<R>,
    simulator: S,
}

impl<R: Router + ?Sized> RouteTester<R> {
    /// Bind a router using the default request simulator.
    pub fn new(routes: impl Into<Arc<R>>) -> Result<Self, ArgumentError> {
        Self::with_simulator(routes, HttpRequestSimulator)
    }
}

impl<R: Router + ?Sized, S: RequestSimulator> RouteTester<R, S> {
    pub fn with_simulator(routes: impl Into<Arc<R>>, simulator: S) -> Result<Self, ArgumentError> {
        let routes = routes.into();
        if routes.is_empty() {
            return Err(ArgumentError::EmptyRouteTable);
        }

        tracing::debug!(routes = routes.route_count(), "Route tester created");
        Ok(Self { routes, simulator })
    }

    pub fn routes(&self) -> &Arc<R> {
        &self.routes
    }

    /// Start an incoming assertion for a GET request to `url`.
    pub fn with_incoming_request(&self, url: &str) -> Result<IncomingRouteAssertion<'_, R>, ArgumentError> {
        self.with_incoming_request_method(url, "GET")
    }

    pub fn with_incoming_request_method(
        &self,
        url: &str,
        method: &str,
    ) -> Result<IncomingRouteAssertion<'_, R>, ArgumentError> {
        let request = self.simulator.build_request(url, method)?;
        Ok(IncomingRouteAssertion::new(&*self.routes, request, url))
    }

    /// Start an outgoing assertion for a route inside `area`.
    pub fn with_area_route_info(
        &self,
        area: &str,
        controller: &str,
        action: &str,
        values: Option<RouteValues>,
    ) -> Result<OutgoingRouteAssertion<'_, R>, ArgumentError> {
        let target = GenerationTarget::in_area(area, controller, action, values)?;
        Ok(OutgoingRouteAssertion::new(&*self.routes, target, self.simulator.build_context()))
    }

    /// Start an outgoing assertion for a route outside any area.
    pub fn with_route_info(
        &self,
        controller: &str,
        action: &str,
        values: Option<RouteValues>,
    ) -> Result<OutgoingRouteAssertion<'_, R>, ArgumentError> {
        let target = GenerationTarget::new(controller, action, values)?;
        Ok(OutgoingRouteAssertion::new(&*self.routes, target, self.simulator.build_context()))
    }
}

impl RouteTester<RouteTable> {
    /// Populate a route table from a registration entry point.
    pub fn from_registration(entry: RegistrationEntryPoint<'_>) -> Result<Self, RouteTestError> {
        let routes = populate(entry)?;
        Ok(Self::new(routes)?)
    }

    pub fn from_fixture(fixture: &RouteFixture) -> Result<Self, RouteTestError> {
        let entry = fixture.entry_point()?;
        validate_fixture(fixture).map_err(ConfigError::Validation)?;
        Self::from_registration(entry)
    }

    pub fn from_fixture_file(path: impl AsRef<Path>) -> Result<Self, RouteTestError> {
        let fixture = load_fixture(path.as_ref())?;
        Self::from_fixture(&fixture)
    }
}

//! Reference route table.
//!
//! # Responsibilities
//! - Store routes in registration order
//! - Resolve a simulated request to the first matching route
//! - Generate a url from route values using the first route that fits
//!
//! # Design Decisions
//! - Immutable once handed to a tester (shared through `Arc`)
//! - First match wins, in both directions
//! - Ignore routes resolve (with the stop-routing handler) but never generate
//! - Explicit `None` rather than a silent default route

use axum::http::Method;

use crate::compare::scalar_equals;
use crate::http::SimulatedRequest;
use crate::model::{GenerationTarget, RouteData, RouteHandler, AREA_KEY};
use crate::routing::matcher::{RoutePattern, RoutePatternError};
use crate::routing::Router;
use crate::values::{RouteValue, RouteValues};

/// A single route definition.
#[derive(Debug, Clone)]
pub struct Route {
    name: Option<String>,
    pattern: RoutePattern,
    defaults: RouteValues,
    area: Option<String>,
    handler: RouteHandler,
    methods: Vec<Method>,
}

impl Route {
    pub fn new(url: &str) -> Result<Self, RoutePatternError> {
        Ok(Self {
            name: None,
            pattern: RoutePattern::parse(url)?,
            defaults: RouteValues::new(),
            area: None,
            handler: RouteHandler::Dispatch,
            methods: Vec::new(),
        })
    }

    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_defaults(mut self, defaults: RouteValues) -> Self {
        self.defaults = defaults;
        self
    }

    pub fn with_area(mut self, area: impl Into<String>) -> Self {
        self.area = Some(area.into());
        self
    }

    /// Restrict the route to the given HTTP methods. Empty means any method.
    pub fn with_methods(mut self, methods: impl IntoIterator<Item = Method>) -> Self {
        self.methods = methods.into_iter().collect();
        self
    }

    /// Mark the route as one that stops routing for matching requests.
    pub fn ignored(mut self) -> Self {
        self.handler = RouteHandler::StopRouting;
        self
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn pattern(&self) -> &RoutePattern {
        &self.pattern
    }

    pub fn defaults(&self) -> &RouteValues {
        &self.defaults
    }

    pub fn area(&self) -> Option<&str> {
        self.area.as_deref()
    }

    pub fn handler(&self) -> RouteHandler {
        self.handler
    }

    pub fn methods(&self) -> &[Method] {
        &self.methods
    }

    pub fn match_request(&self, request: &SimulatedRequest) -> Option<RouteData> {
        if !self.methods.is_empty() && !self.methods.contains(request.method()) {
            return None;
        }

        let values = self.pattern.match_path(request.path(), &self.defaults)?;
        Some(RouteData {
            route_name: self.name.clone(),
            values,
            area: self.area.clone(),
            handler: self.handler,
        })
    }

    /// Generate a virtual path (no leading `/`) from the full set of route values.
    /// The application root binds to the empty path.
    pub fn generate(&self, values: &RouteValues) -> Option<String> {
        if self.handler == RouteHandler::StopRouting || !self.accepts_area(values.get(AREA_KEY)) {
            return None;
        }

        // Defaults the url cannot express must agree with what was supplied.
        for (key, default) in self.defaults.iter() {
            if key == AREA_KEY || self.pattern.has_parameter(key) {
                continue;
            }
            if let Some(value) = values.get(key) {
                if !scalar_equals(value, default) {
                    return None;
                }
            }
        }

        let path = self.pattern.bind(values, &self.defaults)?;

        let query: Vec<String> = values
            .iter()
            .filter(|(key, value)| {
                *key != AREA_KEY
                    && !self.pattern.has_parameter(key)
                    && !self.defaults.contains_key(key)
                    && !value.is_null()
                    && !value.is_optional()
            })
            .map(|(key, value)| {
                format!(
                    "{}={}",
                    urlencoding::encode(key),
                    urlencoding::encode(&value.to_string())
                )
            })
            .collect();

        if query.is_empty() {
            Some(path)
        } else {
            Some(format!("{}?{}", path, query.join("&")))
        }
    }

    fn accepts_area(&self, requested: Option<&RouteValue>) -> bool {
        if self.pattern.has_parameter(AREA_KEY) {
            return true;
        }
        let requested = requested.filter(|v| !v.is_null() && !v.is_optional());
        match (&self.area, requested) {
            (None, None) => true,
            (Some(area), Some(value)) => scalar_equals(&RouteValue::from(area), value),
            _ => false,
        }
    }
}

/// Ordered collection of routes.
#[derive(Debug, Clone, Default)]
pub struct RouteTable {
    routes: Vec<Route>,
}

impl RouteTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, route: Route) -> &mut Self {
        self.routes.push(route);
        self
    }

    /// Add a named dispatch route.
    pub fn map_route(
        &mut self,
        name: impl Into<String>,
        url: &str,
        defaults: RouteValues,
    ) -> Result<&mut Self, RoutePatternError> {
        let route = Route::new(url)?.named(name).with_defaults(defaults);
        Ok(self.add(route))
    }

    /// Add a route whose matching requests are excluded from dispatch.
    pub fn ignore_route(&mut self, url: &str) -> Result<&mut Self, RoutePatternError> {
        let route = Route::new(url)?.ignored();
        Ok(self.add(route))
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Route> {
        self.routes.iter()
    }

    pub fn get(&self, name: &str) -> Option<&Route> {
        self.routes.iter().find(|r| r.name() == Some(name))
    }
}

impl Router for RouteTable {
    fn route_count(&self) -> usize {
        self.len()
    }

    fn resolve(&self, request: &SimulatedRequest) -> Option<RouteData> {
        let data = self.routes.iter().find_map(|route| route.match_request(request));
        tracing::debug!(
            url = %request.app_relative_url(),
            method = %request.method(),
            route = data.as_ref().and_then(|d| d.route_name.as_deref()).unwrap_or("-"),
            matched = data.is_some(),
            "Request resolved"
        );
        data
    }

    fn generate_url(&self, target: &GenerationTarget, _context: &SimulatedRequest) -> Option<String> {
        let values = target.route_values();
        let url = self
            .routes
            .iter()
            .find_map(|route| route.generate(&values))
            .map(|url| if url.is_empty() || url.starts_with('?') { format!("/{}", url) } else { url });
        tracing::debug!(
            generation_target = %target,
            url = url.as_deref().unwrap_or("-"),
            "Url generated"
        );
        url
    }
}

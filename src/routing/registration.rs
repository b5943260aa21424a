//! Route table population from registration entry points.
//!
//! An application registers its routes in one of two shapes: an area
//! registration (area name plus its routes) or an application-wide
//! registrar. Both are plain traits; callers pick the shape explicitly.

use crate::config::loader::ConfigError;
use crate::routing::matcher::RoutePatternError;
use crate::routing::router::{Route, RouteTable};
use crate::values::RouteValues;

/// Routes belonging to a single area.
pub trait AreaRegistration {
    fn area_name(&self) -> &str;

    fn register_area(&self, context: &mut AreaRegistrationContext<'_>) -> Result<(), RoutePatternError>;
}

/// Application-wide route registration.
pub trait RouteRegistrar {
    fn register_routes(&self, routes: &mut RouteTable) -> Result<(), RoutePatternError>;
}

/// Registration view over a table that tags every route with its area.
#[derive(Debug)]
pub struct AreaRegistrationContext<'a> {
    area_name: String,
    routes: &'a mut RouteTable,
}

impl<'a> AreaRegistrationContext<'a> {
    pub fn new(area_name: impl Into<String>, routes: &'a mut RouteTable) -> Self {
        Self {
            area_name: area_name.into(),
            routes,
        }
    }

    pub fn area_name(&self) -> &str {
        &self.area_name
    }

    pub fn map_route(
        &mut self,
        name: impl Into<String>,
        url: &str,
        defaults: RouteValues,
    ) -> Result<&mut Self, RoutePatternError> {
        let route = Route::new(url)?.named(name).with_defaults(defaults);
        Ok(self.add(route))
    }

    /// Add a prepared route; its area is replaced by this context's area.
    pub fn add(&mut self, route: Route) -> &mut Self {
        self.routes.add(route.with_area(self.area_name.clone()));
        self
    }
}

/// The registration shape a route table is populated from.
#[derive(Clone, Copy)]
pub enum RegistrationEntryPoint<'a> {
    Area(&'a dyn AreaRegistration),
    Application(&'a dyn RouteRegistrar),
}

impl std::fmt::Debug for RegistrationEntryPoint<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RegistrationEntryPoint::Area(area) => f.debug_tuple("Area").field(&area.area_name()).finish(),
            RegistrationEntryPoint::Application(_) => f.write_str("Application"),
        }
    }
}

/// Build a route table from an entry point. An empty result is a
/// configuration error: a tester over no routes cannot assert anything.
pub fn populate(entry: RegistrationEntryPoint<'_>) -> Result<RouteTable, ConfigError> {
    let mut routes = RouteTable::new();

    match entry {
        RegistrationEntryPoint::Area(registration) => {
            let mut context = AreaRegistrationContext::new(registration.area_name(), &mut routes);
            registration.register_area(&mut context).map_err(ConfigError::Pattern)?;
        }
        RegistrationEntryPoint::Application(registrar) => {
            registrar.register_routes(&mut routes).map_err(ConfigError::Pattern)?;
        }
    }

    if routes.is_empty() {
        return Err(ConfigError::NoRoutes);
    }

    tracing::debug!(entry = ?entry, routes = routes.len(), "Route table populated");
    Ok(routes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::route_values;
    use crate::values::RouteValue;

    struct AdminArea;

    impl AreaRegistration for AdminArea {
        fn area_name(&self) -> &str {
            "admin"
        }

        fn register_area(&self, context: &mut AreaRegistrationContext<'_>) -> Result<(), RoutePatternError> {
            context.map_route(
                "admin_default",
                "admin/{controller}/{action}/{id}",
                route_values! { "action" => "Index", "id" => RouteValue::Optional },
            )?;
            Ok(())
        }
    }

    struct NoRoutes;

    impl RouteRegistrar for NoRoutes {
        fn register_routes(&self, _routes: &mut RouteTable) -> Result<(), RoutePatternError> {
            Ok(())
        }
    }

    struct BrokenRoutes;

    impl RouteRegistrar for BrokenRoutes {
        fn register_routes(&self, routes: &mut RouteTable) -> Result<(), RoutePatternError> {
            routes.map_route("bad", "/leading", RouteValues::new())?;
            Ok(())
        }
    }

    #[test]
    fn test_area_routes_are_tagged() {
        let routes = populate(RegistrationEntryPoint::Area(&AdminArea)).unwrap();
        assert_eq!(routes.len(), 1);
        assert_eq!(routes.get("admin_default").and_then(Route::area), Some("admin"));
    }

    #[test]
    fn test_empty_registration_is_config_error() {
        let err = populate(RegistrationEntryPoint::Application(&NoRoutes)).unwrap_err();
        assert!(matches!(err, ConfigError::NoRoutes));
    }

    #[test]
    fn test_pattern_errors_surface() {
        let err = populate(RegistrationEntryPoint::Application(&BrokenRoutes)).unwrap_err();
        assert!(matches!(err, ConfigError::Pattern(RoutePatternError::LeadingSlash(_))));
    }
}

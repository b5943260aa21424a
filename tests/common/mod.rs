//! Shared route tables and fixtures for integration tests.

use std::io::Write;

use axum::http::Method;
use route_tester::routing::{AreaRegistration, AreaRegistrationContext, RoutePatternError};
use route_tester::{route_values, Route, RouteTable, RouteTester, RouteValue};
use tempfile::NamedTempFile;

/// Admin area: `admin/{controller}/{action}/{id}`.
pub struct AdminArea;

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

/// A typical application table: an ignore route, an area route, a
/// method-restricted route and the conventional default route.
#[allow(dead_code)]
pub fn application_routes() -> RouteTable {
    let mut routes = RouteTable::new();
    routes.ignore_route("scripts/{*path}").unwrap();
    routes.ignore_route("content/{*file}").unwrap();

    let mut admin = AreaRegistrationContext::new(AdminArea.area_name(), &mut routes);
    AdminArea.register_area(&mut admin).unwrap();

    routes.add(
        Route::new("api/orders")
            .unwrap()
            .named("create_order")
            .with_defaults(route_values! { "controller" => "Orders", "action" => "Create" })
            .with_methods([Method::POST]),
    );
    routes
        .map_route(
            "Default",
            "{controller}/{action}/{id}",
            route_values! { "controller" => "Home", "action" => "Index", "id" => RouteValue::Optional },
        )
        .unwrap();
    routes
}

#[allow(dead_code)]
pub fn tester() -> RouteTester<RouteTable> {
    route_tester::observability::init_logging("route_tester=debug");
    RouteTester::new(application_routes()).unwrap()
}

/// Write a TOML fixture to a temporary file that lives as long as the handle.
#[allow(dead_code)]
pub fn write_fixture(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

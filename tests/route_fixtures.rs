//! Route tables built from TOML fixtures and registration entry points.

use route_tester::config::ConfigError;
use route_tester::routing::{RegistrationEntryPoint, RouteRegistrar, RoutePatternError};
use route_tester::{route_values, ArgumentError, RouteTable, RouteTestError, RouteTester};

mod common;

const APPLICATION_FIXTURE: &str = r#"
[observability]
log_level = "route_tester=debug"

[[routes]]
url = "content/{*file}"
ignore = true

[[routes]]
name = "product"
url = "catalog/{slug}"
defaults = { controller = "Products", action = "Show" }
methods = ["GET", "head"]

[[routes]]
name = "Default"
url = "{controller}/{action}/{id}"
defaults = { controller = "Home", action = "Index" }
optional = ["id"]
"#;

const AREA_FIXTURE: &str = r#"
entry_point = "area"
area = "admin"

[[routes]]
name = "admin_default"
url = "admin/{controller}/{action}/{id}"
defaults = { action = "Index" }
optional = ["id"]
"#;

#[test]
fn test_application_fixture_file() {
    let file = common::write_fixture(APPLICATION_FIXTURE);
    let tester = RouteTester::from_fixture_file(file.path()).unwrap();
    assert_eq!(tester.routes().len(), 3);

    tester
        .with_incoming_request("catalog/red-shoes")
        .unwrap()
        .should_match_route("products", "show", Some(route_values! { "slug" => "red-shoes" }))
        .unwrap();
    // POST skips the GET/HEAD route and lands on the default route.
    tester
        .with_incoming_request_method("catalog/red-shoes", "POST")
        .unwrap()
        .should_match_route("catalog", "red-shoes", None)
        .unwrap();
    tester.with_incoming_request("content/logo.png").unwrap().should_be_ignored().unwrap();

    tester
        .with_route_info("products", "show", Some(route_values! { "slug" => "red-shoes" }))
        .unwrap()
        .should_generate_url("catalog/red-shoes")
        .unwrap();
}

#[test]
fn test_area_fixture_tags_routes() {
    let file = common::write_fixture(AREA_FIXTURE);
    let tester = RouteTester::from_fixture_file(file.path()).unwrap();

    let request = tester.with_incoming_request("admin/users/edit/7").unwrap();
    request
        .should_match_area_route("admin", "users", "edit", Some(route_values! { "id" => 7 }))
        .unwrap();
    assert!(request.should_match_route("users", "edit", Some(route_values! { "id" => 7 })).is_err());

    tester
        .with_area_route_info("admin", "users", "edit", Some(route_values! { "id" => 7 }))
        .unwrap()
        .should_generate_url("admin/users/edit/7")
        .unwrap();
}

#[test]
fn test_registration_entry_points() {
    let tester = RouteTester::from_registration(RegistrationEntryPoint::Area(&common::AdminArea)).unwrap();
    assert_eq!(tester.routes().get("admin_default").and_then(|r| r.area()), Some("admin"));

    struct Application;

    impl RouteRegistrar for Application {
        fn register_routes(&self, routes: &mut RouteTable) -> Result<(), RoutePatternError> {
            routes.map_route("Default", "{controller}/{action}", route_values! { "action" => "Index" })?;
            Ok(())
        }
    }

    let tester = RouteTester::from_registration(RegistrationEntryPoint::Application(&Application)).unwrap();
    tester
        .with_incoming_request("home")
        .unwrap()
        .should_match_route("home", "index", None)
        .unwrap();
}

#[test]
fn test_invalid_fixtures() {
    let file = common::write_fixture("entry_point = \"global\"\n[[routes]]\nurl = \"x\"\n");
    let err = RouteTester::from_fixture_file(file.path()).unwrap_err();
    assert!(matches!(err, RouteTestError::Config(ConfigError::Validation(_))));

    let file = common::write_fixture("entry_point = \"area\"\n[[routes]]\nurl = \"admin/{controller}\"\n");
    let err = RouteTester::from_fixture_file(file.path()).unwrap_err();
    match err {
        RouteTestError::Config(ConfigError::Validation(errors)) => {
            assert_eq!(errors.len(), 1);
            assert_eq!(errors[0].field, "area");
        }
        other => panic!("unexpected error: {}", other),
    }

    let file = common::write_fixture("[[routes]]\nurl = \"{controller\"\n");
    assert!(matches!(
        RouteTester::from_fixture_file(file.path()).unwrap_err(),
        RouteTestError::Config(ConfigError::Validation(_))
    ));

    let file = common::write_fixture("");
    assert!(matches!(
        RouteTester::from_fixture_file(file.path()).unwrap_err(),
        RouteTestError::Config(ConfigError::NoRoutes)
    ));
}

#[test]
fn test_in_memory_fixture_with_unknown_entry_point() {
    let mut fixture = route_tester::config::parse_fixture(APPLICATION_FIXTURE).unwrap();
    fixture.entry_point = "module".into();

    let err = RouteTester::from_fixture(&fixture).unwrap_err();
    assert_eq!(
        err.as_argument(),
        Some(&ArgumentError::UnsupportedEntryPoint { kind: "module".into() })
    );
}

#[test]
fn test_fixture_logging_settings() {
    let fixture = route_tester::config::parse_fixture(APPLICATION_FIXTURE).unwrap();
    assert_eq!(fixture.observability.log_level, "route_tester=debug");
    // Another test may already have installed a subscriber.
    let _ = route_tester::observability::logging::init_from_config(&fixture.observability);
}

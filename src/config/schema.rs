//! Route fixture schema.
//!
//! A fixture describes a route table in TOML so test suites can share one
//! routing setup. All types derive Serde traits for deserialization.
//!
//! ```toml
//! entry_point = "application"
//!
//! [[routes]]
//! name = "Default"
//! url = "{controller}/{action}/{id}"
//! optional = ["id"]
//! defaults = { action = "Index" }
//! ```

use axum::http::Method;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::ArgumentError;
use crate::routing::{
    AreaRegistration, AreaRegistrationContext, RegistrationEntryPoint, Route, RoutePatternError,
    RouteRegistrar, RouteTable,
};
use crate::values::{RouteValue, RouteValues};

pub const APPLICATION_ENTRY_POINT: &str = "application";
pub const AREA_ENTRY_POINT: &str = "area";

/// Root of a route fixture file.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct RouteFixture {
    /// Registration shape: "application" or "area".
    pub entry_point: String,

    /// Area name, required when `entry_point` is "area".
    pub area: Option<String>,

    /// Logging settings for test runs.
    pub observability: ObservabilityConfig,

    /// Routes in registration order.
    pub routes: Vec<RouteConfig>,
}

impl Default for RouteFixture {
    fn default() -> Self {
        Self {
            entry_point: APPLICATION_ENTRY_POINT.to_string(),
            area: None,
            observability: ObservabilityConfig::default(),
            routes: Vec::new(),
        }
    }
}

impl RouteFixture {
    /// Resolve the declared registration shape.
    pub fn entry_point(&self) -> Result<RegistrationEntryPoint<'_>, ArgumentError> {
        match self.entry_point.trim().to_ascii_lowercase().as_str() {
            APPLICATION_ENTRY_POINT => Ok(RegistrationEntryPoint::Application(self)),
            AREA_ENTRY_POINT => Ok(RegistrationEntryPoint::Area(self)),
            _ => Err(ArgumentError::UnsupportedEntryPoint {
                kind: self.entry_point.clone(),
            }),
        }
    }
}

impl RouteRegistrar for RouteFixture {
    fn register_routes(&self, routes: &mut RouteTable) -> Result<(), RoutePatternError> {
        for config in &self.routes {
            routes.add(config.to_route()?);
        }
        Ok(())
    }
}

impl AreaRegistration for RouteFixture {
    fn area_name(&self) -> &str {
        self.area.as_deref().unwrap_or_default()
    }

    fn register_area(&self, context: &mut AreaRegistrationContext<'_>) -> Result<(), RoutePatternError> {
        for config in &self.routes {
            context.add(config.to_route()?);
        }
        Ok(())
    }
}

/// A single route definition.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RouteConfig {
    /// Route name, used in logs and for lookups.
    #[serde(default)]
    pub name: Option<String>,

    /// Route url pattern, e.g. "{controller}/{action}/{id}".
    pub url: String,

    /// Default values for parameters and for values the url does not carry.
    #[serde(default)]
    pub defaults: IndexMap<String, ConfigValue>,

    /// Parameters that default to the optional sentinel.
    #[serde(default)]
    pub optional: Vec<String>,

    /// Allowed HTTP methods (empty = any).
    #[serde(default)]
    pub methods: Vec<String>,

    /// Area token for application-level routes.
    #[serde(default)]
    pub area: Option<String>,

    /// Requests matching this route are excluded from dispatch.
    #[serde(default)]
    pub ignore: bool,
}

impl RouteConfig {
    pub fn to_route(&self) -> Result<Route, RoutePatternError> {
        let mut route = Route::new(&self.url)?;
        if self.ignore {
            route = route.ignored();
        }
        if let Some(name) = &self.name {
            route = route.named(name.clone());
        }
        if let Some(area) = &self.area {
            route = route.with_area(area.clone());
        }

        let mut defaults: RouteValues = self
            .defaults
            .iter()
            .map(|(k, v)| (k.as_str(), RouteValue::from(v)))
            .collect();
        for name in &self.optional {
            defaults.insert(name.as_str(), RouteValue::Optional);
        }

        // Invalid method names are reported by validation.
        let methods = self
            .methods
            .iter()
            .filter_map(|m| Method::from_bytes(m.trim().to_ascii_uppercase().as_bytes()).ok());

        Ok(route.with_defaults(defaults).with_methods(methods))
    }
}

/// A scalar default as it appears in TOML.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum ConfigValue {
    Bool(bool),
    Int(i64),
    Float(f64),
    String(String),
}

impl From<&ConfigValue> for RouteValue {
    fn from(value: &ConfigValue) -> Self {
        match value {
            ConfigValue::Bool(b) => RouteValue::Bool(*b),
            ConfigValue::Int(n) => RouteValue::Int(*n),
            ConfigValue::Float(n) => RouteValue::Float(*n),
            ConfigValue::String(s) => RouteValue::String(s.clone()),
        }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Fallback filter directive when `RUST_LOG` is unset.
    pub log_level: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "route_tester=info".to_string(),
        }
    }
}

//! Route fixture validation.
//!
//! Checks what TOML deserialization cannot: the entry point is known, an area
//! fixture names its area, each route url parses as a pattern, names listed in
//! `optional` are parameters of that url, method names are real HTTP methods,
//! and ignore routes carry no defaults.
//!
//! Every problem in a fixture is reported together, each tagged with the
//! field path it came from (`routes[2].optional`), so a broken fixture can be
//! fixed in one edit.

use std::collections::HashSet;

use axum::http::Method;
use thiserror::Error;

use crate::config::schema::{RouteFixture, APPLICATION_ENTRY_POINT, AREA_ENTRY_POINT};
use crate::routing::RoutePattern;

/// A single semantic problem in a fixture.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{field}: {message}")]
pub struct ValidationError {
    pub field: String,
    pub message: String,
}

impl ValidationError {
    fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

pub fn validate_fixture(fixture: &RouteFixture) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    let entry_point = fixture.entry_point.trim().to_ascii_lowercase();
    let is_area = entry_point == AREA_ENTRY_POINT;
    if !is_area && entry_point != APPLICATION_ENTRY_POINT {
        errors.push(ValidationError::new(
            "entry_point",
            format!("unsupported entry point \"{}\"", fixture.entry_point),
        ));
    }

    let fixture_area = fixture.area.as_deref().map(str::trim).filter(|a| !a.is_empty());
    if is_area && fixture_area.is_none() {
        errors.push(ValidationError::new("area", "an area entry point requires an area name"));
    }

    let mut names = HashSet::new();
    for (i, route) in fixture.routes.iter().enumerate() {
        let field = |name: &str| format!("routes[{}].{}", i, name);

        if let Some(name) = &route.name {
            if !names.insert(name.to_ascii_lowercase()) {
                errors.push(ValidationError::new(field("name"), format!("duplicate route name \"{}\"", name)));
            }
        }

        match RoutePattern::parse(&route.url) {
            Ok(pattern) => {
                for optional in &route.optional {
                    if !pattern.has_parameter(optional) {
                        errors.push(ValidationError::new(
                            field("optional"),
                            format!("\"{}\" is not a parameter of \"{}\"", optional, route.url),
                        ));
                    }
                }
            }
            Err(e) => errors.push(ValidationError::new(field("url"), e.to_string())),
        }

        for method in &route.methods {
            if Method::from_bytes(method.trim().to_ascii_uppercase().as_bytes()).is_err() {
                errors.push(ValidationError::new(
                    field("methods"),
                    format!("\"{}\" is not a valid HTTP method", method),
                ));
            }
        }

        if route.ignore && (!route.defaults.is_empty() || !route.optional.is_empty()) {
            errors.push(ValidationError::new(field("ignore"), "ignore routes cannot carry defaults"));
        }

        if let (true, Some(route_area), Some(area)) = (is_area, route.area.as_deref(), fixture_area) {
            if !route_area.eq_ignore_ascii_case(area) {
                errors.push(ValidationError::new(
                    field("area"),
                    format!("route area \"{}\" conflicts with fixture area \"{}\"", route_area, area),
                ));
            }
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

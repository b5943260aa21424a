//! Route fixture loading from disk.

use std::fs;
use std::path::Path;

use crate::config::schema::RouteFixture;
use crate::config::validation::{validate_fixture, ValidationError};
use crate::routing::RoutePatternError;

/// Error type for fixture loading and route table population.
#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
    Validation(Vec<ValidationError>),
    Pattern(RoutePatternError),
    /// Registration produced an empty route table.
    NoRoutes,
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "IO error: {}", e),
            ConfigError::Parse(e) => write!(f, "Parse error: {}", e),
            ConfigError::Validation(errors) => {
                write!(f, "Validation failed: ")?;
                for (i, err) in errors.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", err)?;
                }
                Ok(())
            }
            ConfigError::Pattern(e) => write!(f, "Route error: {}", e),
            ConfigError::NoRoutes => {
                write!(f, "There are no routes defined. Make sure you have defined at least one route.")
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Io(e) => Some(e),
            ConfigError::Parse(e) => Some(e),
            ConfigError::Pattern(e) => Some(e),
            ConfigError::Validation(_) | ConfigError::NoRoutes => None,
        }
    }
}

/// Parse and validate a fixture from TOML text.
pub fn parse_fixture(content: &str) -> Result<RouteFixture, ConfigError> {
    let fixture: RouteFixture = toml::from_str(content).map_err(ConfigError::Parse)?;

    if let Err(errors) = validate_fixture(&fixture) {
        tracing::warn!(errors = errors.len(), "Route fixture rejected");
        return Err(ConfigError::Validation(errors));
    }

    Ok(fixture)
}

/// Load and validate a fixture from a TOML file.
pub fn load_fixture(path: &Path) -> Result<RouteFixture, ConfigError> {
    let content = fs::read_to_string(path).map_err(ConfigError::Io)?;
    let fixture = parse_fixture(&content)?;

    tracing::debug!(path = ?path, routes = fixture.routes.len(), "Route fixture loaded");
    Ok(fixture)
}

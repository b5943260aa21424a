//! Route pattern parsing, matching and binding.
//!
//! # Responsibilities
//! - Parse `{controller}/{action}/{id}` style patterns
//! - Match a request path against a pattern, filling in defaults
//! - Bind route values back into a path for url generation
//!
//! # Design Decisions
//! - Segments are whole: a literal, `{name}`, or a trailing `{*name}`
//! - Literal matching is case-insensitive
//! - Captured values are percent-decoded; bound values are percent-encoded
//! - Trailing parameters equal to their default are dropped when binding

use std::borrow::Cow;
use std::fmt;

use thiserror::Error;

use crate::compare::{eq_ignore_case, scalar_equals};
use crate::values::{RouteValue, RouteValues};

/// Why a route pattern was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RoutePatternError {
    #[error("The route url \"{0}\" cannot start with a '/' or '~' character.")]
    LeadingSlash(String),

    #[error("The route url \"{0}\" cannot contain a '?' character.")]
    QueryString(String),

    #[error("The route url \"{0}\" contains an empty segment.")]
    EmptySegment(String),

    #[error("The route url segment \"{0}\" must be a literal, a {{parameter}} or a {{*catchall}}.")]
    InvalidSegment(String),

    #[error("The route url \"{0}\" contains a parameter without a name.")]
    EmptyParameterName(String),

    #[error("The route parameter \"{0}\" appears more than once.")]
    DuplicateParameter(String),

    #[error("A catch-all parameter can only appear as the last segment of the route url \"{0}\".")]
    CatchAllNotLast(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Literal(String),
    Parameter(String),
    CatchAll(String),
}

/// A parsed route url.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoutePattern {
    source: String,
    segments: Vec<Segment>,
}

impl RoutePattern {
    pub fn parse(url: &str) -> Result<Self, RoutePatternError> {
        if url.starts_with('/') || url.starts_with('~') {
            return Err(RoutePatternError::LeadingSlash(url.to_string()));
        }
        if url.contains('?') {
            return Err(RoutePatternError::QueryString(url.to_string()));
        }

        let mut segments = Vec::new();
        if !url.is_empty() {
            for raw in url.split('/') {
                if raw.is_empty() {
                    return Err(RoutePatternError::EmptySegment(url.to_string()));
                }
                segments.push(parse_segment(url, raw)?);
            }
        }

        let last = segments.len().saturating_sub(1);
        let mut seen: Vec<&str> = Vec::new();
        for (i, segment) in segments.iter().enumerate() {
            let name = match segment {
                Segment::Literal(_) => continue,
                Segment::CatchAll(_) if i != last => {
                    return Err(RoutePatternError::CatchAllNotLast(url.to_string()));
                }
                Segment::Parameter(name) | Segment::CatchAll(name) => name.as_str(),
            };
            if seen.iter().any(|s| s.eq_ignore_ascii_case(name)) {
                return Err(RoutePatternError::DuplicateParameter(name.to_string()));
            }
            seen.push(name);
        }

        Ok(Self {
            source: url.to_string(),
            segments,
        })
    }

    pub fn as_str(&self) -> &str {
        &self.source
    }

    /// Parameter names in pattern order, catch-all included.
    pub fn parameters(&self) -> impl Iterator<Item = &str> {
        self.segments.iter().filter_map(|s| match s {
            Segment::Parameter(name) | Segment::CatchAll(name) => Some(name.as_str()),
            Segment::Literal(_) => None,
        })
    }

    pub fn has_parameter(&self, name: &str) -> bool {
        self.parameters().any(|p| p == name)
    }

    /// Match a request path (no leading `/`) against the pattern.
    /// Returns the defaults overlaid with every captured value.
    pub fn match_path(&self, path: &str, defaults: &RouteValues) -> Option<RouteValues> {
        let path = path.trim_end_matches('/');
        let parts: Vec<&str> = if path.is_empty() {
            Vec::new()
        } else {
            path.split('/').collect()
        };

        let mut values = defaults.clone();
        let mut index = 0;

        for segment in &self.segments {
            match segment {
                Segment::Literal(literal) => {
                    let part = parts.get(index)?;
                    if !eq_ignore_case(part, literal) {
                        return None;
                    }
                }
                Segment::Parameter(name) => match parts.get(index).filter(|p| !p.is_empty()) {
                    Some(part) => {
                        values.insert(name.as_str(), decode(part));
                    }
                    None if defaults.contains_key(name) => {}
                    None => return None,
                },
                Segment::CatchAll(name) => {
                    let rest = parts[index.min(parts.len())..].join("/");
                    index = parts.len();
                    if !rest.is_empty() {
                        values.insert(name.as_str(), decode(&rest));
                    }
                    continue;
                }
            }
            index += 1;
        }

        if index < parts.len() {
            tracing::trace!(pattern = %self.source, path, "Request has more segments than the pattern");
            return None;
        }

        Some(values)
    }

    /// Bind route values into a path. Returns `None` when a parameter has
    /// no value, or an optional parameter is absent before a present one.
    pub fn bind(&self, values: &RouteValues, defaults: &RouteValues) -> Option<String> {
        // (text, may be dropped from the end)
        let mut parts: Vec<(String, bool)> = Vec::with_capacity(self.segments.len());

        for segment in &self.segments {
            let (name, catch_all) = match segment {
                Segment::Literal(literal) => {
                    parts.push((literal.clone(), false));
                    continue;
                }
                Segment::Parameter(name) => (name, false),
                Segment::CatchAll(name) => (name, true),
            };

            let supplied = values.get(name).filter(|v| !v.is_null() && !v.is_optional());
            let part = match (supplied, defaults.get(name)) {
                (Some(value), Some(default)) => (encode(value, catch_all), scalar_equals(value, default)),
                (Some(value), None) => (encode(value, catch_all), false),
                (None, Some(default)) if default.is_optional() => (String::new(), true),
                (None, Some(default)) => (encode(default, catch_all), true),
                (None, None) if catch_all => (String::new(), true),
                (None, None) => return None,
            };
            parts.push(part);
        }

        while parts.last().is_some_and(|(_, droppable)| *droppable) {
            parts.pop();
        }
        if parts.iter().any(|(text, _)| text.is_empty()) {
            return None;
        }

        Some(
            parts
                .into_iter()
                .map(|(text, _)| text)
                .collect::<Vec<_>>()
                .join("/"),
        )
    }
}

impl fmt::Display for RoutePattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}

fn parse_segment(url: &str, raw: &str) -> Result<Segment, RoutePatternError> {
    let has_braces = raw.contains('{') || raw.contains('}');
    if !has_braces {
        return Ok(Segment::Literal(raw.to_string()));
    }

    let inner = raw
        .strip_prefix('{')
        .and_then(|s| s.strip_suffix('}'))
        .filter(|s| !s.contains('{') && !s.contains('}'))
        .ok_or_else(|| RoutePatternError::InvalidSegment(raw.to_string()))?;

    let (name, catch_all) = match inner.strip_prefix('*') {
        Some(name) => (name, true),
        None => (inner, false),
    };
    if name.trim().is_empty() {
        return Err(RoutePatternError::EmptyParameterName(url.to_string()));
    }

    Ok(if catch_all {
        Segment::CatchAll(name.to_string())
    } else {
        Segment::Parameter(name.to_string())
    })
}

fn decode(raw: &str) -> String {
    urlencoding::decode(raw)
        .map(Cow::into_owned)
        .unwrap_or_else(|_| raw.to_string())
}

fn encode(value: &RouteValue, catch_all: bool) -> String {
    let text = value.to_string();
    if catch_all {
        text.split('/')
            .map(|part| urlencoding::encode(part).into_owned())
            .collect::<Vec<_>>()
            .join("/")
    } else {
        urlencoding::encode(&text).into_owned()
    }
}

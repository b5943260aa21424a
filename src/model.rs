//! Data carried between the router and the assertions.

use std::fmt;

use crate::error::{require_non_blank, ArgumentError};
use crate::values::{RouteValue, RouteValues};

pub(crate) const AREA_KEY: &str = "area";
pub(crate) const CONTROLLER_KEY: &str = "controller";
pub(crate) const ACTION_KEY: &str = "action";

pub(crate) const AREA_REQUIRED: &str = "Area cannot be null or empty. If you are testing non-area routes, \
     use the overload that does not require an area argument.";
pub(crate) const CONTROLLER_REQUIRED: &str = "Controller cannot be null or empty.";
pub(crate) const ACTION_REQUIRED: &str = "Action cannot be null or empty.";

/// How a matched route wants the request handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RouteHandler {
    /// Normal controller/action dispatch.
    #[default]
    Dispatch,
    /// The route exists only to keep the request away from dispatch.
    StopRouting,
}

/// Raw outcome of matching a request against a route table.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RouteData {
    pub route_name: Option<String>,
    /// All values, including `controller`, `action` and optional sentinels.
    pub values: RouteValues,
    /// Area token attached to the matched route.
    pub area: Option<String>,
    pub handler: RouteHandler,
}

/// Normalized view of [`RouteData`] used for comparisons.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedRoute {
    pub area: Option<String>,
    pub controller: RouteValue,
    pub action: RouteValue,
    /// Values other than `controller` and `action`, without optional sentinels.
    pub values: RouteValues,
    pub is_ignored: bool,
}

impl ResolvedRoute {
    pub fn from_route_data(data: &RouteData) -> Self {
        let lookup = |key: &str| data.values.get(key).cloned().unwrap_or(RouteValue::Null);

        let values = data
            .values
            .iter()
            .filter(|(k, v)| *k != CONTROLLER_KEY && *k != ACTION_KEY && !v.is_optional())
            .map(|(k, v)| (k, v.clone()))
            .collect();

        Self {
            area: data.area.clone(),
            controller: lookup(CONTROLLER_KEY),
            action: lookup(ACTION_KEY),
            values,
            is_ignored: data.handler == RouteHandler::StopRouting,
        }
    }
}

impl From<&RouteData> for ResolvedRoute {
    fn from(data: &RouteData) -> Self {
        Self::from_route_data(data)
    }
}

/// What an incoming request is expected to resolve to.
#[derive(Debug, Clone, PartialEq)]
pub struct RouteExpectation {
    pub area: Option<String>,
    pub controller: String,
    pub action: String,
    pub values: Option<RouteValues>,
}

impl RouteExpectation {
    /// Expectation for a route outside any area.
    pub fn new(
        controller: impl Into<String>,
        action: impl Into<String>,
        values: Option<RouteValues>,
    ) -> Result<Self, ArgumentError> {
        let controller = controller.into();
        let action = action.into();
        require_non_blank(&controller, "expected_controller", CONTROLLER_REQUIRED)?;
        require_non_blank(&action, "expected_action", ACTION_REQUIRED)?;

        Ok(Self {
            area: None,
            controller,
            action,
            values,
        })
    }

    /// Expectation for a route registered inside an area.
    pub fn in_area(
        area: impl Into<String>,
        controller: impl Into<String>,
        action: impl Into<String>,
        values: Option<RouteValues>,
    ) -> Result<Self, ArgumentError> {
        let area = area.into();
        require_non_blank(&area, "expected_area", AREA_REQUIRED)?;

        let mut expectation = Self::new(controller, action, values)?;
        expectation.area = Some(area);
        Ok(expectation)
    }
}

/// Routing attributes an outgoing URL is generated from.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationTarget {
    pub area: Option<String>,
    pub controller: String,
    pub action: String,
    pub values: Option<RouteValues>,
}

impl GenerationTarget {
    pub fn new(
        controller: impl Into<String>,
        action: impl Into<String>,
        values: Option<RouteValues>,
    ) -> Result<Self, ArgumentError> {
        let controller = controller.into();
        let action = action.into();
        require_non_blank(&controller, "controller", CONTROLLER_REQUIRED)?;
        require_non_blank(&action, "action", ACTION_REQUIRED)?;

        Ok(Self {
            area: None,
            controller,
            action,
            values,
        })
    }

    /// Target inside an area. The area travels as the `area` route value,
    /// so `values` must not carry one already.
    pub fn in_area(
        area: impl Into<String>,
        controller: impl Into<String>,
        action: impl Into<String>,
        values: Option<RouteValues>,
    ) -> Result<Self, ArgumentError> {
        let area = area.into();
        require_non_blank(&area, "area", AREA_REQUIRED)?;

        let mut target = Self::new(controller, action, values)?;
        let mut values = target.values.take().unwrap_or_default();
        if values.contains_key(AREA_KEY) {
            return Err(ArgumentError::DuplicateRouteValue {
                key: AREA_KEY.to_string(),
            });
        }
        values.insert(AREA_KEY, area.clone());

        target.area = Some(area);
        target.values = Some(values);
        Ok(target)
    }

    /// Every value handed to the router: supplied values, the area, then
    /// controller and action (which win over same-named entries).
    pub fn route_values(&self) -> RouteValues {
        let mut values = self.values.clone().unwrap_or_default();
        if let Some(area) = &self.area {
            values.insert(AREA_KEY, area.as_str());
        }
        values.insert(CONTROLLER_KEY, self.controller.as_str());
        values.insert(ACTION_KEY, self.action.as_str());
        values
    }
}

impl fmt::Display for GenerationTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(area) = &self.area {
            write!(f, "area = \"{}\", ", area)?;
        }
        write!(f, "controller = \"{}\", action = \"{}\"", self.controller, self.action)?;
        if let Some(values) = &self.values {
            let extra: RouteValues = values
                .iter()
                .filter(|(k, _)| *k != AREA_KEY)
                .map(|(k, v)| (k, v.clone()))
                .collect();
            if !extra.is_empty() {
                write!(f, ", values = {}", extra)?;
            }
        }
        Ok(())
    }
}

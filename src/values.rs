//! Route values.
//!
//! # Responsibilities
//! - Represent a single routing scalar (`RouteValue`)
//! - Hold named parameters in insertion order (`RouteValues`)
//!
//! # Design Decisions
//! - Keys are case-sensitive; name comparison happens in `compare`
//! - `Optional` is the "parameter not supplied" sentinel, never a real value
//! - Scalars compare through their string form, so `42` and `"42"` agree

use std::borrow::Cow;
use std::fmt;

use indexmap::IndexMap;

/// A single routing scalar.
#[derive(Debug, Clone, PartialEq)]
pub enum RouteValue {
    /// Explicitly empty value.
    Null,
    /// Sentinel for an optional URL parameter that was not supplied.
    Optional,
    String(String),
    Int(i64),
    UInt(u64),
    Float(f64),
    Bool(bool),
}

impl RouteValue {
    pub fn is_null(&self) -> bool {
        matches!(self, RouteValue::Null)
    }

    pub fn is_optional(&self) -> bool {
        matches!(self, RouteValue::Optional)
    }

    /// String form used for comparisons.
    /// Returns `None` for values that cannot take part in a comparison.
    pub fn comparable_text(&self) -> Option<Cow<'_, str>> {
        match self {
            RouteValue::Null | RouteValue::Optional => None,
            RouteValue::String(s) => Some(Cow::Borrowed(s.as_str())),
            other => Some(Cow::Owned(other.to_string())),
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            RouteValue::String(s) => Some(s),
            _ => None,
        }
    }
}

impl fmt::Display for RouteValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RouteValue::Null | RouteValue::Optional => Ok(()),
            RouteValue::String(s) => f.write_str(s),
            RouteValue::Int(n) => write!(f, "{}", n),
            RouteValue::UInt(n) => write!(f, "{}", n),
            RouteValue::Float(n) => write!(f, "{}", n),
            RouteValue::Bool(b) => write!(f, "{}", b),
        }
    }
}

impl From<&str> for RouteValue {
    fn from(value: &str) -> Self {
        RouteValue::String(value.to_string())
    }
}

impl From<String> for RouteValue {
    fn from(value: String) -> Self {
        RouteValue::String(value)
    }
}

impl From<&String> for RouteValue {
    fn from(value: &String) -> Self {
        RouteValue::String(value.clone())
    }
}

impl From<i32> for RouteValue {
    fn from(value: i32) -> Self {
        RouteValue::Int(i64::from(value))
    }
}

impl From<i64> for RouteValue {
    fn from(value: i64) -> Self {
        RouteValue::Int(value)
    }
}

impl From<u32> for RouteValue {
    fn from(value: u32) -> Self {
        RouteValue::UInt(u64::from(value))
    }
}

impl From<u64> for RouteValue {
    fn from(value: u64) -> Self {
        RouteValue::UInt(value)
    }
}

impl From<f64> for RouteValue {
    fn from(value: f64) -> Self {
        RouteValue::Float(value)
    }
}

impl From<bool> for RouteValue {
    fn from(value: bool) -> Self {
        RouteValue::Bool(value)
    }
}

impl<T: Into<RouteValue>> From<Option<T>> for RouteValue {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or(RouteValue::Null)
    }
}

/// Named route parameters in insertion order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RouteValues(IndexMap<String, RouteValue>);

impl RouteValues {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<RouteValue>) -> Self {
        self.insert(key, value);
        self
    }

    /// Insert or replace a value, returning the previous one.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<RouteValue>) -> Option<RouteValue> {
        self.0.insert(key.into(), value.into())
    }

    /// Remove a value, keeping the order of the remaining entries.
    pub fn remove(&mut self, key: &str) -> Option<RouteValue> {
        self.0.shift_remove(key)
    }

    pub fn get(&self, key: &str) -> Option<&RouteValue> {
        self.0.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &RouteValue)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }
}

impl<K: Into<String>, V: Into<RouteValue>> FromIterator<(K, V)> for RouteValues {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut values = RouteValues::new();
        values.extend(iter);
        values
    }
}

impl<K: Into<String>, V: Into<RouteValue>> Extend<(K, V)> for RouteValues {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (k, v) in iter {
            self.insert(k, v);
        }
    }
}

impl IntoIterator for RouteValues {
    type Item = (String, RouteValue);
    type IntoIter = indexmap::map::IntoIter<String, RouteValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl fmt::Display for RouteValues {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (i, (key, value)) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{} = \"{}\"", key, value)?;
        }
        f.write_str("}")
    }
}

/// Build [`RouteValues`] from `key => value` pairs.
///
/// ```
/// use route_tester::route_values;
///
/// let values = route_values! { "id" => 42, "slug" => "intro" };
/// assert_eq!(values.len(), 2);
/// ```
#[macro_export]
macro_rules! route_values {
    () => {
        $crate::values::RouteValues::new()
    };
    ($($key:expr => $value:expr),+ $(,)?) => {{
        let mut values = $crate::values::RouteValues::new();
        $(values.insert($key, $value);)+
        values
    }};
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_forms() {
        assert_eq!(RouteValue::from(42).to_string(), "42");
        assert_eq!(RouteValue::from(42.0).to_string(), "42");
        assert_eq!(RouteValue::from(true).to_string(), "true");
        assert_eq!(RouteValue::Optional.to_string(), "");
        assert_eq!(RouteValue::Null.to_string(), "");
    }

    #[test]
    fn test_comparable_text() {
        assert_eq!(RouteValue::from("Home").comparable_text().as_deref(), Some("Home"));
        assert_eq!(RouteValue::from(7u32).comparable_text().as_deref(), Some("7"));
        assert!(RouteValue::Optional.comparable_text().is_none());
        assert!(RouteValue::Null.comparable_text().is_none());
    }

    #[test]
    fn test_option_conversion() {
        assert_eq!(RouteValue::from(None::<&str>), RouteValue::Null);
        assert_eq!(RouteValue::from(Some("x")), RouteValue::from("x"));
    }

    #[test]
    fn test_insertion_order_survives_removal() {
        let mut values = route_values! { "a" => 1, "b" => 2, "c" => 3 };
        values.remove("b");
        let keys: Vec<_> = values.keys().collect();
        assert_eq!(keys, vec!["a", "c"]);
    }

    #[test]
    fn test_values_display() {
        let values = route_values! { "id" => 7, "slug" => "intro" };
        assert_eq!(values.to_string(), "{id = \"7\", slug = \"intro\"}");
    }
}

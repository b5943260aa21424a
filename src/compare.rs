//! Value comparison semantics shared by all assertions.
//!
//! # Responsibilities
//! - Scalar equality (case-insensitive on the string form)
//! - Value-set diffing with a single, first-found mismatch
//!
//! # Design Decisions
//! - `Null` equals only `Null`; `Optional` equals nothing
//! - Set comparison walks the larger side (expected wins ties), so the
//!   reported mismatch kind depends on which side has more entries
//! - Fail-fast: the first disagreement is reported, never a list

use std::fmt;

use crate::values::{RouteValue, RouteValues};

/// Case-insensitive string equality using Unicode lowercase folding.
pub fn eq_ignore_case(a: &str, b: &str) -> bool {
    a.chars()
        .flat_map(char::to_lowercase)
        .eq(b.chars().flat_map(char::to_lowercase))
}

/// Returns true if both values are `Null`, or both are comparable and their
/// string forms are equal ignoring case.
pub fn scalar_equals(a: &RouteValue, b: &RouteValue) -> bool {
    if a.is_null() && b.is_null() {
        return true;
    }

    match (a.comparable_text(), b.comparable_text()) {
        (Some(a), Some(b)) => eq_ignore_case(&a, &b),
        _ => false,
    }
}

/// First disagreement found between an expected and an actual value set.
#[derive(Debug, Clone, PartialEq)]
pub enum ValueMismatch {
    /// One side has values and the other has none.
    Count { expected: usize, actual: usize },
    /// An expected key is absent from the actual values.
    Missing { key: String },
    /// Both sides carry the key with different values.
    Value {
        key: String,
        expected: RouteValue,
        actual: RouteValue,
    },
    /// An actual key was not expected.
    Unexpected { key: String, value: RouteValue },
}

impl fmt::Display for ValueMismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValueMismatch::Count { expected, actual } => {
                write!(f, "expected {} route values, found {}", expected, actual)
            }
            ValueMismatch::Missing { key } => write!(f, "missing route value \"{}\"", key),
            ValueMismatch::Value { key, expected, actual } => write!(
                f,
                "route value \"{}\" expected \"{}\", found \"{}\"",
                key, expected, actual
            ),
            ValueMismatch::Unexpected { key, value } => {
                write!(f, "unexpected route value \"{}\" = \"{}\"", key, value)
            }
        }
    }
}

/// Compare an expected value set against the values a route resolved to.
pub fn diff_value_sets(expected: Option<&RouteValues>, actual: &RouteValues) -> Option<ValueMismatch> {
    let expected = match (expected, actual.is_empty()) {
        (None, true) => return None,
        (None, false) => {
            return Some(ValueMismatch::Count {
                expected: 0,
                actual: actual.len(),
            })
        }
        (Some(expected), true) => {
            return Some(ValueMismatch::Count {
                expected: expected.len(),
                actual: 0,
            })
        }
        (Some(expected), false) => expected,
    };

    if expected.len() >= actual.len() {
        for (key, expected_value) in expected.iter() {
            let Some(actual_value) = actual.get(key) else {
                return Some(ValueMismatch::Missing { key: key.to_string() });
            };
            if !scalar_equals(actual_value, expected_value) {
                return Some(ValueMismatch::Value {
                    key: key.to_string(),
                    expected: expected_value.clone(),
                    actual: actual_value.clone(),
                });
            }
        }
    } else {
        for (key, actual_value) in actual.iter() {
            let Some(expected_value) = expected.get(key) else {
                return Some(ValueMismatch::Unexpected {
                    key: key.to_string(),
                    value: actual_value.clone(),
                });
            };
            if !scalar_equals(actual_value, expected_value) {
                return Some(ValueMismatch::Value {
                    key: key.to_string(),
                    expected: expected_value.clone(),
                    actual: actual_value.clone(),
                });
            }
        }
    }

    None
}

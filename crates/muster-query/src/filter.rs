//! Record filters (`where`).
//!
//! Each raw value has the form `field:value`. A value may list alternatives separated by
//! `|`, and the literals `null` and `nil` (in any letter case) stand for the nil sentinel.
//! Values for the same field accumulate:
//!
//! | input                      | result              |
//! |----------------------------|---------------------|
//! | `where=id:1`               | `{id: "1"}`         |
//! | `where=id:null`            | `{id: nil}`         |
//! | `where=id:1\|2`            | `{id: ["1", "2"]}`  |
//! | `where=id:1&where=id:2`    | `{id: ["1", "2"]}`  |

use std::collections::BTreeMap;

use serde::Serialize;
use tracing::debug;

use crate::split::{ALTERNATIVE_SEPARATOR, split_field};

/// Query parameter holding the filters.
pub const WHERE_PARAM: &str = "where";

/// Literals that coerce to the nil sentinel, compared case-insensitively.
const NULL_LITERALS: [&str; 2] = ["null", "nil"];

/// Filters keyed by field name.
pub type WhereMap = BTreeMap<String, FilterValue>;

/// The value a field is filtered on.
///
/// Serializes as a JSON string, `null`, or an array of strings and nulls.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(untagged)]
pub enum FilterValue {
    /// A single value.
    Scalar(String),
    /// The nil sentinel.
    Null,
    /// Several values, any of which may match. `None` entries are nil.
    List(Vec<Option<String>>),
}

impl FilterValue {
    /// Builds the value for one field from every occurrence it had.
    ///
    /// A single occurrence with a single part stays scalar; anything else flattens into a list
    /// in encounter order.
    fn from_occurrences(occurrences: Vec<Vec<Option<String>>>) -> Self {
        let single = occurrences.len() == 1 && occurrences[0].len() == 1;
        let mut parts: Vec<Option<String>> = occurrences.into_iter().flatten().collect();

        if !single {
            return Self::List(parts);
        }
        match parts.pop().flatten() {
            Some(value) => Self::Scalar(value),
            None => Self::Null,
        }
    }

    /// Returns true if this is the nil sentinel.
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Returns every value as a flat list, with `None` for nil.
    pub fn values(&self) -> Vec<Option<&str>> {
        match self {
            Self::Scalar(value) => vec![Some(value.as_str())],
            Self::Null => vec![None],
            Self::List(values) => values.iter().map(Option::as_deref).collect(),
        }
    }
}

impl From<&str> for FilterValue {
    fn from(value: &str) -> Self {
        Self::Scalar(value.to_string())
    }
}

/// Returns true if `value` is one of the nil literals.
pub fn is_null_literal(value: &str) -> bool {
    NULL_LITERALS
        .iter()
        .any(|literal| value.eq_ignore_ascii_case(literal))
}

/// Coerces a single value part, mapping nil literals to `None`.
fn coerce(part: &str) -> Option<String> {
    if is_null_literal(part) {
        None
    } else {
        Some(part.to_string())
    }
}

/// Parses the raw `where` values into a filter map.
///
/// Terms without a `:` or with an empty field name are dropped. Only the first `:` separates
/// field from value, so values may themselves contain colons.
pub fn parse_where(raw_values: &[String]) -> WhereMap {
    let mut occurrences: BTreeMap<&str, Vec<Vec<Option<String>>>> = BTreeMap::new();

    for term in raw_values {
        let (field, value) = split_field(term);
        let Some(value) = value else {
            debug!(term = %term, "dropping where term without a value");
            continue;
        };
        if field.is_empty() {
            debug!(term = %term, "dropping where term without a field");
            continue;
        }

        let parts = value.split(ALTERNATIVE_SEPARATOR).map(coerce).collect();
        occurrences.entry(field).or_default().push(parts);
    }

    occurrences
        .into_iter()
        .map(|(field, values)| (field.to_string(), FilterValue::from_occurrences(values)))
        .collect()
}

//! Result ordering (`order`).

use std::fmt;

use serde::{Serialize, Serializer};
use tracing::debug;

use crate::split::{list_items, split_field};

/// Query parameter holding the ordering terms.
pub const ORDER_PARAM: &str = "order";

/// Sort direction of an ordering term.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Ascending (the default).
    #[default]
    Asc,
    /// Descending.
    Desc,
}

impl Direction {
    /// Resolves a direction token, case-insensitively.
    ///
    /// Accepts `asc`/`ascending` and `desc`/`descending`.
    pub fn from_token(token: &str) -> Option<Self> {
        const ASCENDING: [&str; 2] = ["asc", "ascending"];
        const DESCENDING: [&str; 2] = ["desc", "descending"];

        if ASCENDING.iter().any(|t| token.eq_ignore_ascii_case(t)) {
            Some(Self::Asc)
        } else if DESCENDING.iter().any(|t| token.eq_ignore_ascii_case(t)) {
            Some(Self::Desc)
        } else {
            None
        }
    }

    /// Returns the normalized token.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single ordering term.
///
/// Displays and serializes as `"<field> <direction>"`, e.g. `"id desc"`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct OrderTerm {
    /// Field to order by.
    pub field: String,
    /// Normalized direction.
    pub direction: Direction,
}

impl OrderTerm {
    /// Creates an ordering term.
    pub fn new(field: impl Into<String>, direction: Direction) -> Self {
        Self {
            field: field.into(),
            direction,
        }
    }
}

impl fmt::Display for OrderTerm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.field, self.direction)
    }
}

impl Serialize for OrderTerm {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Parses the raw `order` values into ordering terms.
///
/// Each value is comma-split into terms of the form `field[:direction]`. A missing or
/// unrecognized direction falls back to ascending; a term with an empty field is dropped.
pub fn parse_order(raw_values: &[String]) -> Vec<OrderTerm> {
    list_items(raw_values).filter_map(parse_term).collect()
}

/// Parses one `field[:direction]` term.
fn parse_term(term: &str) -> Option<OrderTerm> {
    let (field, token) = split_field(term);
    if field.is_empty() {
        debug!(term, "dropping order term without a field");
        return None;
    }

    let direction = match token {
        None => Direction::default(),
        Some(token) => Direction::from_token(token).unwrap_or_else(|| {
            debug!(field, direction = token, "unknown order direction, using asc");
            Direction::default()
        }),
    };

    Some(OrderTerm::new(field, direction))
}

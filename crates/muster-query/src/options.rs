//! Assembled query options with indifferent key access.
//!
//! Every field of [`QueryOptions`] can be looked up either by its [`OptionKey`] or by name.
//! Names may be written plainly (`"select"`) or in symbol form (`":select"`); all forms
//! resolve to the same stored value.

use std::{fmt, str::FromStr};

use serde::Serialize;

use crate::{
    error::UnknownOptionKey,
    filter::WhereMap,
    order::OrderTerm,
    pagination::Pagination,
    relation::Relation,
};

/// Prefix accepted in front of a key name for symbol-style lookups.
const SYMBOL_PREFIX: char = ':';

/// Names a field of [`QueryOptions`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum OptionKey {
    /// Selected fields.
    Select,
    /// Ordering terms.
    Order,
    /// Filters.
    Where,
    /// Relations to join.
    Joins,
    /// Relations to eager-load.
    Includes,
    /// Page request.
    Pagination,
    /// Record limit.
    Limit,
    /// Record offset.
    Offset,
}

impl OptionKey {
    /// Every key, in canonical order.
    pub const ALL: [Self; 8] = [
        Self::Select,
        Self::Order,
        Self::Where,
        Self::Joins,
        Self::Includes,
        Self::Pagination,
        Self::Limit,
        Self::Offset,
    ];

    /// Returns the canonical name.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Select => "select",
            Self::Order => "order",
            Self::Where => "where",
            Self::Joins => "joins",
            Self::Includes => "includes",
            Self::Pagination => "pagination",
            Self::Limit => "limit",
            Self::Offset => "offset",
        }
    }

    /// Resolves a key name, with or without a leading `:`.
    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.strip_prefix(SYMBOL_PREFIX).unwrap_or(name);
        Self::ALL.into_iter().find(|key| key.as_str() == name)
    }
}

impl fmt::Display for OptionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OptionKey {
    type Err = UnknownOptionKey;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| UnknownOptionKey(s.to_string()))
    }
}

/// Anything that can name a field of [`QueryOptions`].
pub trait AsOptionKey {
    /// Normalizes `self` to a key, or `None` if it names nothing.
    fn as_option_key(&self) -> Option<OptionKey>;
}

impl AsOptionKey for OptionKey {
    fn as_option_key(&self) -> Option<OptionKey> {
        Some(*self)
    }
}

impl AsOptionKey for str {
    fn as_option_key(&self) -> Option<OptionKey> {
        OptionKey::from_name(self)
    }
}

impl AsOptionKey for String {
    fn as_option_key(&self) -> Option<OptionKey> {
        OptionKey::from_name(self)
    }
}

impl<T: AsOptionKey + ?Sized> AsOptionKey for &T {
    fn as_option_key(&self) -> Option<OptionKey> {
        (**self).as_option_key()
    }
}

/// A borrowed view of one field of [`QueryOptions`].
///
/// Views compare by content, so a lookup by name and a lookup by key can be checked for
/// equality directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum OptionValue<'a> {
    /// Selected fields.
    Select(&'a [String]),
    /// Ordering terms.
    Order(&'a [OrderTerm]),
    /// Filters.
    Where(&'a WhereMap),
    /// Relations for `joins` or `includes`.
    Relations(&'a [Relation]),
    /// Page request.
    Pagination(Pagination),
    /// Record limit.
    Limit(u64),
    /// Record offset, `None` on the first page.
    Offset(Option<u64>),
}

/// Normalized options produced by one parse.
///
/// Serializes to an object with the keys `select`, `order`, `where`, `joins`, `includes`,
/// `pagination`, `limit` and `offset`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QueryOptions {
    /// Selected fields in encounter order.
    select: Vec<String>,
    /// Ordering terms in encounter order.
    order: Vec<OrderTerm>,
    /// Filters by field.
    #[serde(rename = "where")]
    filters: WhereMap,
    /// Relations to join.
    joins: Vec<Relation>,
    /// Relations to eager-load.
    includes: Vec<Relation>,
    /// Validated page request.
    pagination: Pagination,
    /// Record limit derived from the page size.
    limit: u64,
    /// Record offset derived from the page request.
    offset: Option<u64>,
}

impl QueryOptions {
    /// Assembles options from parsed fields, deriving limit and offset from `pagination`.
    pub fn new(
        select: Vec<String>,
        order: Vec<OrderTerm>,
        filters: WhereMap,
        joins: Vec<Relation>,
        includes: Vec<Relation>,
        pagination: Pagination,
    ) -> Self {
        Self {
            select,
            order,
            filters,
            joins,
            includes,
            limit: pagination.limit(),
            offset: pagination.offset(),
            pagination,
        }
    }

    /// Looks up a field by key or name.
    ///
    /// Returns `None` only when `key` names no field.
    pub fn get(&self, key: impl AsOptionKey) -> Option<OptionValue<'_>> {
        key.as_option_key().map(|key| self.value(key))
    }

    /// Returns the field named by `key`.
    pub fn value(&self, key: OptionKey) -> OptionValue<'_> {
        match key {
            OptionKey::Select => OptionValue::Select(&self.select),
            OptionKey::Order => OptionValue::Order(&self.order),
            OptionKey::Where => OptionValue::Where(&self.filters),
            OptionKey::Joins => OptionValue::Relations(&self.joins),
            OptionKey::Includes => OptionValue::Relations(&self.includes),
            OptionKey::Pagination => OptionValue::Pagination(self.pagination),
            OptionKey::Limit => OptionValue::Limit(self.limit),
            OptionKey::Offset => OptionValue::Offset(self.offset),
        }
    }

    /// Iterates over every field in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = (OptionKey, OptionValue<'_>)> {
        OptionKey::ALL.into_iter().map(|key| (key, self.value(key)))
    }

    /// Selected fields.
    pub fn select(&self) -> &[String] {
        &self.select
    }

    /// Ordering terms.
    pub fn order(&self) -> &[OrderTerm] {
        &self.order
    }

    /// Ordering terms rendered as `"<field> <direction>"`.
    pub fn order_clauses(&self) -> Vec<String> {
        self.order.iter().map(ToString::to_string).collect()
    }

    /// Filters by field.
    pub fn filters(&self) -> &WhereMap {
        &self.filters
    }

    /// Relations to join.
    pub fn joins(&self) -> &[Relation] {
        &self.joins
    }

    /// Relations to eager-load.
    pub fn includes(&self) -> &[Relation] {
        &self.includes
    }

    /// Validated page request.
    pub fn pagination(&self) -> Pagination {
        self.pagination
    }

    /// Record limit.
    pub fn limit(&self) -> u64 {
        self.limit
    }

    /// Record offset, `None` on the first page.
    pub fn offset(&self) -> Option<u64> {
        self.offset
    }
}

impl Default for QueryOptions {
    fn default() -> Self {
        Self::new(
            Vec::new(),
            Vec::new(),
            WhereMap::new(),
            Vec::new(),
            Vec::new(),
            Pagination::default(),
        )
    }
}

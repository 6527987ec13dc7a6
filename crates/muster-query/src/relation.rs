//! Relation trees (`joins` and `includes`).

use std::fmt;

use serde::{Serialize, Serializer, ser::SerializeMap};
use tracing::debug;

use crate::split::{PATH_SEPARATOR, list_items};

/// Query parameter holding relations to join.
pub const JOINS_PARAM: &str = "joins";

/// Query parameter holding relations to eager-load.
pub const INCLUDES_PARAM: &str = "includes";

/// One entry of a relation tree.
///
/// A bare name serializes as a string; a dotted path serializes as right-nested single-key
/// objects, so `author.country.region` becomes `{"author": {"country": "region"}}`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Relation {
    /// A relation with nothing nested under it.
    Name(String),
    /// A relation with a nested path below it.
    Nested {
        /// Name of this relation.
        name: String,
        /// The rest of the path.
        child: Box<Self>,
    },
}

impl Relation {
    /// Builds a relation from path segments, outermost first.
    ///
    /// Returns `None` for an empty path.
    pub fn from_path<S: AsRef<str>>(segments: &[S]) -> Option<Self> {
        let mut segments = segments.iter().rev();
        let mut relation = Self::Name(segments.next()?.as_ref().to_string());
        for name in segments {
            relation = Self::Nested {
                name: name.as_ref().to_string(),
                child: Box::new(relation),
            };
        }
        Some(relation)
    }

    /// Returns the name of the outermost relation.
    pub fn name(&self) -> &str {
        match self {
            Self::Name(name) | Self::Nested { name, .. } => name,
        }
    }

    /// Returns the nested relation, if any.
    pub fn child(&self) -> Option<&Self> {
        match self {
            Self::Name(_) => None,
            Self::Nested { child, .. } => Some(child.as_ref()),
        }
    }

    /// Returns the path segments, outermost first.
    pub fn path(&self) -> Vec<&str> {
        let mut path = vec![self.name()];
        let mut current = self;
        while let Some(child) = current.child() {
            path.push(child.name());
            current = child;
        }
        path
    }
}

impl fmt::Display for Relation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let separator = PATH_SEPARATOR.to_string();
        f.write_str(&self.path().join(separator.as_str()))
    }
}

impl Serialize for Relation {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Name(name) => serializer.serialize_str(name),
            Self::Nested { name, child } => {
                let mut map = serializer.serialize_map(Some(1))?;
                map.serialize_entry(name, child)?;
                map.end()
            }
        }
    }
}

/// Parses raw `joins` or `includes` values into a relation tree.
///
/// Values are comma-split into entries and each entry is dot-split into a path. Entries are
/// appended in encounter order and paths sharing a prefix are not merged: `a.b,a.c` yields
/// two entries. Empty segments are dropped.
pub fn parse_relations(raw_values: &[String]) -> Vec<Relation> {
    list_items(raw_values)
        .filter_map(|entry| {
            let segments: Vec<&str> = entry
                .split(PATH_SEPARATOR)
                .filter(|segment| !segment.is_empty())
                .collect();
            let relation = Relation::from_path(&segments);
            if relation.is_none() {
                debug!(entry, "dropping relation entry without a name");
            }
            relation
        })
        .collect()
}

//! Splitting helpers shared by the field parsers.

/// Separates list items inside a single raw value (`select=id,name`).
pub const LIST_SEPARATOR: char = ',';

/// Separates a field from its argument (`order=id:desc`, `where=id:1`).
pub const FIELD_SEPARATOR: char = ':';

/// Separates alternative filter values (`where=id:1|2`).
pub const ALTERNATIVE_SEPARATOR: char = '|';

/// Separates segments of a relation path (`includes=author.country`).
pub const PATH_SEPARATOR: char = '.';

/// Comma-splits every raw value and yields the non-empty parts in encounter order.
pub fn list_items(raw_values: &[String]) -> impl Iterator<Item = &str> {
    raw_values
        .iter()
        .flat_map(|value| value.split(LIST_SEPARATOR))
        .filter(|item| !item.is_empty())
}

/// Splits a term on its first field separator.
///
/// Returns the field and, if a separator was present, everything after it.
pub fn split_field(term: &str) -> (&str, Option<&str>) {
    match term.split_once(FIELD_SEPARATOR) {
        Some((field, argument)) => (field, Some(argument)),
        None => (term, None),
    }
}

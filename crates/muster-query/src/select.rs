//! Field selection (`select`).

use crate::split::list_items;

/// Query parameter holding the selected fields.
pub const SELECT_PARAM: &str = "select";

/// Parses the raw `select` values into an ordered field list.
///
/// Every value is comma-split and the parts are flattened in encounter order, so
/// `select=a&select=b,c` and `select=a,b,c` both give `[a, b, c]`. Duplicates are kept.
pub fn parse_select(raw_values: &[String]) -> Vec<String> {
    list_items(raw_values).map(str::to_owned).collect()
}

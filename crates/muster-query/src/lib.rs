//! Query-string parsing into normalized record query options.
//!
//! This crate turns an HTTP query string into the options a data-access layer needs to build
//! a record query:
//!
//! - **Select**: `select=id,name` - fields to load
//! - **Order**: `order=id:desc&order=name` - ordering terms, ascending by default
//! - **Where**: `where=id:1|2&where=deleted_at:null` - filters with alternatives and nil
//! - **Joins / includes**: `includes=author.country,comments` - relation trees
//! - **Pagination**: `page=3&per_page=5` - page request with derived limit and offset
//!
//! Parsing is total: malformed field values fall back to that field's default. Only a query
//! string that cannot be percent-decoded is an error.
//!
//! # Example
//!
//! ```
//! use muster_query::{OptionKey, parse};
//!
//! let options = parse("select=id,name&order=id:desc&page=3&page_size=5").unwrap();
//! assert_eq!(options.select(), ["id", "name"]);
//! assert_eq!(options.order_clauses(), ["id desc"]);
//! assert_eq!(options.offset(), Some(10));
//! assert_eq!(options.get("select"), options.get(OptionKey::Select));
//! ```

#![warn(missing_docs)]

mod error;
mod filter;
mod options;
mod order;
mod pagination;
mod parser;
mod relation;
mod select;
mod settings;
mod split;
mod tokenizer;

pub use error::{QueryError, UnknownOptionKey};
pub use filter::{FilterValue, WHERE_PARAM, WhereMap, is_null_literal, parse_where};
pub use options::{AsOptionKey, OptionKey, OptionValue, QueryOptions};
pub use order::{Direction, ORDER_PARAM, OrderTerm, parse_order};
pub use pagination::{
    PAGE_PARAM, PAGE_SIZE_PARAM, PER_PAGE_PARAM, Pagination, parse_pagination,
};
pub use parser::{Parser, parse};
pub use relation::{INCLUDES_PARAM, JOINS_PARAM, Relation, parse_relations};
pub use select::{SELECT_PARAM, parse_select};
pub use settings::{DEFAULT_PAGE, DEFAULT_PER_PAGE, ParserSettings};
pub use tokenizer::{RawParams, tokenize};

//! Options assembler.
//!
//! Tokenizes a query string once and hands each field parser the values for its parameter.
//! Field parsers share no state, and none of them can fail; the only error is a query string
//! that does not decode.

use tracing::debug;

use crate::{
    error::QueryError,
    filter::{WHERE_PARAM, parse_where},
    options::QueryOptions,
    order::{ORDER_PARAM, parse_order},
    pagination::parse_pagination,
    relation::{INCLUDES_PARAM, JOINS_PARAM, parse_relations},
    select::{SELECT_PARAM, parse_select},
    settings::ParserSettings,
    tokenizer::{RawParams, tokenize},
};

/// Parses query strings into [`QueryOptions`].
///
/// A parser holds only its immutable settings, so one instance can be shared freely.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Parser {
    /// Defaults applied during assembly.
    settings: ParserSettings,
}

impl Parser {
    /// Creates a parser with the given settings.
    pub fn new(settings: ParserSettings) -> Self {
        Self { settings }
    }

    /// Returns the parser's settings.
    pub fn settings(&self) -> &ParserSettings {
        &self.settings
    }

    /// Parses a raw query string.
    ///
    /// Fails only when the query string has invalid percent-encoding or decodes to invalid
    /// UTF-8. Malformed field values fall back to that field's default.
    pub fn parse(&self, query: &str) -> Result<QueryOptions, QueryError> {
        let params = tokenize(query)?;
        Ok(self.assemble(&params))
    }

    /// Builds options from already-decoded parameters.
    pub fn assemble(&self, params: &RawParams) -> QueryOptions {
        let options = QueryOptions::new(
            parse_select(params.values(SELECT_PARAM)),
            parse_order(params.values(ORDER_PARAM)),
            parse_where(params.values(WHERE_PARAM)),
            parse_relations(params.values(JOINS_PARAM)),
            parse_relations(params.values(INCLUDES_PARAM)),
            parse_pagination(params, &self.settings),
        );
        debug!(
            select = options.select().len(),
            order = options.order().len(),
            filters = options.filters().len(),
            joins = options.joins().len(),
            includes = options.includes().len(),
            limit = options.limit(),
            offset = ?options.offset(),
            "assembled query options"
        );
        options
    }
}

/// Parses a raw query string with default settings.
///
/// See [`Parser::parse`].
pub fn parse(query: &str) -> Result<QueryOptions, QueryError> {
    Parser::default().parse(query)
}

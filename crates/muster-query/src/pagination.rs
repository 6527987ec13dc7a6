//! Pagination (`page`, `per_page`, `page_size`).

use serde::Serialize;
use tracing::debug;

use crate::{settings::ParserSettings, tokenizer::RawParams};

/// Query parameter holding the 1-based page number.
pub const PAGE_PARAM: &str = "page";

/// Query parameter holding the page size.
pub const PER_PAGE_PARAM: &str = "per_page";

/// Alternative page size parameter, consulted only when `per_page` is absent.
pub const PAGE_SIZE_PARAM: &str = "page_size";

/// A validated page request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Pagination {
    /// 1-based page number.
    pub page: u64,
    /// Records per page.
    pub per_page: u64,
}

impl Pagination {
    /// Returns the record limit, which is always the page size.
    pub fn limit(&self) -> u64 {
        self.per_page
    }

    /// Returns the record offset, or `None` on the first page.
    ///
    /// Saturates at `u64::MAX` for page requests too large to address.
    pub fn offset(&self) -> Option<u64> {
        (self.page > 1).then(|| (self.page - 1).saturating_mul(self.per_page))
    }
}

impl Default for Pagination {
    fn default() -> Self {
        let settings = ParserSettings::default();
        Self {
            page: settings.default_page,
            per_page: settings.default_per_page,
        }
    }
}

/// Reads pagination from the decoded parameters.
///
/// `page` and the page size are validated independently: each must be a strictly positive
/// base-10 integer, otherwise that field alone takes its default. When a key repeats, the
/// last occurrence wins.
pub fn parse_pagination(params: &RawParams, settings: &ParserSettings) -> Pagination {
    let page = params.last(PAGE_PARAM).map_or(settings.default_page, |raw| {
        positive_or_default(PAGE_PARAM, raw, settings.default_page)
    });

    let per_page = [PER_PAGE_PARAM, PAGE_SIZE_PARAM]
        .into_iter()
        .find_map(|key| params.last(key).map(|raw| (key, raw)))
        .map_or(settings.default_per_page, |(key, raw)| {
            positive_or_default(key, raw, settings.default_per_page)
        });

    let per_page = match settings.max_per_page {
        Some(max) if per_page > max => {
            debug!(per_page, max, "clamping page size");
            max
        }
        _ => per_page,
    };

    Pagination { page, per_page }
}

/// Parses a strictly positive integer, falling back to `default`.
fn positive_or_default(key: &str, raw: &str, default: u64) -> u64 {
    match raw.parse::<u64>() {
        Ok(value) if value > 0 => value,
        _ => {
            debug!(key, value = raw, default, "invalid pagination value, using default");
            default
        }
    }
}

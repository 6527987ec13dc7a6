//! Parser settings.

/// Page used when `page` is absent or invalid.
pub const DEFAULT_PAGE: u64 = 1;

/// Page size used when `per_page`/`page_size` is absent or invalid.
pub const DEFAULT_PER_PAGE: u64 = 30;

/// Settings that control how a [`Parser`](crate::Parser) fills in defaults.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParserSettings {
    /// Page used when `page` is absent or invalid. Default: 1.
    pub default_page: u64,
    /// Page size used when `per_page`/`page_size` is absent or invalid. Default: 30.
    pub default_per_page: u64,
    /// Upper bound for a requested page size. Larger valid values are clamped to it.
    /// Default: unbounded.
    pub max_per_page: Option<u64>,
}

impl Default for ParserSettings {
    fn default() -> Self {
        Self {
            default_page: DEFAULT_PAGE,
            default_per_page: DEFAULT_PER_PAGE,
            max_per_page: None,
        }
    }
}

impl ParserSettings {
    /// Sets the default page.
    pub fn with_default_page(mut self, page: u64) -> Self {
        self.default_page = page;
        self
    }

    /// Sets the default page size.
    pub fn with_default_per_page(mut self, per_page: u64) -> Self {
        self.default_per_page = per_page;
        self
    }

    /// Sets the largest page size a query may request.
    pub fn with_max_per_page(mut self, max: u64) -> Self {
        self.max_per_page = Some(max);
        self
    }
}

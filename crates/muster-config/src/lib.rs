//! Configuration system for muster.
//!
//! muster reads TOML files named `.muster.toml`. Configuration is resolved by walking up the
//! directory tree from the current working directory, collecting any `.muster.toml` files
//! found, then loading `~/.muster.toml` as the global config with lowest precedence.
//!
//! ```toml
//! [pagination]
//! default_page = 1
//! default_per_page = 30
//! max_per_page = 100
//! ```

#![warn(missing_docs)]

mod discovery;
mod error;
mod merge;
mod parse;
#[cfg(test)]
mod test_support;

use std::path::{Path, PathBuf};

pub use discovery::{CONFIG_FILENAME, discover_config_files, global_config_path};
pub use error::ConfigError;
pub use merge::{ParsedConfig, merge_configs};
use muster_query::{DEFAULT_PAGE, DEFAULT_PER_PAGE, ParserSettings};
pub use parse::{RawConfig, RawPagination, parse_config_file, parse_config_str};
use serde::Serialize;

/// Top-level merged configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    /// Pagination defaults.
    pub pagination: PaginationSettings,
    /// Files the configuration was merged from, highest precedence first.
    pub sources: Vec<PathBuf>,
}

impl Config {
    /// Loads configuration by discovering and merging all relevant `.muster.toml` files.
    ///
    /// Returns `Ok(Config::default())` if no configuration files are found.
    pub fn load(cwd: &Path) -> Result<Self, ConfigError> {
        let config_files = discover_config_files(cwd);
        Self::load_from_files(&config_files)
    }

    /// Loads configuration from a specific list of config file paths.
    ///
    /// Files should be provided in precedence order: highest precedence first.
    pub fn load_from_files(files: &[PathBuf]) -> Result<Self, ConfigError> {
        let parsed = files
            .iter()
            .map(|path| {
                let config = parse_config_file(path)?;
                Ok(ParsedConfig {
                    path: path.clone(),
                    config,
                })
            })
            .collect::<Result<Vec<_>, ConfigError>>()?;

        merge_configs(&parsed)
    }

    /// Checks that the settings can drive a parser.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let pagination = &self.pagination;
        if pagination.default_page == 0 {
            return Err(ConfigError::InvalidSetting {
                key: "pagination.default_page",
                message: "must be at least 1".to_string(),
            });
        }
        if pagination.default_per_page == 0 {
            return Err(ConfigError::InvalidSetting {
                key: "pagination.default_per_page",
                message: "must be at least 1".to_string(),
            });
        }
        if let Some(max) = pagination.max_per_page
            && max < pagination.default_per_page
        {
            return Err(ConfigError::InvalidSetting {
                key: "pagination.max_per_page",
                message: format!(
                    "{max} is smaller than default_per_page ({})",
                    pagination.default_per_page
                ),
            });
        }
        Ok(())
    }

    /// Returns the parser settings this configuration describes.
    pub fn parser_settings(&self) -> ParserSettings {
        ParserSettings {
            default_page: self.pagination.default_page,
            default_per_page: self.pagination.default_per_page,
            max_per_page: self.pagination.max_per_page,
        }
    }

    /// Serializes the effective settings to TOML, in the same format as a `.muster.toml`.
    pub fn to_toml(&self) -> String {
        let serializable = SerializableConfig {
            pagination: self.pagination,
        };
        toml::to_string_pretty(&serializable).expect("settings serialization should not fail")
    }
}

/// Pagination defaults applied by the parser.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PaginationSettings {
    /// Page used when `page` is absent or invalid.
    pub default_page: u64,
    /// Page size used when `per_page`/`page_size` is absent or invalid.
    pub default_per_page: u64,
    /// Largest page size a query may request. Unbounded when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_per_page: Option<u64>,
}

impl Default for PaginationSettings {
    fn default() -> Self {
        Self {
            default_page: DEFAULT_PAGE,
            default_per_page: DEFAULT_PER_PAGE,
            max_per_page: None,
        }
    }
}

/// Internal struct for TOML serialization of settings.
#[derive(Serialize)]
struct SerializableConfig {
    /// Pagination section.
    pagination: PaginationSettings,
}

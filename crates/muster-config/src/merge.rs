//! Configuration merging.
//!
//! Merges multiple `RawConfig` files into a single validated `Config`.

use std::path::PathBuf;

use tracing::debug;

use crate::{
    Config, ConfigError, PaginationSettings,
    parse::{RawConfig, RawPagination},
};

/// A parsed config file with its source path.
pub struct ParsedConfig {
    /// Path to the config file.
    pub path: PathBuf,
    /// Parsed raw configuration.
    pub config: RawConfig,
}

/// Merges configuration files into a single validated `Config`.
///
/// Configs should be provided in precedence order: highest precedence first (closest to the
/// working directory), global config last. For every setting the first defined value wins.
pub fn merge_configs(configs: &[ParsedConfig]) -> Result<Config, ConfigError> {
    let mut pagination = PaginationSettings::default();

    // Lowest precedence first so closer files overwrite
    for parsed in configs.iter().rev() {
        if let Some(ref raw) = parsed.config.pagination {
            debug!(path = %parsed.path.display(), "applying pagination settings");
            apply_raw_pagination(&mut pagination, raw);
        }
    }

    let config = Config {
        pagination,
        sources: configs.iter().map(|parsed| parsed.path.clone()).collect(),
    };
    config.validate()?;
    Ok(config)
}

/// Applies raw pagination settings to result, overwriting any present values.
fn apply_raw_pagination(result: &mut PaginationSettings, raw: &RawPagination) {
    if let Some(v) = raw.default_page {
        result.default_page = v;
    }
    if let Some(v) = raw.default_per_page {
        result.default_per_page = v;
    }
    if let Some(v) = raw.max_per_page {
        result.max_per_page = Some(v);
    }
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use super::*;
    use crate::parse::parse_config_str;

    /// Parses TOML into a `ParsedConfig` tagged with `path`.
    fn parsed(path: &str, toml: &str) -> ParsedConfig {
        ParsedConfig {
            path: PathBuf::from(path),
            config: parse_config_str(toml, Path::new(path)).unwrap(),
        }
    }

    #[test]
    fn no_configs_gives_defaults() {
        let config = merge_configs(&[]).unwrap();
        assert_eq!(config.pagination, PaginationSettings::default());
        assert!(config.sources.is_empty());
    }

    #[test]
    fn closest_value_wins_per_field() {
        let config = merge_configs(&[
            parsed("/a/b/.muster.toml", "[pagination]\ndefault_per_page = 10\n"),
            parsed(
                "/a/.muster.toml",
                "[pagination]\ndefault_per_page = 50\nmax_per_page = 100\n",
            ),
        ])
        .unwrap();

        assert_eq!(config.pagination.default_per_page, 10);
        assert_eq!(config.pagination.max_per_page, Some(100));
        assert_eq!(config.pagination.default_page, 1);
        assert_eq!(config.sources.len(), 2);
    }

    #[test]
    fn merged_result_is_validated() {
        let err = merge_configs(&[parsed(
            "/a/.muster.toml",
            "[pagination]\ndefault_per_page = 0\n",
        )])
        .unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidSetting {
                key: "pagination.default_per_page",
                ..
            }
        ));
    }
}

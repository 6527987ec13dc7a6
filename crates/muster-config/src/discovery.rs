//! Configuration file discovery.
//!
//! Discovers `.muster.toml` files by walking up the directory tree from a starting point,
//! then appending the global `~/.muster.toml` if present.

use std::path::{Path, PathBuf};

use directories::BaseDirs;

use crate::parse::is_root_config;

/// The configuration filename.
pub const CONFIG_FILENAME: &str = ".muster.toml";

/// Discovers all configuration files relevant to the given directory.
///
/// Returns paths in precedence order: closest to `cwd` first, global last. The walk stops at
/// a file that sets `root = true`, and the global file is skipped in that case.
pub fn discover_config_files(cwd: &Path) -> Vec<PathBuf> {
    let mut configs = Vec::new();
    let mut found_root = false;

    let mut current = Some(cwd);
    while let Some(dir) = current {
        let config_path = dir.join(CONFIG_FILENAME);
        if config_path.is_file() {
            let is_root = is_root_config(&config_path);
            configs.push(config_path);
            if is_root {
                found_root = true;
                break;
            }
        }
        current = dir.parent();
    }

    if !found_root
        && let Some(global_path) = global_config_path()
        && global_path.is_file()
        && !configs.contains(&global_path)
    {
        configs.push(global_path);
    }

    configs
}

/// Returns the path to the global configuration file (`~/.muster.toml`).
///
/// Returns `None` if the home directory cannot be determined.
pub fn global_config_path() -> Option<PathBuf> {
    BaseDirs::new().map(|dirs| dirs.home_dir().join(CONFIG_FILENAME))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::TestDir;

    #[test]
    fn finds_config_in_cwd() {
        let dir = TestDir::new();
        let config = dir.create_config("", "");

        let found = discover_config_files(dir.path());
        assert_eq!(found.first(), Some(&config));
    }

    #[test]
    fn closest_config_comes_first() {
        let dir = TestDir::new();
        let outer = dir.create_config("", "");
        let inner = dir.create_config("api/v1", "");
        let cwd = dir.create_dir("api/v1/handlers");

        let found = discover_config_files(&cwd);
        assert_eq!(found[0], inner);
        assert_eq!(found[1], outer);
    }

    #[test]
    fn root_config_stops_the_walk() {
        let dir = TestDir::new();
        dir.create_config("", "");
        let inner = dir.create_config("service", "root = true\n");

        let found = discover_config_files(inner.parent().unwrap());
        assert_eq!(found, vec![inner]);
    }
}

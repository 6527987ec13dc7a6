//! Shared context for running CLI commands.

use std::{
    env,
    path::{Path, PathBuf},
    process::ExitCode,
};

use muster_config::Config;
use muster_query::Parser;

/// Command execution context built once per CLI invocation.
pub struct CommandContext {
    /// Loaded configuration (default if no config files were found).
    pub config: Config,
}

impl CommandContext {
    /// Loads configuration from `explicit`, or by discovery from the working directory.
    pub fn load(explicit: Option<&Path>) -> Result<Self, ExitCode> {
        let loaded = match explicit {
            Some(path) => Config::load_from_files(&[path.to_path_buf()]),
            None => Config::load(&current_dir_or_failure()?),
        };

        match loaded {
            Ok(config) => Ok(Self { config }),
            Err(e) => {
                eprintln!("error: failed to load configuration: {e}");
                Err(ExitCode::FAILURE)
            }
        }
    }

    /// Returns a parser configured from the loaded settings.
    pub fn parser(&self) -> Parser {
        Parser::new(self.config.parser_settings())
    }
}

/// Returns the current directory, exiting with a consistent error on failure.
fn current_dir_or_failure() -> Result<PathBuf, ExitCode> {
    env::current_dir().map_err(|e| {
        eprintln!("error: could not determine current directory: {e}");
        ExitCode::FAILURE
    })
}

//! Implementation of `muster config`.

use std::process::ExitCode;

use crate::cli::context::CommandContext;

/// Shows effective configuration settings.
pub fn run(ctx: &CommandContext) -> ExitCode {
    let config = &ctx.config;
    if config.sources.is_empty() {
        println!("# no configuration files found, using defaults");
    }
    for source in &config.sources {
        println!("# source: {}", source.display());
    }
    print!("{}", config.to_toml());
    ExitCode::SUCCESS
}

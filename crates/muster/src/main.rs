//! Command-line interface for the `muster` query-string inspector.

mod cli;

use std::process::ExitCode;

use clap::Parser;

use cli::{args::Cli, commands, context::CommandContext, logging};

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let ctx = match CommandContext::load(cli.config.as_deref()) {
        Ok(ctx) => ctx,
        Err(code) => return code,
    };

    commands::run(cli.command, &ctx)
}

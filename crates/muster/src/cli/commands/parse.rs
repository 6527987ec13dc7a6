//! Implementation of `muster parse`.

use std::process::ExitCode;

use tracing::debug;

use crate::cli::{args::ParseCommand, context::CommandContext, output};

/// Parses the query string and prints the normalized options.
pub fn run(ctx: &CommandContext, cmd: &ParseCommand) -> ExitCode {
    let parser = ctx.parser();
    debug!(settings = ?parser.settings(), "parsing query string");

    let options = match parser.parse(&cmd.query) {
        Ok(options) => options,
        Err(e) => {
            eprintln!("error: {}", e.format_with_context());
            return ExitCode::FAILURE;
        }
    };

    match cmd.key {
        Some(key) => output::print_value(&options.value(key), cmd.json),
        None => output::print_options(&options, cmd.json),
    }
}

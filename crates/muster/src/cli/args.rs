//! Clap argument definitions for the `muster` CLI.

use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand};
use muster_query::{OptionKey, UnknownOptionKey};

/// Parse an option key, accepting both `where` and `:where`.
fn parse_key(s: &str) -> Result<OptionKey, String> {
    s.parse().map_err(|e: UnknownOptionKey| e.to_string())
}

/// Top-level CLI options.
#[derive(Parser)]
#[command(name = "muster")]
#[command(about = "Inspect how query strings normalize into record query options")]
pub struct Cli {
    /// Log verbosity (-v for debug, -vv for trace); MUSTER_LOG overrides
    #[arg(short = 'v', long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Read settings from this file instead of discovering .muster.toml files
    #[arg(short = 'c', long, global = true)]
    pub config: Option<PathBuf>,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

/// Arguments for `muster parse`.
#[derive(Args, Debug, Clone)]
pub struct ParseCommand {
    /// Query string to parse, with or without a leading '?'
    pub query: String,

    /// Print only this option (select, order, where, joins, includes, pagination, limit, offset)
    #[arg(short = 'k', long, value_parser = parse_key)]
    pub key: Option<OptionKey>,

    /// Output in JSON format
    #[arg(long)]
    pub json: bool,
}

/// Supported `muster` subcommands.
#[derive(Subcommand)]
pub enum Commands {
    /// Parse a query string and show the normalized options
    Parse(ParseCommand),

    /// Show the effective configuration
    Config,
}

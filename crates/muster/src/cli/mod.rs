//! CLI support for the `muster` binary.

pub mod args;
pub mod commands;
pub mod context;
pub mod logging;
pub mod output;

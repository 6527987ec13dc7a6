//! Rendering and JSON serialization for CLI output.

use std::process::ExitCode;

use comfy_table::{Cell, Table, presets::UTF8_FULL_CONDENSED};
use muster_query::{OptionValue, QueryOptions};
use serde::Serialize;

/// Prints every option, as a table or as pretty JSON.
pub fn print_options(options: &QueryOptions, json: bool) -> ExitCode {
    if json {
        return print_json(options);
    }

    let mut table = Table::new();
    table.load_preset(UTF8_FULL_CONDENSED);
    table.set_header(vec!["Option", "Value"]);
    for (key, value) in options.iter() {
        table.add_row(vec![Cell::new(key), Cell::new(render_value(&value))]);
    }
    println!("{table}");
    ExitCode::SUCCESS
}

/// Prints a single option, compact by default or as pretty JSON.
pub fn print_value(value: &OptionValue<'_>, json: bool) -> ExitCode {
    if json {
        return print_json(value);
    }
    println!("{}", render_value(value));
    ExitCode::SUCCESS
}

/// Renders one option value as compact JSON.
fn render_value(value: &OptionValue<'_>) -> String {
    serde_json::to_string(value).unwrap_or_else(|e| format!("<unrenderable: {e}>"))
}

/// Prints `value` as pretty JSON.
fn print_json<T: Serialize + ?Sized>(value: &T) -> ExitCode {
    match serde_json::to_string_pretty(value) {
        Ok(rendered) => {
            println!("{rendered}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: failed to serialize output: {e}");
            ExitCode::FAILURE
        }
    }
}

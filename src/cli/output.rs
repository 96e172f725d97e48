//! Terminal output formatting with colors
//!
//! Respects NO_COLOR, CLICOLOR, CLICOLOR_FORCE automatically.

use std::io::Write;

use colored::Colorize;

use crate::config::Settings;
use crate::domain::{Accessor, Cell};
use crate::infrastructure::{InfraError, InfraResult};

/// Print error (red bold "error:" prefix) to stderr
pub fn error(msg: &(impl std::fmt::Display + ?Sized)) {
    eprintln!("{}: {}", "error".red().bold(), msg);
}

/// Print warning (yellow "Warning:" prefix) to stderr
pub fn warning(msg: &(impl std::fmt::Display + ?Sized)) {
    eprintln!("{}: {}", "Warning".yellow(), msg);
}

/// Section header (cyan bold)
pub fn header(msg: &(impl std::fmt::Display + ?Sized)) -> String {
    msg.to_string().cyan().bold().to_string()
}

/// Indented detail (no color)
pub fn detail(msg: &(impl std::fmt::Display + ?Sized)) -> String {
    format!("  {}", msg)
}

/// Print plain output (no color)
pub fn info(msg: &(impl std::fmt::Display + ?Sized)) {
    println!("{}", msg);
}

/// Render one cell as `label[span]`, using the placeholder for padding cells.
pub fn format_cell(cell: &Cell<String>, settings: &Settings) -> String {
    let label = cell.label.as_deref().unwrap_or(&settings.placeholder);
    if settings.show_spans {
        format!("{}[{}]", label, cell.span)
    } else {
        label.to_string()
    }
}

/// Render a header row, cells separated by ` | `.
pub fn format_row(row: &[Cell<String>], settings: &Settings) -> String {
    row.iter()
        .map(|cell| format_cell(cell, settings))
        .collect::<Vec<_>>()
        .join(" | ")
}

/// Render the bottom header row made of the data columns' own labels.
pub fn format_leaf_row(leaves: &[Accessor], settings: &Settings) -> String {
    let cells: Vec<Cell<String>> = leaves
        .iter()
        .map(|leaf| Cell::labeled(1, leaf.header.clone()))
        .collect();
    format_row(&cells, settings)
}

/// Render a group header row: labels highlighted, padding dimmed.
pub fn grid_row(row: &[Cell<String>], settings: &Settings) -> String {
    row.iter()
        .map(|cell| {
            let text = format_cell(cell, settings);
            if cell.is_padding() {
                text.dimmed().to_string()
            } else {
                text.cyan().to_string()
            }
        })
        .collect::<Vec<_>>()
        .join(" | ")
}

/// Write one line per entry; a failed write (e.g. closed pipe) is an I/O error.
pub fn write_lines<W: Write>(out: &mut W, lines: &[String]) -> InfraResult<()> {
    for line in lines {
        writeln!(out, "{}", line).map_err(|e| InfraError::io("write stdout", e))?;
    }
    out.flush().map_err(|e| InfraError::io("flush stdout", e))
}

//! GitHub-flavoured Markdown tables.

use crate::builder::MooreMachine;
use std::fmt::Display;

/// Render the states and their outputs as a Markdown table.
///
/// Columns are padded to the widest cell, so a machine with states `S1`
/// and `S2` renders as:
///
/// ```text
/// | State | Output |
/// |-------|--------|
/// | S1    | X      |
/// | S2    | Y      |
/// ```
pub fn state_table<O: Display>(machine: &MooreMachine<O>) -> String {
    let rows: Vec<Vec<String>> = machine
        .states()
        .map(|(name, output)| vec![name.to_string(), output.to_string()])
        .collect();
    render(&["State", "Output"], &rows)
}

/// Render the transitions as a Markdown table, in insertion order.
pub fn transition_table<O>(machine: &MooreMachine<O>) -> String {
    let rows: Vec<Vec<String>> = machine
        .transitions()
        .iter()
        .map(|t| vec![t.source.clone(), t.on.clone(), t.target.clone()])
        .collect();
    render(&["Source", "Input", "Target"], &rows)
}

fn render(headers: &[&str], rows: &[Vec<String>]) -> String {
    let widths: Vec<usize> = headers
        .iter()
        .enumerate()
        .map(|(column, header)| {
            rows.iter()
                .map(|row| row[column].chars().count())
                .chain(std::iter::once(header.chars().count()))
                .max()
                .unwrap_or(0)
        })
        .collect();

    let mut lines = Vec::with_capacity(rows.len() + 2);
    lines.push(row_line(headers.iter().copied(), &widths));
    lines.push(format!(
        "|{}|",
        widths
            .iter()
            .map(|w| "-".repeat(w + 2))
            .collect::<Vec<_>>()
            .join("|")
    ));
    for row in rows {
        lines.push(row_line(row.iter().map(String::as_str), &widths));
    }
    lines.join("\n")
}

fn row_line<'a>(cells: impl Iterator<Item = &'a str>, widths: &[usize]) -> String {
    let cells: Vec<String> = cells
        .zip(widths)
        .map(|(cell, &width)| format!(" {cell:<width$} "))
        .collect();
    format!("|{}|", cells.join("|"))
}

//! Result renderer: turns a [`ResultSet`] into display-ready tables.
//!
//! DESIGN
//! ======
//! Rendering is a full replace. `render_result_set` builds a fresh list of
//! tables every time and the view swaps it in wholesale; nothing is diffed
//! against the previous output.
//!
//! The only content-dependent styling is the adjusted-residual emphasis: a
//! line starting with the residual prefix (any letter case) gets its number
//! emphasized, but only when the flag mask marks that cell.

#[cfg(test)]
#[path = "render_test.rs"]
mod render_test;

use super::results::{CellContent, ResultSet, TableResult};

/// One line inside a cell.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CellLine {
    Plain(String),
    /// `label` is rendered as-is, `value` gets the emphasis style.
    Emphasized { label: String, value: String },
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RenderedCell {
    pub lines: Vec<CellLine>,
}

impl RenderedCell {
    #[must_use]
    pub fn has_emphasis(&self) -> bool {
        self.lines.iter().any(|l| matches!(l, CellLine::Emphasized { .. }))
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderedRow {
    pub label: String,
    pub cells: Vec<RenderedCell>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderedTable {
    pub key: String,
    pub title: String,
    /// Column labels preceded by one empty corner cell.
    pub header: Vec<String>,
    pub rows: Vec<RenderedRow>,
}

/// Render every table in `set`, in the set's order.
#[must_use]
pub fn render_result_set(set: &ResultSet, residual_prefix: &str) -> Vec<RenderedTable> {
    set.iter().map(|(key, table)| render_table(key, table, residual_prefix)).collect()
}

#[must_use]
pub fn render_table(key: &str, table: &TableResult, residual_prefix: &str) -> RenderedTable {
    let header = std::iter::once(String::new()).chain(table.columns.iter().cloned()).collect();
    let rows = table
        .index
        .iter()
        .enumerate()
        .map(|(i, label)| RenderedRow {
            label: label.clone(),
            cells: table
                .data
                .get(i)
                .map(|row| {
                    row.iter()
                        .enumerate()
                        .map(|(j, content)| render_cell(content, table.is_flagged(i, j), residual_prefix))
                        .collect()
                })
                .unwrap_or_default(),
        })
        .collect();

    RenderedTable { key: key.to_owned(), title: table.display_title(key).to_owned(), header, rows }
}

#[must_use]
pub fn render_cell(content: &CellContent, flagged: bool, residual_prefix: &str) -> RenderedCell {
    let lines = match content {
        CellContent::Empty => Vec::new(),
        CellContent::Text(text) => vec![CellLine::Plain(text.clone())],
        CellContent::Lines(lines) => lines.iter().map(|line| render_line(line, flagged, residual_prefix)).collect(),
    };
    RenderedCell { lines }
}

fn render_line(line: &str, flagged: bool, residual_prefix: &str) -> CellLine {
    if flagged {
        if let Some(value) = residual_value(line, residual_prefix) {
            return CellLine::Emphasized { label: residual_prefix.to_owned(), value };
        }
    }
    CellLine::Plain(line.to_owned())
}

/// Number portion of a residual line, if `line` starts with `prefix` ignoring case.
#[must_use]
pub fn residual_value(line: &str, prefix: &str) -> Option<String> {
    let head = line.get(..prefix.len())?;
    if !head.eq_ignore_ascii_case(prefix) {
        return None;
    }
    let value = line[prefix.len()..].trim();
    if value.is_empty() { None } else { Some(value.to_owned()) }
}

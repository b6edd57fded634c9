//! Text rendering of page snapshots and the board table

use crate::config::FillMode;
use remoteid_web::{Document, BOARDS};
use std::fmt::Write;

/// Render every element of the page, one per line
pub fn render_snapshot(doc: &Document, mode: FillMode) -> String {
    let width = doc.elements().map(|(id, _)| id.len()).max().unwrap_or(0);
    let mut out = String::new();

    for (id, element) in doc.elements() {
        let content = match mode {
            FillMode::Html => &element.inner_html,
            FillMode::Value => &element.value,
        };
        let _ = writeln!(out, "  {:<width$}  {}", id, content, width = width);
    }
    if let Some(color) = doc.background() {
        let _ = writeln!(out, "  background: {}", color);
    }
    out
}

/// Render the known board table
pub fn render_boards() -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{:>4}  {:<20} {}", "code", "name", "background");
    for board in BOARDS {
        let background = if board.light_background { "light" } else { "default" };
        let _ = writeln!(out, "{:>4}  {:<20} {}", board.code, board.name, background);
    }
    out
}

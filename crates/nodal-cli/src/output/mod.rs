//! Output formatting for CLI commands.

use comfy_table::{Cell, Color, ContentArrangement, Table};
use serde::Serialize;

/// Output format selection.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Format {
    Table,
    Json,
}

impl From<crate::OutputFormat> for Format {
    fn from(f: crate::OutputFormat) -> Self {
        match f {
            crate::OutputFormat::Table => Format::Table,
            crate::OutputFormat::Json => Format::Json,
        }
    }
}

/// Print data as pretty JSON.
pub fn print_json<T: Serialize>(data: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(data)?);
    Ok(())
}

/// Create a styled table with consistent formatting.
pub fn create_table() -> Table {
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.load_preset(comfy_table::presets::UTF8_FULL_CONDENSED);
    table
}

/// Add a header row to a table.
pub fn add_header(table: &mut Table, headers: &[&str]) {
    table.set_header(
        headers
            .iter()
            .map(|h| Cell::new(h).fg(Color::Cyan))
            .collect::<Vec<_>>(),
    );
}

/// Print a table whose first column names a vertex.
pub fn print_vertex_table(headers: &[&str], rows: Vec<Vec<String>>) {
    let mut table = create_table();
    add_header(&mut table, headers);
    for mut row in rows {
        let mut cells = Vec::with_capacity(row.len());
        if !row.is_empty() {
            cells.push(Cell::new(row.remove(0)).fg(Color::Green));
        }
        cells.extend(row.into_iter().map(Cell::new));
        table.add_row(cells);
    }
    println!("{table}");
}

/// Render a distance or weight, with `∞` for unreachable.
pub fn format_weight(weight: Option<f64>) -> String {
    weight.map_or_else(|| "∞".to_string(), |w| w.to_string())
}

/// Print a status message (respects quiet mode).
pub fn status(msg: &str, quiet: bool) {
    if !quiet {
        println!("{msg}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_weight() {
        assert_eq!(format_weight(Some(5.0)), "5");
        assert_eq!(format_weight(Some(-1.5)), "-1.5");
        assert_eq!(format_weight(None), "∞");
    }
}

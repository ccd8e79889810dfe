//! Shared output helpers.

use anyhow::Result;
use chrono::{DateTime, Utc};
use comfy_table::{Cell, Color, ContentArrangement, Table, presets};
use console::style;
use serde::Serialize;

pub fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Section heading in the `── Title ──` style.
pub fn heading(title: &str) {
    println!();
    println!("  {}", style(format!("── {title} ──")).dim());
}

pub fn empty(message: &str) {
    println!();
    println!("  {} {}", style("i").blue().bold(), message);
    println!();
}

/// `label: value`, with `-` for missing values.
pub fn field<T: std::fmt::Display>(label: &str, value: Option<T>) {
    match value {
        Some(v) => println!("  {:<14} {}", format!("{label}:"), style(v).bold()),
        None => println!("  {:<14} {}", format!("{label}:"), style("-").dim()),
    }
}

pub fn table(headers: &[&str]) -> Table {
    let mut table = Table::new();
    table.load_preset(presets::UTF8_FULL_CONDENSED);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(
        headers
            .iter()
            .map(|h| Cell::new(h).fg(Color::White))
            .collect::<Vec<_>>(),
    );
    table
}

/// Render an epoch-milliseconds timestamp as UTC.
pub fn format_epoch_ms(ms: i64) -> String {
    DateTime::<Utc>::from_timestamp_millis(ms)
        .map(|dt| dt.format("%Y-%m-%d %H:%M").to_string())
        .unwrap_or_else(|| ms.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn epoch_ms_formatting() {
        assert_eq!(format_epoch_ms(1_436_159_944_000), "2015-07-06 05:19");
        assert_eq!(format_epoch_ms(0), "1970-01-01 00:00");
    }

    #[test]
    fn table_has_header() {
        let rendered = table(&["Name", "Points"]).to_string();
        assert!(rendered.contains("Name"));
        assert!(rendered.contains("Points"));
    }
}

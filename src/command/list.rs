use anyhow::Result;
use console::style;
use tabled::{
    Table, Tabled,
    settings::{Padding, Style, object::Columns},
};

use braille_spinners::{Spinners, spinners};

use crate::config::Config;

#[derive(Tabled)]
struct SpinnerRow {
    #[tabled(rename = "PREVIEW")]
    preview: String,
    #[tabled(rename = "NAME")]
    name: String,
    #[tabled(rename = "FRAMES")]
    frames: usize,
    #[tabled(rename = "INTERVAL")]
    interval: String,
}

fn render_table(registry: &Spinners, color: bool) -> String {
    let rows: Vec<SpinnerRow> = registry
        .iter()
        .map(|(name, spinner)| {
            let first = spinner.frame(0);
            SpinnerRow {
                preview: if color {
                    style(first).magenta().to_string()
                } else {
                    first.to_string()
                },
                name: name.to_string(),
                frames: spinner.len(),
                interval: format!("{}ms", spinner.interval_ms()),
            }
        })
        .collect();

    let mut table = Table::new(rows);
    table
        .with(Style::blank())
        .modify(Columns::new(0..4), Padding::new(0, 2, 0, 0));
    table.to_string()
}

pub fn run(config: &Config) -> Result<()> {
    let registry = spinners();
    let heading = format!("{} spinners available:", registry.len());
    let heading = if config.color {
        style(heading).bold().to_string()
    } else {
        heading
    };

    println!();
    println!("{heading}");
    println!();
    println!("{}", render_table(registry, config.color));

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_lists_every_spinner() {
        let table = render_table(spinners(), false);
        let lines: Vec<&str> = table.lines().collect();
        // Header plus one row per spinner
        assert_eq!(lines.len(), 23);
        assert!(lines[0].contains("NAME"));
        assert!(lines[1].contains("braille"));
        assert!(lines[1].contains("80ms"));
        assert!(lines[22].contains("blocks"));
    }

    #[test]
    fn test_table_shows_frame_counts() {
        let table = render_table(spinners(), false);
        let columns_row = table
            .lines()
            .find(|l| l.contains("columns"))
            .unwrap()
            .to_string();
        assert!(columns_row.contains("26"));
        assert!(columns_row.contains("60ms"));
    }

    #[test]
    fn test_colored_table_strips_to_plain() {
        console::set_colors_enabled(true);
        let colored = render_table(spinners(), true);
        let plain = render_table(spinners(), false);
        assert_eq!(console::strip_ansi_codes(&colored), plain);
    }
}

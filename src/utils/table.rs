//! Table rendering utilities for CLI outputs.

use regex::Regex;
use std::sync::OnceLock;
use unicode_width::UnicodeWidthStr;

pub struct Column {
    pub header: String,
    pub min_width: usize,
}

impl Column {
    pub fn new(header: &str, min_width: usize) -> Self {
        Self {
            header: header.to_string(),
            min_width,
        }
    }
}

pub struct Table {
    pub columns: Vec<Column>,
    pub rows: Vec<Vec<String>>,
}

/// Visible width: ignores ANSI escapes, counts CJK as double width.
pub fn display_width(s: &str) -> usize {
    static ANSI: OnceLock<Regex> = OnceLock::new();
    let re = ANSI.get_or_init(|| Regex::new(r"\x1B\[[0-9;]*[mK]").expect("valid ANSI pattern"));
    UnicodeWidthStr::width(re.replace_all(s, "").as_ref())
}

impl Table {
    pub fn new(columns: Vec<Column>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    pub fn add_row(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    fn widths(&self) -> Vec<usize> {
        self.columns
            .iter()
            .enumerate()
            .map(|(i, col)| {
                self.rows
                    .iter()
                    .filter_map(|r| r.get(i))
                    .map(|v| display_width(v))
                    .chain([display_width(&col.header), col.min_width])
                    .max()
                    .unwrap_or(0)
            })
            .collect()
    }

    pub fn render(&self) -> String {
        let widths = self.widths();
        let mut out = String::new();

        let push_cell = |out: &mut String, value: &str, width: usize| {
            out.push_str(value);
            out.push_str(&" ".repeat(width.saturating_sub(display_width(value)) + 1));
        };

        // Header
        for (col, w) in self.columns.iter().zip(&widths) {
            push_cell(&mut out, &col.header, *w);
        }
        out.push('\n');

        for w in &widths {
            out.push_str(&"-".repeat(*w));
            out.push(' ');
        }
        out.push('\n');

        // Rows
        for row in &self.rows {
            for (i, w) in widths.iter().enumerate() {
                push_cell(&mut out, row.get(i).map(String::as_str).unwrap_or(""), *w);
            }
            out.push('\n');
        }

        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pads_by_visible_width() {
        let mut t = Table::new(vec![Column::new("car", 0), Column::new("reason", 0)]);
        t.add_row(vec!["0401".into(), "镟轮".into()]);
        t.add_row(vec!["\x1b[32m0402\x1b[0m".into(), "other".into()]);

        let rendered = t.render();
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines.len(), 4);
        assert!(lines[0].starts_with("car  reason"));
        assert_eq!(display_width(lines[2]), display_width(lines[3]));
    }
}

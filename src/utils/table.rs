//! Table rendering for `list` output.
//!
//! Widths are measured with unicode-width so emoji and accented notes line
//! up; cells wider than their column's cap are wrapped with textwrap.

use unicode_width::UnicodeWidthStr;

pub struct Column {
    pub header: String,
    /// Wrap cells longer than this; `None` sizes the column to its content.
    pub max_width: Option<usize>,
}

impl Column {
    pub fn new(header: &str) -> Self {
        Self {
            header: header.to_string(),
            max_width: None,
        }
    }

    pub fn wrapped(header: &str, max_width: usize) -> Self {
        Self {
            header: header.to_string(),
            max_width: Some(max_width.max(1)),
        }
    }
}

pub struct Table {
    pub columns: Vec<Column>,
    pub rows: Vec<Vec<String>>,
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

    fn cell_lines(&self, col: usize, text: &str) -> Vec<String> {
        match self.columns[col].max_width {
            Some(w) if UnicodeWidthStr::width(text) > w => textwrap::wrap(text, w)
                .into_iter()
                .map(|l| l.into_owned())
                .collect(),
            _ => vec![text.to_string()],
        }
    }

    fn widths(&self) -> Vec<usize> {
        self.columns
            .iter()
            .enumerate()
            .map(|(i, col)| {
                let content = self
                    .rows
                    .iter()
                    .flat_map(|r| self.cell_lines(i, r.get(i).map(String::as_str).unwrap_or("")))
                    .map(|l| UnicodeWidthStr::width(l.as_str()))
                    .max()
                    .unwrap_or(0);
                content.max(UnicodeWidthStr::width(col.header.as_str()))
            })
            .collect()
    }

    pub fn render(&self) -> String {
        let widths = self.widths();
        let mut out = String::new();

        // Header
        let header: Vec<String> = self.columns.iter().map(|c| c.header.clone()).collect();
        push_line(&mut out, &header, &widths);
        let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
        push_line(&mut out, &rule, &widths);

        // Rows (a wrapped cell makes the row span several lines)
        for row in &self.rows {
            let cells: Vec<Vec<String>> = (0..self.columns.len())
                .map(|i| self.cell_lines(i, row.get(i).map(String::as_str).unwrap_or("")))
                .collect();
            let height = cells.iter().map(Vec::len).max().unwrap_or(1);

            for line in 0..height {
                let parts: Vec<String> = cells
                    .iter()
                    .map(|c| c.get(line).cloned().unwrap_or_default())
                    .collect();
                push_line(&mut out, &parts, &widths);
            }
        }

        out
    }
}

fn push_line(out: &mut String, cells: &[String], widths: &[usize]) {
    let mut line = String::new();
    for (cell, w) in cells.iter().zip(widths) {
        let pad = w.saturating_sub(UnicodeWidthStr::width(cell.as_str()));
        line.push_str(cell);
        line.push_str(&" ".repeat(pad));
        line.push_str("  ");
    }
    out.push_str(line.trim_end());
    out.push('\n');
}

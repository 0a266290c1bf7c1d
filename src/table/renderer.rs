//! Table renderers
//!
//! [`TableRenderer`] is the seam the printer depends on: load a header and
//! rows, then write newline-delimited text to a sink. [`AsciiTable`] is the
//! renderer used when the caller does not bring one.

use crate::core::{LoggerError, Result};
use std::io::Write;

/// Anything that can lay out a header and rows as text
pub trait TableRenderer {
    fn set_header(&mut self, header: &[String]);
    fn bulk(&mut self, rows: &[Vec<String>]);

    /// Write the formatted table, one `\n`-terminated line per row
    fn render(&mut self, out: &mut dyn Write) -> Result<()>;
}

/// Horizontal alignment of a column
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Alignment {
    #[default]
    Left,
    Center,
    Right,
}

/// Plain-text table with `+---+` borders
///
/// Column widths are measured in `char`s.
#[derive(Debug, Clone)]
pub struct AsciiTable {
    header: Vec<String>,
    rows: Vec<Vec<String>>,
    alignment: Vec<Alignment>,
    borders: bool,
}

impl AsciiTable {
    pub fn new() -> Self {
        Self {
            header: Vec::new(),
            rows: Vec::new(),
            alignment: Vec::new(),
            borders: true,
        }
    }

    /// Per-column alignment; columns without an entry are left-aligned
    pub fn set_alignment(&mut self, alignment: Vec<Alignment>) {
        self.alignment = alignment;
    }

    pub fn set_column_alignment(&mut self, column: usize, alignment: Alignment) {
        if self.alignment.len() <= column {
            self.alignment.resize(column + 1, Alignment::Left);
        }
        self.alignment[column] = alignment;
    }

    pub fn alignment(&self) -> &[Alignment] {
        &self.alignment
    }

    /// Draw borders (default) or separate columns with two spaces
    pub fn set_borders(&mut self, borders: bool) {
        self.borders = borders;
    }

    fn column_count(&self) -> Result<usize> {
        if self.header.is_empty() {
            return Ok(self.rows.iter().map(Vec::len).max().unwrap_or(0));
        }
        if let Some((row, cells)) = self
            .rows
            .iter()
            .enumerate()
            .find(|(_, cells)| cells.len() > self.header.len())
        {
            return Err(LoggerError::table_layout(row, cells.len(), self.header.len()));
        }
        Ok(self.header.len())
    }

    fn widths(&self, columns: usize) -> Vec<usize> {
        let mut widths = vec![0; columns];
        for cells in std::iter::once(&self.header).chain(self.rows.iter()) {
            for (i, cell) in cells.iter().enumerate() {
                widths[i] = widths[i].max(cell.chars().count());
            }
        }
        widths
    }

    fn separator(widths: &[usize]) -> String {
        let mut line = String::from("+");
        for width in widths {
            line.push_str(&"-".repeat(width + 2));
            line.push('+');
        }
        line
    }

    fn format_row(&self, cells: &[String], widths: &[usize]) -> String {
        let aligned: Vec<String> = widths
            .iter()
            .enumerate()
            .map(|(i, width)| {
                let cell = cells.get(i).map(String::as_str).unwrap_or("");
                let alignment = self.alignment.get(i).copied().unwrap_or_default();
                align(cell, *width, alignment)
            })
            .collect();

        if self.borders {
            format!("| {} |", aligned.join(" | "))
        } else {
            aligned.join("  ").trim_end().to_string()
        }
    }
}

impl Default for AsciiTable {
    fn default() -> Self {
        Self::new()
    }
}

impl TableRenderer for AsciiTable {
    fn set_header(&mut self, header: &[String]) {
        self.header = header.to_vec();
    }

    fn bulk(&mut self, rows: &[Vec<String>]) {
        self.rows.extend(rows.iter().cloned());
    }

    fn render(&mut self, out: &mut dyn Write) -> Result<()> {
        let columns = self.column_count()?;
        if columns == 0 {
            return Ok(());
        }
        let widths = self.widths(columns);
        let separator = Self::separator(&widths);

        let mut lines = Vec::with_capacity(self.rows.len() + 4);
        if self.borders {
            lines.push(separator.clone());
        }
        if !self.header.is_empty() {
            lines.push(self.format_row(&self.header, &widths));
            if self.borders {
                lines.push(separator.clone());
            }
        }
        for cells in &self.rows {
            lines.push(self.format_row(cells, &widths));
        }
        if self.borders && !self.rows.is_empty() {
            lines.push(separator);
        }

        for line in lines {
            out.write_all(line.as_bytes())?;
            out.write_all(b"\n")?;
        }
        Ok(())
    }
}

fn align(cell: &str, width: usize, alignment: Alignment) -> String {
    let pad = width.saturating_sub(cell.chars().count());
    match alignment {
        Alignment::Left => format!("{}{}", cell, " ".repeat(pad)),
        Alignment::Right => format!("{}{}", " ".repeat(pad), cell),
        Alignment::Center => {
            let left = pad / 2;
            format!("{}{}{}", " ".repeat(left), cell, " ".repeat(pad - left))
        }
    }
}

//! Structure inspection - a quick look at a spreadsheet before importing it

use super::cell::{cell_display, cell_text, column_letter};
use super::sheet::SheetData;
use crate::config::ImportConfig;
use crate::error::ImportResult;
use calamine::Data;
use std::fmt;

/// Data rows shown after the header
pub const SAMPLE_ROWS: usize = 3;

/// Counts, header labels and the first few data rows of a worksheet
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StructureReport {
    pub rows: usize,
    pub columns: usize,
    pub headers: Vec<String>,
    /// (1-based sheet row number, rendered cells)
    pub samples: Vec<(usize, Vec<String>)>,
}

impl StructureReport {
    pub fn from_sheet(sheet: &SheetData) -> Self {
        let headers: Vec<String> = sheet
            .header()
            .map(|row| {
                row.iter()
                    .map(|cell| match cell {
                        Data::Empty => "None".to_string(),
                        other => cell_text(other).unwrap_or_else(|_| other.to_string()),
                    })
                    .collect()
            })
            .unwrap_or_default();

        let samples: Vec<(usize, Vec<String>)> = sheet
            .data_rows()
            .take(SAMPLE_ROWS)
            .map(|(row_num, row)| (row_num, row.iter().map(cell_display).collect()))
            .collect();

        Self {
            rows: sheet.row_count(),
            columns: sheet.column_count(),
            headers,
            samples,
        }
    }
}

impl fmt::Display for StructureReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "=== SPREADSHEET STRUCTURE ===")?;
        writeln!(f, "Total rows: {}", self.rows)?;
        writeln!(f, "Total columns: {}", self.columns)?;

        writeln!(f)?;
        writeln!(f, "Headers found ({} columns):", self.headers.len())?;
        for (i, header) in self.headers.iter().enumerate() {
            writeln!(f, "  Column {} ({}): '{}'", i + 1, column_letter(i), header)?;
        }

        writeln!(f)?;
        writeln!(f, "First {} data rows:", SAMPLE_ROWS)?;
        for (row_num, cells) in &self.samples {
            writeln!(f, "  Row {}: ({})", row_num, cells.join(", "))?;
        }
        Ok(())
    }
}

/// Read the configured sheet and summarise its layout
pub fn inspect(config: &ImportConfig) -> ImportResult<StructureReport> {
    let sheet = SheetData::open(&config.source, config.sheet.as_deref())?;
    Ok(StructureReport::from_sheet(&sheet))
}

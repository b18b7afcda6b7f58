//! Worksheet loading

use crate::error::{ImportError, ImportResult};
use calamine::{open_workbook_auto, Data, Range, Reader};
use std::path::Path;
use tracing::debug;

/// A worksheet's cells, addressed from A1.
///
/// calamine trims leading empty rows and columns from a range; they are
/// restored here so column indices stay positional. Every row is padded to
/// the sheet width.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SheetData {
    rows: Vec<Vec<Data>>,
    width: usize,
}

impl SheetData {
    /// Load a worksheet (the first one unless `sheet` names another)
    pub fn open<P: AsRef<Path>>(path: P, sheet: Option<&str>) -> ImportResult<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(ImportError::SourceNotFound(path.to_path_buf()));
        }

        let mut workbook = open_workbook_auto(path)?;
        let sheet_names = workbook.sheet_names();

        let sheet_name = match sheet {
            Some(name) => sheet_names
                .iter()
                .find(|s| s.as_str() == name)
                .cloned()
                .ok_or_else(|| ImportError::SheetNotFound(name.to_string()))?,
            None => sheet_names
                .first()
                .cloned()
                .ok_or(ImportError::EmptyWorkbook)?,
        };

        let range = workbook.worksheet_range(&sheet_name)?;
        let data = Self::from_range(&range);
        debug!(
            sheet = %sheet_name,
            rows = data.row_count(),
            columns = data.column_count(),
            "Loaded worksheet"
        );
        Ok(data)
    }

    /// Anchor a calamine range at A1
    pub fn from_range(range: &Range<Data>) -> Self {
        let Some((start_row, start_col)) = range.start() else {
            return Self::default();
        };

        let mut rows: Vec<Vec<Data>> = vec![Vec::new(); start_row as usize];
        for row in range.rows() {
            let mut cells = vec![Data::Empty; start_col as usize];
            cells.extend(row.iter().cloned());
            rows.push(cells);
        }

        Self::from_rows(rows)
    }

    /// Build from rows starting at A1, padding short rows with empty cells
    pub fn from_rows(mut rows: Vec<Vec<Data>>) -> Self {
        let width = rows.iter().map(Vec::len).max().unwrap_or(0);
        for row in &mut rows {
            row.resize(width, Data::Empty);
        }
        Self { rows, width }
    }

    /// Rows from A1 through the last used row
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Columns from A through the last used column
    pub fn column_count(&self) -> usize {
        self.width
    }

    /// First row, if the sheet has any
    pub fn header(&self) -> Option<&[Data]> {
        self.rows.first().map(Vec::as_slice)
    }

    /// Rows after the header, paired with their 1-based sheet row number
    pub fn data_rows(&self) -> impl Iterator<Item = (usize, &[Data])> + '_ {
        self.rows
            .iter()
            .enumerate()
            .skip(1)
            .map(|(idx, row)| (idx + 1, row.as_slice()))
    }
}

//! Fixed-mapping importer: columns A..F in record field order → `demandas`

use super::fold_outcomes;
use crate::config::ImportConfig;
use crate::error::{ImportError, ImportResult};
use crate::excel::{cell_text, SheetData};
use crate::store::{Store, StoreTable};
use crate::types::{DemandRecord, ImportSummary, RowOutcome, FIELD_COUNT};
use calamine::Data;
use std::path::PathBuf;
use tracing::{error, info};

/// Read the six leading cells of a row.
///
/// The row must be at least six columns wide; a narrower sheet makes every
/// row malformed. Error cells are kept as their code.
pub fn extract_fixed(row: &[Data]) -> RowOutcome {
    if row.len() < FIELD_COUNT {
        return RowOutcome::Malformed(format!(
            "row has {} columns, expected at least {}",
            row.len(),
            FIELD_COUNT
        ));
    }

    let mut values: [String; FIELD_COUNT] = Default::default();
    for (slot, cell) in values.iter_mut().zip(row) {
        match cell_text(cell) {
            Ok(text) => *slot = text,
            Err(reason) => return RowOutcome::Malformed(reason),
        }
    }

    RowOutcome::from_record(DemandRecord::from_values(values))
}

/// Importer for the `demandas` table
pub struct FixedImporter {
    source: PathBuf,
    sheet: Option<String>,
    store_path: PathBuf,
}

impl FixedImporter {
    pub fn new(config: &ImportConfig) -> Self {
        Self {
            source: config.source.clone(),
            sheet: config.sheet.clone(),
            store_path: config.fixed_db.clone(),
        }
    }

    /// Run the import, returning the first failure that stops the pass.
    ///
    /// The spreadsheet is read before the store is opened, so a missing
    /// source never creates the database file.
    pub fn run(&self) -> ImportResult<ImportSummary> {
        let sheet = SheetData::open(&self.source, self.sheet.as_deref())?;

        let mut store = Store::open(&self.store_path, StoreTable::Fixed)?;
        let tx = store.begin()?;

        let outcomes = sheet
            .data_rows()
            .map(|(row_num, row)| (row_num, extract_fixed(row)));
        let summary = fold_outcomes(outcomes, |record| tx.insert(record));

        tx.commit()?;

        info!(
            "Import complete: {} rows processed, {} errors",
            summary.imported, summary.errors
        );
        Ok(summary)
    }

    /// Run the import, logging any failure and reporting it as zero counts
    pub fn import(&self) -> ImportSummary {
        match self.run() {
            Ok(summary) => summary,
            Err(ImportError::SourceNotFound(path)) => {
                error!("Source file {} not found!", path.display());
                ImportSummary::default()
            }
            Err(e) => {
                error!("Import failed: {}", e);
                ImportSummary::default()
            }
        }
    }
}

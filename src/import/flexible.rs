//! Flexible-mapping importer: caller-chosen columns → `demandas_flex`

use super::fold_outcomes;
use crate::config::ImportConfig;
use crate::error::ImportResult;
use crate::excel::{cell_text, SheetData};
use crate::store::{Store, StoreTable};
use crate::types::{ColumnMapping, DemandRecord, ImportSummary, RowOutcome, FIELD_COUNT};
use calamine::Data;
use std::path::PathBuf;
use tracing::info;

/// Read each field from its mapped column; columns past the row's end read
/// as empty.
pub fn extract_mapped(row: &[Data], mapping: &ColumnMapping) -> RowOutcome {
    let mut values: [String; FIELD_COUNT] = Default::default();
    for (slot, index) in values.iter_mut().zip(mapping.indices()) {
        if let Some(cell) = row.get(index) {
            match cell_text(cell) {
                Ok(text) => *slot = text,
                Err(reason) => {
                    return RowOutcome::Malformed(format!("column {}: {}", index, reason))
                }
            }
        }
    }

    RowOutcome::from_record(DemandRecord::from_values(values))
}

/// Importer for the `demandas_flex` table
pub struct FlexibleImporter {
    source: PathBuf,
    sheet: Option<String>,
    store_path: PathBuf,
    mapping: ColumnMapping,
}

impl FlexibleImporter {
    /// Importer using the default A..F mapping
    pub fn new(config: &ImportConfig) -> Self {
        Self {
            source: config.source.clone(),
            sheet: config.sheet.clone(),
            store_path: config.flex_db.clone(),
            mapping: ColumnMapping::default(),
        }
    }

    pub fn with_mapping(mut self, mapping: Option<ColumnMapping>) -> Self {
        self.mapping = mapping.unwrap_or_default();
        self
    }

    pub fn mapping(&self) -> &ColumnMapping {
        &self.mapping
    }

    pub fn run(&self) -> ImportResult<ImportSummary> {
        self.mapping.validate()?;

        let sheet = SheetData::open(&self.source, self.sheet.as_deref())?;

        let mut store = Store::open(&self.store_path, StoreTable::Flexible)?;
        let tx = store.begin()?;

        let outcomes = sheet
            .data_rows()
            .map(|(row_num, row)| (row_num, extract_mapped(row, &self.mapping)));
        let summary = fold_outcomes(outcomes, |record| tx.insert(record));

        tx.commit()?;

        info!(
            "Flexible import complete: {} rows imported, {} errors",
            summary.imported, summary.errors
        );
        Ok(summary)
    }
}

//! Spreadsheet → store importers
//!
//! Both importers read every row after the header, turn it into a
//! [`RowOutcome`] and fold the outcomes into an [`ImportSummary`] while
//! inserting through one transaction that commits at the end of the pass.

mod fixed;
mod flexible;

pub use fixed::{extract_fixed, FixedImporter};
pub use flexible::{extract_mapped, FlexibleImporter};

use crate::error::ImportResult;
use crate::types::{DemandRecord, ImportSummary, RowOutcome};
use tracing::{info, warn};

/// A progress line is logged every this many inserted rows
pub const PROGRESS_INTERVAL: usize = 50;

/// Insert every `Record` outcome through `insert`, counting the rest.
///
/// A failed insert counts as an error just like a malformed row.
pub fn fold_outcomes<I, F>(outcomes: I, mut insert: F) -> ImportSummary
where
    I: IntoIterator<Item = (usize, RowOutcome)>,
    F: FnMut(&DemandRecord) -> ImportResult<()>,
{
    let mut summary = ImportSummary::default();

    for (row_num, outcome) in outcomes {
        match outcome {
            RowOutcome::Skipped => summary.skipped += 1,
            RowOutcome::Malformed(reason) => {
                warn!(row = row_num, "Error on row {}: {}", row_num, reason);
                summary.errors += 1;
            }
            RowOutcome::Record(record) => match insert(&record) {
                Ok(()) => {
                    summary.imported += 1;
                    if summary.imported % PROGRESS_INTERVAL == 0 {
                        info!("Processed {} rows...", summary.imported);
                    }
                }
                Err(e) => {
                    warn!(row = row_num, "Error on row {}: {}", row_num, e);
                    summary.errors += 1;
                }
            },
        }
    }

    summary
}

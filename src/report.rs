//! Read-back summary of an import store

use crate::error::ImportResult;
use crate::store::{RecordPreview, Store, StoreTable};
use std::fmt;
use std::path::Path;

/// Demand types listed in the ranking
pub const TOP_DEMANDS: usize = 10;

/// Records shown as examples
pub const SAMPLE_RECORDS: usize = 5;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DemandReport {
    pub total: usize,
    /// (demand type, count), largest count first
    pub top_demands: Vec<(String, usize)>,
    pub samples: Vec<RecordPreview>,
}

impl DemandReport {
    pub fn from_store(store: &Store) -> ImportResult<Self> {
        Ok(Self {
            total: store.count()?,
            top_demands: store.top_demand_types(TOP_DEMANDS)?,
            samples: store.sample(SAMPLE_RECORDS)?,
        })
    }

    /// Open the database read-only and summarise it
    pub fn load<P: AsRef<Path>>(path: P, table: StoreTable) -> ImportResult<Self> {
        let store = Store::open_read_only(path, table)?;
        Self::from_store(&store)
    }
}

impl fmt::Display for DemandReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "=== IMPORTED DATA ===")?;
        writeln!(f, "Total records: {}", self.total)?;

        writeln!(f)?;
        writeln!(f, "Top {} demands:", TOP_DEMANDS)?;
        for (demand, count) in &self.top_demands {
            writeln!(f, "  {}: {}", demand, count)?;
        }

        writeln!(f)?;
        writeln!(f, "Sample records:")?;
        for record in &self.samples {
            writeln!(f, "  Name: {}", record.name)?;
            writeln!(f, "  Contact: {}", record.contact)?;
            writeln!(f, "  Demand: {}", record.demand)?;
            writeln!(f, "  Referral: {}", record.referral)?;
            writeln!(f, "  ---")?;
        }
        Ok(())
    }
}

//! demand-import - spreadsheet rows into SQLite demand records
//!
//! Reads a worksheet (header on the first row), turns each data row into a
//! [`DemandRecord`] and inserts it into a SQLite table, skipping blank rows
//! and counting rows that cannot be read.
//!
//! # Components
//!
//! - Structure inspection of the source sheet ([`excel::inspect`])
//! - Fixed-mapping import, columns A..F → `demandas` ([`import::FixedImporter`])
//! - Flexible-mapping import, custom columns → `demandas_flex`
//!   ([`import::FlexibleImporter`])
//! - Read-back report ([`report::DemandReport`])
//!
//! # Example
//!
//! ```no_run
//! use demand_import::config::ImportConfig;
//! use demand_import::import::FixedImporter;
//!
//! let config = ImportConfig::default();
//! let summary = FixedImporter::new(&config).import();
//!
//! println!("Imported: {}", summary.imported);
//! println!("Errors: {}", summary.errors);
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod excel;
pub mod import;
pub mod logging;
pub mod report;
pub mod store;
pub mod types;

// Re-export commonly used types
pub use error::{ImportError, ImportResult};
pub use types::{ColumnMapping, DemandRecord, ImportSummary, RowOutcome};

//! Run configuration - where to read from and where to write to

use std::path::PathBuf;

pub const DEFAULT_SOURCE: &str = "fonte.xlsx";
pub const DEFAULT_FIXED_DB: &str = "fonte_estruturado.db";
pub const DEFAULT_FLEX_DB: &str = "fonte_flexivel.db";

/// Paths shared by the inspector, importers and reports
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportConfig {
    /// Spreadsheet to read
    pub source: PathBuf,
    /// Worksheet name; `None` reads the first sheet
    pub sheet: Option<String>,
    /// SQLite file for the `demandas` table
    pub fixed_db: PathBuf,
    /// SQLite file for the `demandas_flex` table
    pub flex_db: PathBuf,
}

impl Default for ImportConfig {
    fn default() -> Self {
        Self {
            source: PathBuf::from(DEFAULT_SOURCE),
            sheet: None,
            fixed_db: PathBuf::from(DEFAULT_FIXED_DB),
            flex_db: PathBuf::from(DEFAULT_FLEX_DB),
        }
    }
}

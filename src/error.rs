use std::path::PathBuf;
use thiserror::Error;

pub type ImportResult<T> = Result<T, ImportError>;

#[derive(Error, Debug)]
pub enum ImportError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Workbook error: {0}")]
    Workbook(#[from] calamine::Error),

    #[error("Store error: {0}")]
    Store(#[from] rusqlite::Error),

    #[error("Source file not found: {}", .0.display())]
    SourceNotFound(PathBuf),

    #[error("Workbook has no sheets")]
    EmptyWorkbook,

    #[error("Sheet not found: {0}")]
    SheetNotFound(String),

    #[error("Invalid column mapping: {0}")]
    Mapping(String),
}

impl ImportError {
    /// True when the spreadsheet itself was absent
    pub fn is_source_missing(&self) -> bool {
        matches!(self, ImportError::SourceNotFound(_))
    }
}

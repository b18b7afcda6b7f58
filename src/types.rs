use crate::error::{ImportError, ImportResult};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

//==============================================================================
// Demand Record
//==============================================================================

/// Number of text fields in a demand record
pub const FIELD_COUNT: usize = 6;

/// Store column names, in record field order
pub const FIELD_NAMES: [&str; FIELD_COUNT] = [
    "nome",
    "endereco",
    "contato",
    "demanda",
    "informacoes",
    "encaminhamento",
];

/// One imported case: who asked, where, how to reach them, what they need,
/// free-text notes and where they were referred.
///
/// Every field is trimmed; absent data is the empty string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DemandRecord {
    pub name: String,
    pub address: String,
    pub contact: String,
    pub demand: String,
    pub information: String,
    pub referral: String,
}

impl DemandRecord {
    /// Build a record from raw cell text in field order, trimming each value
    pub fn from_values(values: [String; FIELD_COUNT]) -> Self {
        let [name, address, contact, demand, information, referral] =
            values.map(|v| v.trim().to_string());
        Self {
            name,
            address,
            contact,
            demand,
            information,
            referral,
        }
    }

    /// Fields in store column order
    pub fn fields(&self) -> [&str; FIELD_COUNT] {
        [
            &self.name,
            &self.address,
            &self.contact,
            &self.demand,
            &self.information,
            &self.referral,
        ]
    }

    /// True when every field is empty
    pub fn is_empty(&self) -> bool {
        self.fields().iter().all(|f| f.is_empty())
    }
}

//==============================================================================
// Column Mapping
//==============================================================================

/// Largest column count a spreadsheet can hold (XFD)
pub const MAX_COLUMNS: usize = 16_384;

/// Field → zero-based column index used by the flexible importer.
///
/// Loaded from YAML with the store column names as keys. Indices past the
/// sheet width are allowed and read as empty cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ColumnMapping {
    #[serde(rename = "nome")]
    pub name: usize,
    #[serde(rename = "endereco")]
    pub address: usize,
    #[serde(rename = "contato")]
    pub contact: usize,
    #[serde(rename = "demanda")]
    pub demand: usize,
    #[serde(rename = "informacoes")]
    pub information: usize,
    #[serde(rename = "encaminhamento")]
    pub referral: usize,
}

impl Default for ColumnMapping {
    fn default() -> Self {
        Self {
            name: 0,
            address: 1,
            contact: 2,
            demand: 3,
            information: 4,
            referral: 5,
        }
    }
}

impl ColumnMapping {
    /// Indices in record field order
    pub fn indices(&self) -> [usize; FIELD_COUNT] {
        [
            self.name,
            self.address,
            self.contact,
            self.demand,
            self.information,
            self.referral,
        ]
    }

    /// Reject indices no spreadsheet can address
    pub fn validate(&self) -> ImportResult<()> {
        for (field, index) in FIELD_NAMES.iter().zip(self.indices()) {
            if index >= MAX_COLUMNS {
                return Err(ImportError::Mapping(format!(
                    "'{}' points at column {}, beyond the last spreadsheet column ({})",
                    field,
                    index,
                    MAX_COLUMNS - 1
                )));
            }
        }
        Ok(())
    }

    pub fn from_yaml_str(yaml: &str) -> ImportResult<Self> {
        let mapping: ColumnMapping = serde_yaml::from_str(yaml)?;
        mapping.validate()?;
        Ok(mapping)
    }

    pub fn from_yaml_file<P: AsRef<Path>>(path: P) -> ImportResult<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_yaml_str(&content)
    }
}

//==============================================================================
// Row Outcomes
//==============================================================================

/// Result of turning one spreadsheet row into a record
#[derive(Debug, Clone, PartialEq)]
pub enum RowOutcome {
    /// Row carried data
    Record(DemandRecord),
    /// Every mapped field was empty
    Skipped,
    /// Row could not be read; the reason is logged
    Malformed(String),
}

impl RowOutcome {
    /// Classify a freshly built record
    pub fn from_record(record: DemandRecord) -> Self {
        if record.is_empty() {
            RowOutcome::Skipped
        } else {
            RowOutcome::Record(record)
        }
    }
}

/// Counts produced by one importer pass
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ImportSummary {
    /// Rows inserted
    pub imported: usize,
    /// Rows that failed to read or insert
    pub errors: usize,
    /// All-empty rows (counted in neither of the above)
    pub skipped: usize,
}

impl ImportSummary {
    /// (successCount, errorCount)
    pub fn as_tuple(&self) -> (usize, usize) {
        (self.imported, self.errors)
    }
}

//! Spreadsheet reading
//!
//! - Cell coercion: any cell value → trimmed-ready text
//! - Sheet loading: first sheet (or a named one), anchored at A1
//! - Structure inspection: counts, headers and sample rows

mod cell;
mod inspector;
mod sheet;

pub use cell::{cell_display, cell_text, column_letter};
pub use inspector::{inspect, StructureReport, SAMPLE_ROWS};
pub use sheet::SheetData;

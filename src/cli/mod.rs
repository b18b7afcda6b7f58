//! CLI command handlers

pub mod commands;

pub use commands::{import, import_flex, inspect, report, run};

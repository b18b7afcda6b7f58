use crate::config::ImportConfig;
use crate::error::ImportResult;
use crate::excel;
use crate::import::{FixedImporter, FlexibleImporter};
use crate::report::DemandReport;
use crate::store::StoreTable;
use crate::types::{ColumnMapping, ImportSummary};
use colored::Colorize;
use std::path::{Path, PathBuf};

/// Execute the inspect command - print the sheet layout, never fails
pub fn inspect(config: &ImportConfig) {
    match excel::inspect(config) {
        Ok(structure) => println!("\n{}", structure),
        Err(e) => println!("{} {}", "Error analysing spreadsheet:".red(), e),
    }
}

/// Execute the import command - fixed mapping into `demandas`
pub fn import(config: &ImportConfig) -> ImportSummary {
    let summary = FixedImporter::new(config).import();
    print_summary(&summary, &config.fixed_db, StoreTable::Fixed);
    summary
}

/// Execute the import-flex command.
///
/// Only an unreadable mapping file is returned as an error; import failures
/// are printed.
pub fn import_flex(config: &ImportConfig, mapping_file: Option<PathBuf>) -> ImportResult<()> {
    let mapping = match mapping_file {
        Some(path) => Some(ColumnMapping::from_yaml_file(&path)?),
        None => None,
    };

    let importer = FlexibleImporter::new(config).with_mapping(mapping);
    match importer.run() {
        Ok(summary) => println!(
            "{} {} rows",
            "✅ Flexible import:".bold().green(),
            summary.imported
        ),
        Err(e) => println!("{} {}", "❌ Error:".red(), e),
    }
    Ok(())
}

/// Execute the report command, never fails
pub fn report(config: &ImportConfig, flex: bool) {
    let (path, table) = if flex {
        (&config.flex_db, StoreTable::Flexible)
    } else {
        (&config.fixed_db, StoreTable::Fixed)
    };

    match DemandReport::load(path, table) {
        Ok(report) => println!("\n{}", report),
        Err(e) => println!("{} {}", "Error querying data:".red(), e),
    }
}

/// Execute the default pipeline: inspect → import → report
pub fn run(config: &ImportConfig) {
    println!(
        "{} {}",
        "🚀 Processing spreadsheet".bold().green(),
        config.source.display()
    );

    inspect(config);

    let summary = FixedImporter::new(config).import();

    if summary.imported > 0 {
        report(config, false);
        print_summary(&summary, &config.fixed_db, StoreTable::Fixed);
    } else {
        println!("{}", "❌ No data was imported!".red());
    }
}

fn print_summary(summary: &ImportSummary, db: &Path, table: StoreTable) {
    println!("\n{}", "📊 FINAL SUMMARY:".bold());
    println!("   ✅ Rows imported: {}", summary.imported.to_string().green());
    println!("   ❌ Errors: {}", summary.errors.to_string().red());
    println!("   💾 Database: {}", db.display());
    println!("   📋 Table: {}", table.name());
}

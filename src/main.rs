use clap::{Args, Parser, Subcommand};
use demand_import::cli;
use demand_import::config::{ImportConfig, DEFAULT_FIXED_DB, DEFAULT_FLEX_DB, DEFAULT_SOURCE};
use demand_import::logging::init_logging;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "demand-import")]
#[command(about = "Import demand records from a spreadsheet into SQLite")]
#[command(long_about = "demand-import - spreadsheet rows → SQLite demand records

Reads the first sheet of a workbook (header on row 1, data below), turns
columns A..F into name, address, contact, demand, information and referral,
skips blank rows and inserts the rest.

COMMANDS:
  run         - Inspect, import and report (default)
  inspect     - Show row/column counts, headers and sample rows
  import      - Fixed mapping (A..F) into table 'demandas'
  import-flex - Custom column mapping into table 'demandas_flex'
  report      - Totals, top 10 demands and sample records

EXAMPLES:
  demand-import                                  # fonte.xlsx → fonte_estruturado.db
  demand-import --source cases.xlsx inspect
  demand-import import-flex --mapping mapping.yaml
  demand-import report --flex")]
#[command(version)]
struct Cli {
    #[command(flatten)]
    paths: PathArgs,

    /// Show debug log lines
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Args)]
struct PathArgs {
    /// Spreadsheet to read
    #[arg(long, global = true, env = "DEMAND_SOURCE", default_value = DEFAULT_SOURCE)]
    source: PathBuf,

    /// Worksheet name (defaults to the first sheet)
    #[arg(long, global = true, env = "DEMAND_SHEET")]
    sheet: Option<String>,

    /// SQLite file for the fixed-mapping table
    #[arg(long, global = true, env = "DEMAND_DB", default_value = DEFAULT_FIXED_DB)]
    db: PathBuf,

    /// SQLite file for the flexible-mapping table
    #[arg(long, global = true, env = "DEMAND_FLEX_DB", default_value = DEFAULT_FLEX_DB)]
    flex_db: PathBuf,
}

impl From<PathArgs> for ImportConfig {
    fn from(args: PathArgs) -> Self {
        Self {
            source: args.source,
            sheet: args.sheet,
            fixed_db: args.db,
            flex_db: args.flex_db,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Inspect, import with the fixed mapping, then report
    Run,

    /// Show the spreadsheet's structure without importing
    Inspect,

    /// Import columns A..F into table 'demandas'
    Import,

    #[command(long_about = "Import using a custom column mapping into table 'demandas_flex'.

MAPPING FILE (YAML, zero-based column indices, all keys required):
  nome: 0
  endereco: 1
  contato: 2
  demanda: 3
  informacoes: 4
  encaminhamento: 5

Columns beyond a row's width read as empty.")]
    /// Import using a custom column mapping into table 'demandas_flex'
    ImportFlex {
        /// YAML column mapping (defaults to columns A..F)
        #[arg(short, long)]
        mapping: Option<PathBuf>,
    },

    /// Show totals, top demands and sample records
    Report {
        /// Report on the flexible-mapping table
        #[arg(long)]
        flex: bool,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = ImportConfig::from(cli.paths);

    match cli.command.unwrap_or(Commands::Run) {
        Commands::Run => cli::run(&config),
        Commands::Inspect => cli::inspect(&config),
        Commands::Import => {
            cli::import(&config);
        }
        Commands::ImportFlex { mapping } => cli::import_flex(&config, mapping)?,
        Commands::Report { flex } => cli::report(&config, flex),
    }

    Ok(())
}

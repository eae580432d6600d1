use crate::{commands::Commands, error::CliError, schema_file::SchemaFile};
use clap::Parser;
use connectors::{
    file::csv::settings::CsvFormatOptions,
    sql::sqlite::adapter::{DatabasePath, SqliteAdapter},
};
use engine_core::{executor::LoadSummary, load::create_table};
use model::records::record::RecordType;
use planner::{generator, resolver};
use std::{path::Path, str::FromStr};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

mod commands;
mod error;
mod schema_file;

#[derive(Parser)]
#[command(name = "csvsql", version = "0.1.0", about = "Load CSV files into SQLite tables")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() -> Result<(), CliError> {
    // Initialize logger
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Load {
            schema,
            csv,
            db,
            table,
            format,
        } => {
            let schema_file = SchemaFile::read(&schema)?;
            let record = schema_file.record(table.as_deref());
            let options = format.apply(schema_file.format.clone());
            let summary = load(&record, &csv, &db, &options)?;

            println!(
                "Loaded {} rows into '{}' ({}) in {} ms",
                summary.rows_inserted,
                summary.table,
                db,
                summary.duration.as_millis()
            );
        }
        Commands::Ddl { schema, table } => {
            let schema_file = SchemaFile::read(&schema)?;
            for statement in ddl_statements(&schema_file, table.as_deref())? {
                println!("{statement}");
            }
        }
    }

    Ok(())
}

/// Opens `db`, loads `csv` into a new table and closes the database again.
fn load(
    record: &RecordType,
    csv: &str,
    db: &str,
    options: &CsvFormatOptions,
) -> Result<LoadSummary, CliError> {
    let database = match DatabasePath::from_str(db) {
        Ok(path) => path,
        Err(never) => match never {},
    };
    if database == DatabasePath::InMemory {
        warn!("Loading into an in-memory database; nothing is kept after exit");
    }
    info!("Loading {} into {}", Path::new(csv).display(), database);

    let adapter = SqliteAdapter::open_at(&database)?;
    let summary = create_table(&adapter, record, csv, Some(options))?;
    adapter.close()?;
    Ok(summary)
}

/// The DDL the `load` command would run for the schema file's record.
fn ddl_statements(schema_file: &SchemaFile, table: Option<&str>) -> Result<Vec<String>, CliError> {
    let table = resolver::resolve(&schema_file.record(table))?;
    Ok(generator::generate(&table)
        .statements()
        .map(String::from)
        .collect())
}

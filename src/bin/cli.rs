//! Tabula CLI
//!
//! Inspect and maintain the tables in a data directory.

use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use serde_json::Value;
use tabula::controllers::CustomerController;
use tabula::{Config, Database, Record};
use tracing_subscriber::{fmt, EnvFilter};

/// Tabula CLI
#[derive(Parser, Debug)]
#[command(name = "tabula-cli")]
#[command(about = "CLI for the Tabula JSON record store")]
#[command(version)]
struct Args {
    /// Data directory
    #[arg(short, long, default_value = "./db")]
    data_dir: PathBuf,

    /// Write indented JSON
    #[arg(long)]
    pretty: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print every record of a table
    Records {
        /// The table to read
        table: String,
    },

    /// Print the first record whose field equals a value
    Find {
        /// The table to search
        table: String,

        /// The field to compare
        field: String,

        /// The value, parsed as JSON (falls back to a plain string)
        value: String,
    },

    /// Truncate a table
    Drop {
        /// The table to drop
        table: String,
    },

    /// Create a customer (names are unique)
    AddCustomer {
        /// The customer's name
        name: String,
    },

    /// Print the file backing a table
    Path {
        /// The table to locate
        table: String,
    },
}

fn main() -> ExitCode {
    // Initialize tracing/logging
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("warn,tabula=info"));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    tracing::debug!("Tabula CLI v{}", tabula::VERSION);

    let config = Config::builder()
        .data_dir(&args.data_dir)
        .pretty_json(args.pretty)
        .build();

    let db = match Database::open(config) {
        Ok(db) => Arc::new(db),
        Err(e) => {
            tracing::error!("Failed to open database: {}", e);
            return ExitCode::FAILURE;
        }
    };

    match run(&db, args.command) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(2),
        Err(e) => {
            tracing::error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

/// Execute one command; `Ok(false)` means "nothing found / nothing done"
fn run(db: &Arc<Database>, command: Commands) -> tabula::Result<bool> {
    match command {
        Commands::Records { table } => {
            for record in db.get_records(&table)? {
                print_record(&record)?;
            }
            Ok(true)
        }
        Commands::Find { table, field, value } => {
            let value = serde_json::from_str(&value).unwrap_or(Value::String(value));
            match db.find_by(&table, &field, value)? {
                Some(record) => {
                    print_record(&record)?;
                    Ok(true)
                }
                None => {
                    eprintln!("no record in '{}' with {} matching", table, field);
                    Ok(false)
                }
            }
        }
        Commands::Drop { table } => {
            let dropped = db.drop_table(&table)?;
            if !dropped {
                eprintln!("table '{}' does not exist", table);
            }
            Ok(dropped)
        }
        Commands::AddCustomer { name } => {
            let customers = CustomerController::new(Arc::clone(db));
            match customers.create_customer(&name)? {
                Some(customer) => {
                    println!("{}", customers.display_customer_info(&customer.read()).trim_start());
                    Ok(true)
                }
                None => {
                    eprintln!("customer '{}' already exists", name);
                    Ok(false)
                }
            }
        }
        Commands::Path { table } => {
            println!("{}", db.table_path(&table)?.display());
            Ok(true)
        }
    }
}

fn print_record(record: &Record) -> tabula::Result<()> {
    println!("{}", serde_json::to_string(record)?);
    Ok(())
}

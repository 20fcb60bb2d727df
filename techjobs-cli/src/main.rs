mod format;

use std::collections::HashSet;
use std::path::PathBuf;
use std::process;
use std::time::Instant;

use clap::{Parser, Subcommand};
use techjobs_core::{Delimiter, JobStore, Record};
use tracing::debug;
use tracing_subscriber::{fmt, EnvFilter};

/// Pseudo column name meaning "every column".
const ALL: &str = "all";

#[derive(Parser)]
#[command(name = "techjobs")]
#[command(about = "List and search job listings stored in a CSV file")]
#[command(version)]
struct Cli {
    /// Path to the job listings file
    #[arg(long, env = "TECHJOBS_DATA", default_value = "job_data.csv", global = true)]
    data: PathBuf,

    /// Field delimiter: comma, tab, semicolon or pipe
    #[arg(long, env = "TECHJOBS_DELIMITER", default_value = "comma", global = true)]
    delimiter: Delimiter,

    /// Print records as JSON instead of a table
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the column names
    Columns,

    /// List the distinct values of a column, or every job with "all"
    List {
        /// Column name, or "all" (unless the file has a column named that)
        column: String,
    },

    /// Search for jobs containing a term
    Search {
        /// Text to search for
        term: String,

        /// Restrict search to one column (case-sensitive); omit or "all" to
        /// search every column ignoring case
        #[arg(short, long)]
        column: Option<String>,
    },
}

fn main() {
    let env = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    fmt::Subscriber::builder()
        .with_env_filter(env)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let store = JobStore::with_delimiter(&cli.data, cli.delimiter);

    let result = run(&store, cli.command, cli.json);

    if let Err(e) = result {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

fn run(store: &JobStore, command: Commands, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    // The library degrades to empty results on a failed load; at the command
    // line a missing file should be a hard error instead.
    let start = Instant::now();
    let dataset = store.load()?;
    debug!(
        path = %store.path().display(),
        delimiter = store.delimiter().name(),
        rows = dataset.len(),
        elapsed = ?start.elapsed(),
        "data ready"
    );

    match command {
        Commands::Columns => {
            for column in store.columns() {
                println!("{column}");
            }
            Ok(())
        }
        Commands::List { column } => cmd_list(store, &column, json),
        Commands::Search { term, column } => cmd_search(store, &term, column.as_deref(), json),
    }
}

fn cmd_list(store: &JobStore, column: &str, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    if means_all_columns(store, column) {
        let records: Vec<&Record> = store.all_records().iter().collect();
        return print_records(store, &records, json);
    }

    let values = store.distinct_values(column)?;
    if json {
        println!("{}", serde_json::to_string_pretty(&values)?);
    } else {
        println!("*** All {} values ***", column);
        for value in values {
            println!("{value}");
        }
    }

    Ok(())
}

fn cmd_search(
    store: &JobStore,
    term: &str,
    column: Option<&str>,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let start = Instant::now();
    let records = match column {
        Some(column) if !means_all_columns(store, column) => {
            store.find_by_column_contains(column, term)?
        }
        _ => in_file_order(store, store.find_by_any_column_contains(term)),
    };
    let elapsed = start.elapsed();

    if json {
        return print_records(store, &records, json);
    }

    let total = records.len();
    println!(
        "Found {} job{} (searched {} rows in {:.2?}):\n",
        format::format_number(total),
        if total == 1 { "" } else { "s" },
        format::format_number(store.all_records().len()),
        elapsed,
    );

    if records.is_empty() {
        return Ok(());
    }

    print_records(store, &records, json)
}

/// True when `column` is the "all" pseudo column. A real header column of
/// that name wins.
fn means_all_columns(store: &JobStore, column: &str) -> bool {
    column.eq_ignore_ascii_case(ALL) && !store.columns().iter().any(|c| c == column)
}

/// Order an any-column result set the way the rows appear in the file.
fn in_file_order<'a>(store: &'a JobStore, mut hits: HashSet<&'a Record>) -> Vec<&'a Record> {
    // identical rows are a single set entry, so each is emitted once
    store
        .all_records()
        .iter()
        .filter(|r| hits.remove(r))
        .collect()
}

fn print_records(
    store: &JobStore,
    records: &[&Record],
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    if json {
        println!("{}", serde_json::to_string_pretty(records)?);
    } else {
        format::print_table(store.columns(), records);
    }
    Ok(())
}

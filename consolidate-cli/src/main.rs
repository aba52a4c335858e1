use anyhow::{Context, Result};
use clap::{ArgAction, Parser};
use consolidate_engine::{ConsolidateOptions, DEFAULT_SORT_KEY, consolidate};
use consolidate_ingest::order_by_filename_date;
use std::path::PathBuf;
use tracing::debug;
use tracing_subscriber::EnvFilter;

mod output;

#[derive(Parser, Debug)]
#[command(
    name = "consolidate",
    version = concat!(env!("CARGO_PKG_VERSION"), " (", env!("CONSOLIDATE_BUILD_SHA"), ")"),
    about = "Merge overlapping CSV exports that share a header into one deduplicated CSV"
)]
struct Cli {
    /// CSV files to merge, all with the same header line
    #[arg(required = true)]
    csv_files: Vec<PathBuf>,

    /// Write the result to this file instead of stdout
    #[arg(short, long, value_name = "PATH")]
    out: Option<PathBuf>,

    /// Column to sort rows by (case-insensitive; dates are compared as dates)
    #[arg(short, long, value_name = "COLUMN", default_value = DEFAULT_SORT_KEY)]
    sort_key: String,

    /// Drop rows whose value in this column is empty or whitespace
    #[arg(long, value_name = "COLUMN")]
    require: Option<String>,

    /// Keep the given file order even if every file name embeds a YYYYMMDD date
    #[arg(long)]
    no_auto_order: bool,

    /// Log more to stderr (-v info, -vv debug); RUST_LOG overrides
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let inputs = if cli.no_auto_order {
        cli.csv_files
    } else {
        order_by_filename_date(cli.csv_files)
    };
    debug!(?inputs, "processing order");

    let options = ConsolidateOptions {
        sort_key: Some(cli.sort_key),
        require: cli.require,
    };

    let text = consolidate(&inputs, &options)
        .with_context(|| format!("consolidating {} file(s)", inputs.len()))?;

    output::emit(&text, cli.out.as_deref())
}

fn init_logging(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    // stdout carries the CSV, so logs go to stderr.
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

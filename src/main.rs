//! Command-line driver for the race analytics routines.
//!
//! ```bash
//! race_analytics --records results.json sort --by points --strategy quick
//! race_analytics --records results.json search ham
//! race_analytics --records results.json ledger --mode stack -e "Max=1:30.5" -e "Leo=1:31.2" --pull 1
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser, Subcommand};
use race_analytics::{
    AnalyticsConfig, AnalyticsSession, EntryMode, RaceRecord, RecordField, RecordStore,
    SortStrategy,
};
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Sorting, searching, hashing and tree indexing over race results
#[derive(Parser, Debug)]
#[command(name = "race_analytics", version, about, long_about = None)]
struct Cli {
    /// JSON array of race records
    #[arg(long, short)]
    records: PathBuf,

    /// Optional JSON configuration overriding the sample windows
    #[arg(long, short)]
    config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "warn")]
    log_level: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Sort the leading sample descending by a field
    Sort {
        #[arg(long, default_value = "points")]
        by: RecordField,
        #[arg(long, default_value = "partition")]
        strategy: SortStrategy,
    },
    /// Find a driver by (partial) name
    Search { query: String },
    /// Show the surname hash buckets
    Buckets,
    /// Show the points ranking built from the rank tree
    Ranking,
    /// Sum points recursively over the leading sample
    Sum,
    /// Compute n!
    Factorial {
        #[arg(allow_negative_numbers = true)]
        n: i64,
    },
    /// Add manual entries, then pull some back off the front
    Ledger {
        #[arg(long, default_value = "queue")]
        mode: EntryMode,
        /// Entry as NAME=LAPTIME, repeatable
        #[arg(long = "entry", short = 'e')]
        entries: Vec<String>,
        /// How many entries to pull afterwards
        #[arg(long, default_value_t = 0)]
        pull: usize,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    setup_logging(&cli.log_level);

    let config = match &cli.config {
        Some(path) => AnalyticsConfig::from_path(path)?,
        None => AnalyticsConfig::default(),
    };
    let records = load_records(&cli.records)?;
    let mut session = AnalyticsSession::new(RecordStore::from_records(records), config)?;
    info!(records = session.store().len(), "session ready");

    run(&mut session, cli.command)?;

    let recent = session.recent_activity();
    if !recent.is_empty() {
        eprintln!("\nActivity log:");
        for message in recent {
            eprintln!("  - {}", message);
        }
    }
    Ok(())
}

fn run(session: &mut AnalyticsSession, command: Command) -> anyhow::Result<()> {
    match command {
        Command::Sort { by, strategy } => {
            let report = session.sort_sample(by, strategy);
            println!(
                "{} sort by {} took {:.4} ms",
                report.strategy,
                report.field,
                report.elapsed_ms()
            );
            for (rank, record) in report.records.iter().enumerate() {
                println!(
                    "{:>3}. {:<28} points {:>6} laps {:>4} grid {:>3}",
                    rank + 1,
                    record.name,
                    record.points,
                    record.laps,
                    record.grid
                );
            }
        }
        Command::Search { query } => {
            let record = session.search(&query)?;
            println!("Driver found: {}", record.name);
            println!("{}", serde_json::to_string_pretty(&record)?);
        }
        Command::Buckets => {
            println!("{}", session.bucket_view()?);
        }
        Command::Ranking => {
            for (rank, record) in session.ranking().iter().enumerate() {
                println!("{:>3}. {:<28} {}", rank + 1, record.name, record.points);
            }
        }
        Command::Sum => {
            println!("Total: {}", session.total_points());
        }
        Command::Factorial { n } => {
            println!("Result: {}", session.factorial(n)?);
        }
        Command::Ledger {
            mode,
            entries,
            pull,
        } => {
            for raw in &entries {
                let (name, laptime) = raw
                    .split_once('=')
                    .with_context(|| format!("entry '{}' is not NAME=LAPTIME", raw))?;
                session.add_entry(name.trim(), laptime.trim(), mode)?;
            }
            for _ in 0..pull {
                let entry = session.pull_entry()?;
                println!("Pulled: {}", entry.name);
            }
            println!("Current list (total: {})", session.ledger().len());
            println!("{}", session.ledger().render());
        }
    }
    Ok(())
}

fn load_records(path: &Path) -> anyhow::Result<Vec<RaceRecord>> {
    let json = fs::read_to_string(path)
        .with_context(|| format!("cannot read records from {}", path.display()))?;
    let records: Vec<RaceRecord> = serde_json::from_str(&json)
        .with_context(|| format!("malformed records in {}", path.display()))?;
    Ok(records)
}

fn setup_logging(log_level: &str) {
    let level = log_level
        .parse::<tracing::Level>()
        .unwrap_or(tracing::Level::WARN);

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::from_default_env().add_directive(level.into()))
        .init();
}

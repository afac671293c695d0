//! Prints a date dimension for a year range to stdout.
//!
//! ```text
//! date-dim 1999/2001
//! date-dim --format csv 2000 > dim_date.csv
//! ```

use std::io::{self, BufWriter, Write};
use std::process;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use date_dim::{CalendarDay, FIELD_NAMES, YearRange};
use tracing_subscriber::EnvFilter;

/// Generate a calendar date-dimension table.
#[derive(Parser)]
#[command(name = "date-dim", version, about = "Generate a calendar date-dimension table")]
struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Output format.
    #[arg(short, long, value_enum, default_value_t = Format::Jsonl)]
    format: Format,

    /// Omit the CSV header row.
    #[arg(long)]
    no_header: bool,

    /// Inclusive year range, `START/END` or a single `YEAR`.
    range: YearRange,
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    /// One JSON object per line.
    Jsonl,
    /// Comma-separated values.
    Csv,
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(&cli) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

/// `RUST_LOG` overrides the `-v` count if set.
fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let default_filter = format!("date_dim={level}");

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn run(cli: &Cli) -> Result<()> {
    let range = cli.range;
    tracing::info!(%range, days = range.num_days(), "writing date dimension");

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    match cli.format {
        Format::Jsonl => {
            for day in range.days() {
                serde_json::to_writer(&mut out, &day).context("serializing record")?;
                out.write_all(b"\n")?;
            }
        },
        Format::Csv => {
            if !cli.no_header {
                writeln!(out, "{}", FIELD_NAMES.join(","))?;
            }
            for day in range.days() {
                write_csv_row(&mut out, &day)?;
            }
        },
    }

    out.flush().context("flushing stdout")?;
    Ok(())
}

/// Columns follow `FIELD_NAMES`. No field needs quoting.
fn write_csv_row(out: &mut impl Write, day: &CalendarDay) -> io::Result<()> {
    writeln!(
        out,
        "{},{},{},{},{},{},{},{},{},{},{},{},{},{},{}",
        day,
        day.year(),
        day.quarter(),
        day.month(),
        day.day(),
        day.day_of_year(),
        day.week(),
        day.weekday(),
        day.days_in_month(),
        day.days_in_year(),
        day.is_leap_year(),
        day.is_weekend(),
        day.is_month_end(),
        day.is_quarter_end(),
        day.is_year_end(),
    )
}

//! `horario` CLI — check weekly class schedules from the command line.
//!
//! Every subcommand reads a JSON array of slots
//! (`{"day":"Lunes","startTime":"08:00","endTime":"10:00","room":"A-101"}`)
//! from a file or stdin.
//!
//! ## Usage
//!
//! ```sh
//! # List conflicting slot pairs (exit 1 with --strict if any)
//! horario check -i schedule.json --strict
//!
//! # Validate a new slot against the existing schedule
//! horario validate -i schedule.json --day Lunes --start 08:00 --end 09:30
//!
//! # One-line summary, merged blocks, hour total, or everything at once
//! horario summary -i schedule.json
//! horario merge -i schedule.json
//! horario hours -i schedule.json
//! horario report -i schedule.json -o report.json
//! ```
//!
//! Duration limits come from `--min-minutes` / `--max-minutes`, or the
//! `HORARIO_MIN_MINUTES` / `HORARIO_MAX_MINUTES` environment variables.
//! Log verbosity follows `RUST_LOG`; logs go to stderr.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use schedule_engine::{Day, SlotRules, TimeSlot};
use std::io::{self, Read};
use std::process;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "horario",
    version,
    about = "Weekly class schedule checks: conflicts, validation, totals"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Minimum class length in minutes
    #[arg(long, global = true, env = "HORARIO_MIN_MINUTES")]
    min_minutes: Option<u32>,

    /// Maximum class length in minutes
    #[arg(long, global = true, env = "HORARIO_MAX_MINUTES")]
    max_minutes: Option<u32>,
}

#[derive(Subcommand)]
enum Commands {
    /// Report every pair of overlapping slots
    Check {
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
        /// Exit with status 1 when conflicts are found
        #[arg(long)]
        strict: bool,
    },
    /// Validate a candidate slot against the existing schedule
    Validate {
        /// Existing schedule (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Day of the candidate (e.g. "Lunes", "Miércoles")
        #[arg(long)]
        day: String,
        /// Start time, HH:mm
        #[arg(long)]
        start: String,
        /// End time, HH:mm
        #[arg(long)]
        end: String,
        /// Room label
        #[arg(long, default_value = "")]
        room: String,
    },
    /// Print the one-line weekly summary
    Summary {
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
    },
    /// Merge back-to-back slots into contiguous blocks
    Merge {
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
    },
    /// Print the total weekly hours
    Hours {
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
    },
    /// Summary, blocks, hours, active days and conflicts as one JSON document
    Report {
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let rules = build_rules(cli.min_minutes, cli.max_minutes)?;
    debug!(?rules, "duration rules");

    match cli.command {
        Commands::Check {
            input,
            output,
            strict,
        } => {
            let slots = read_slots(input.as_deref())?;
            let report = schedule_engine::find_conflicts(&slots);
            info!(
                slots = slots.len(),
                conflicts = report.conflicts.len(),
                "conflict scan finished"
            );
            write_output(output.as_deref(), &serde_json::to_string_pretty(&report)?)?;
            if strict && report.has_conflicts {
                process::exit(1);
            }
        }
        Commands::Validate {
            input,
            day,
            start,
            end,
            room,
        } => {
            let existing = read_slots(input.as_deref())?;
            let day: Day = day.parse().context("Invalid --day")?;
            let candidate =
                TimeSlot::new(day, &start, &end, room).context("Invalid candidate slot")?;
            let result = schedule_engine::validate_new_slot_with(&rules, &candidate, &existing);
            println!("{}", serde_json::to_string(&result)?);
            if !result.valid {
                process::exit(1);
            }
        }
        Commands::Summary { input } => {
            let slots = read_slots(input.as_deref())?;
            println!("{}", schedule_engine::summarize(&slots));
        }
        Commands::Merge { input, output } => {
            let slots = read_slots(input.as_deref())?;
            let blocks = schedule_engine::merge_consecutive(&slots);
            write_output(output.as_deref(), &serde_json::to_string_pretty(&blocks)?)?;
        }
        Commands::Hours { input } => {
            let slots = read_slots(input.as_deref())?;
            println!("{:.1}", schedule_engine::weekly_hours(&slots));
        }
        Commands::Report { input, output } => {
            let slots = read_slots(input.as_deref())?;
            let report = schedule_engine::weekly_report(&slots);
            write_output(output.as_deref(), &serde_json::to_string_pretty(&report)?)?;
        }
    }

    Ok(())
}

/// Build duration rules from the optional overrides, defaulting to 30–240.
fn build_rules(min: Option<u32>, max: Option<u32>) -> Result<SlotRules> {
    let defaults = SlotRules::default();
    let rules = SlotRules {
        min_minutes: min.unwrap_or(defaults.min_minutes),
        max_minutes: max.unwrap_or(defaults.max_minutes),
    };
    if rules.min_minutes > rules.max_minutes {
        anyhow::bail!(
            "--min-minutes ({}) must not exceed --max-minutes ({})",
            rules.min_minutes,
            rules.max_minutes
        );
    }
    Ok(rules)
}

fn read_slots(path: Option<&str>) -> Result<Vec<TimeSlot>> {
    let json = read_input(path)?;
    serde_json::from_str(&json).context("Failed to parse schedule JSON")
}

fn read_input(path: Option<&str>) -> Result<String> {
    match path {
        Some(path) => {
            std::fs::read_to_string(path).with_context(|| format!("Failed to read file: {}", path))
        }
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read from stdin")?;
            Ok(buf)
        }
    }
}

fn write_output(path: Option<&str>, content: &str) -> Result<()> {
    match path {
        Some(path) => {
            std::fs::write(path, content)
                .with_context(|| format!("Failed to write file: {}", path))?;
        }
        None => {
            println!("{}", content);
        }
    }
    Ok(())
}

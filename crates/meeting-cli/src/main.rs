//! `meet` CLI — find meeting slots in a day's calendar from the command line.
//!
//! ## Usage
//!
//! ```sh
//! # Find slots for the request in a schedule document (stdin → stdout)
//! cat day.json | meet find
//!
//! # Read from a file and print JSON
//! meet find -i day.json --json
//!
//! # Count every clashing event rather than every clashing person
//! meet find -i day.json --count-by per-event
//!
//! # Load policy options from a file
//! meet find -i day.json --config options.json
//!
//! # Validate a schedule document without running it
//! meet check -i day.json
//! ```

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use std::io::{self, Read};
use tracing_subscriber::EnvFilter;

use meeting_engine::{ConflictCounting, QueryOptions, TrailingWindow};

#[derive(Parser)]
#[command(name = "meet", version, about = "Find meeting slots in a day's calendar")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Log the engine's decisions to stderr
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Find every slot that fits the request
    Find {
        /// Schedule document (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Print the slots as a JSON array
        #[arg(long)]
        json: bool,
        /// JSON file with query options
        #[arg(long)]
        config: Option<String>,
        /// What to do with a short free window at the end of the day
        #[arg(long, value_enum)]
        trailing_window: Option<TrailingArg>,
        /// How to count clashes with optional attendees
        #[arg(long, value_enum)]
        count_by: Option<CountArg>,
    },
    /// Validate a schedule document and summarize it
    Check {
        /// Schedule document (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum TrailingArg {
    RequireDuration,
    Unconditional,
}

impl From<TrailingArg> for TrailingWindow {
    fn from(arg: TrailingArg) -> Self {
        match arg {
            TrailingArg::RequireDuration => TrailingWindow::RequireDuration,
            TrailingArg::Unconditional => TrailingWindow::Unconditional,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum CountArg {
    PerAttendee,
    PerEvent,
}

impl From<CountArg> for ConflictCounting {
    fn from(arg: CountArg) -> Self {
        match arg {
            CountArg::PerAttendee => ConflictCounting::PerAttendee,
            CountArg::PerEvent => ConflictCounting::PerEvent,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Find {
            input,
            json,
            config,
            trailing_window,
            count_by,
        } => {
            let doc = read_input(input.as_deref())?;
            let mut schedule =
                meeting_engine::parse_schedule(&doc).context("Failed to parse schedule")?;

            schedule.options = resolve_options(
                schedule.options,
                config.as_deref(),
                trailing_window,
                count_by,
            )?;
            tracing::debug!(options = ?schedule.options, "running query");

            let slots = schedule.run();

            if json {
                let out = meeting_engine::ranges_to_json(&slots)
                    .context("Failed to render slots as JSON")?;
                println!("{}", out);
            } else if slots.is_empty() {
                println!("no available time");
            } else {
                for slot in &slots {
                    println!("{} ({} min)", slot, slot.duration());
                }
            }
        }
        Commands::Check { input } => {
            let doc = read_input(input.as_deref())?;
            let schedule =
                meeting_engine::parse_schedule(&doc).context("Failed to parse schedule")?;
            println!("Events:     {}", schedule.events.len());
            println!("Attendees:  {}", schedule.attendees().len());
            println!("Mandatory:  {}", schedule.request.mandatory.len());
            println!("Optional:   {}", schedule.request.optional.len());
            println!("Duration:   {} min", schedule.request.duration);
        }
    }

    Ok(())
}

/// Layer the option sources: explicit flags over the config file over the
/// document's own `options`.
fn resolve_options(
    from_document: QueryOptions,
    config: Option<&str>,
    trailing_window: Option<TrailingArg>,
    count_by: Option<CountArg>,
) -> Result<QueryOptions> {
    let mut options = match config {
        Some(path) => {
            let raw = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read config file: {}", path))?;
            QueryOptions::from_json(&raw)
                .with_context(|| format!("Failed to parse config file: {}", path))?
        }
        None => from_document,
    };

    if let Some(arg) = trailing_window {
        options.trailing_window = arg.into();
    }
    if let Some(arg) = count_by {
        options.conflict_counting = arg.into();
    }

    Ok(options)
}

/// Log to stderr so stdout stays clean for results. `RUST_LOG` wins over `-v`.
fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
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

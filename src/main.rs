//! Table Seating CLI
//!
//! Usage:
//!   table-seating seats --shape <SHAPE> --capacity <N> [--style <STYLE>]
//!                       [--width <W> --height <H>]
//!   table-seating preview <REQUEST>
//!   table-seating plan <REQUEST>
//!
//! Requests are TOML or JSON files; results are printed as JSON.

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing_subscriber::EnvFilter;

use table_seating::geometry::{compute_seats_with_config, SeatArrangementStyle, TableShape};
use table_seating::{plan_request_with_config, preview_request, PlanRequest, SeatingConfig};

#[derive(Parser)]
#[command(name = "table-seating")]
#[command(about = "Seat geometry and guest arrangement planning")]
struct Cli {
    /// Standoff presets file (TOML format), merged over the defaults
    #[arg(short, long, global = true)]
    presets: Option<PathBuf>,

    /// Log planner decisions to stderr
    #[arg(short, long, global = true)]
    debug: bool,

    /// Print a readable summary instead of JSON where available
    #[arg(long, global = true)]
    summary: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Compute seat positions for one table
    Seats {
        #[arg(long)]
        shape: TableShape,
        #[arg(long)]
        capacity: u32,
        #[arg(long, default_value = "even")]
        style: SeatArrangementStyle,
        #[arg(long)]
        width: Option<f64>,
        #[arg(long)]
        height: Option<f64>,
    },
    /// Show seat totals and overflow for a request
    Preview {
        /// Request file (TOML or JSON)
        request: PathBuf,
    },
    /// Create tables and assign guests for a request
    Plan {
        /// Request file (TOML or JSON)
        request: PathBuf,
    },
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.debug);

    let mut config = SeatingConfig::new();
    if let Some(path) = &cli.presets {
        config = match config.with_presets_file(path) {
            Ok(c) => c,
            Err(e) => {
                eprintln!("Error loading presets '{}': {}", path.display(), e);
                std::process::exit(1);
            }
        };
    }

    match &cli.command {
        Command::Seats {
            shape,
            capacity,
            style,
            width,
            height,
        } => {
            let seats = compute_seats_with_config(
                *capacity,
                *shape,
                *style,
                *width,
                *height,
                &config.geometry,
            );
            print_json(&seats);
        }
        Command::Preview { request } => {
            let request = load_request(request);
            let preview = preview_request(&request);
            if cli.summary {
                println!("{}", preview);
            } else {
                print_json(&preview);
            }
        }
        Command::Plan { request } => {
            let request = load_request(request);
            let plan = plan_request_with_config(&request, &config);
            if cli.summary {
                println!("{}", plan);
            } else {
                print_json(&plan);
            }
        }
    }
}

fn init_logging(debug: bool) {
    let default_level = if debug { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn load_request(path: &Path) -> PlanRequest {
    match PlanRequest::from_file(path) {
        Ok(request) => request,
        Err(e) => {
            eprintln!("Error reading request '{}': {}", path.display(), e);
            std::process::exit(1);
        }
    }
}

fn print_json<T: Serialize>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(json) => println!("{}", json),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

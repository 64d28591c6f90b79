//! scout360 CLI: seasonal context and dossier helpers for agribusiness leads.
//!
//! Usage: `scout360 resolve --uf MT --segment "produtor de soja" --date 2025-01-15`
//! Logging: `RUST_LOG=debug scout360 ...`

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use chrono::{Local, NaiveDate};
use clap::{Args, Parser, Subcommand};
use serde::Serialize;

use scout360_lib::calendar::{self, SeasonalCalendar, BUILTIN_CALENDAR_ID};
use scout360_lib::estimator::{estimate_revenue, EstimationParams};
use scout360_lib::lead::{LeadData, LeadDossier};
use scout360_lib::masking::{format_cnpj, mask_cpf};

/// Seasonal sales context for agribusiness leads
#[derive(Parser)]
#[command(name = "scout360")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve the seasonal context for a state and segment
    Resolve {
        /// State code (UF), e.g. MT
        #[arg(long)]
        uf: String,
        /// Free-text business segment
        #[arg(long)]
        segment: String,
        #[command(flatten)]
        calendar: CalendarArgs,
    },
    /// Build the dossier view for a lead JSON file
    Dossier {
        /// Path to a lead record as returned by the enrichment backend
        lead: PathBuf,
        #[command(flatten)]
        calendar: CalendarArgs,
    },
    /// Estimate annual revenue from segment and size
    Estimate {
        #[arg(long)]
        segment: String,
        #[arg(long)]
        hectares: Option<f64>,
        /// Head of cattle
        #[arg(long)]
        heads: Option<f64>,
        /// Tons of cane crushed per season
        #[arg(long)]
        crushing_capacity: Option<f64>,
    },
    /// Mask a CPF for display
    MaskCpf { value: Option<String> },
    /// Punctuate a CNPJ for display
    FormatCnpj { value: Option<String> },
    /// List the available calendars
    Calendars,
}

#[derive(Args)]
struct CalendarArgs {
    /// Reference date (YYYY-MM-DD). Defaults to today.
    #[arg(long)]
    date: Option<String>,
    /// Embedded calendar id
    #[arg(long, default_value = BUILTIN_CALENDAR_ID, conflicts_with = "calendar_file")]
    calendar_id: String,
    /// Custom calendar JSON file
    #[arg(long)]
    calendar_file: Option<PathBuf>,
}

impl CalendarArgs {
    fn reference_date(&self) -> Result<NaiveDate, String> {
        match self.date.as_deref() {
            Some(s) => NaiveDate::parse_from_str(s, "%Y-%m-%d")
                .map_err(|e| format!("Invalid date '{}': {}", s, e)),
            None => Ok(Local::now().date_naive()),
        }
    }

    fn calendar(&self) -> Result<SeasonalCalendar, String> {
        let loaded = match &self.calendar_file {
            Some(path) => calendar::load_custom_calendar(path),
            None => calendar::load_calendar(&self.calendar_id),
        };
        loaded.map_err(|e| format!("{} ({})", e, e.recovery_suggestion()))
    }
}

fn print_json<T: Serialize>(value: &T) -> Result<(), String> {
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| format!("Failed to serialize output: {}", e))?;
    println!("{}", json);
    Ok(())
}

fn read_lead(path: &Path) -> Result<LeadData, String> {
    let data = std::fs::read_to_string(path)
        .map_err(|e| format!("Failed to read {}: {}", path.display(), e))?;
    serde_json::from_str(&data).map_err(|e| format!("Failed to parse lead: {}", e))
}

fn run(cli: Cli) -> Result<(), String> {
    match cli.command {
        Commands::Resolve {
            uf,
            segment,
            calendar,
        } => {
            let date = calendar.reference_date()?;
            let cal = calendar.calendar()?;
            print_json(&cal.resolve(&uf, &segment, date))
        }
        Commands::Dossier { lead, calendar } => {
            let date = calendar.reference_date()?;
            let cal = calendar.calendar()?;
            let lead = read_lead(&lead)?;
            print_json(&LeadDossier::build(&lead, &cal, date))
        }
        Commands::Estimate {
            segment,
            hectares,
            heads,
            crushing_capacity,
        } => {
            let params = EstimationParams {
                hectares,
                heads,
                crushing_capacity,
            };
            print_json(&estimate_revenue(&segment, &params))
        }
        Commands::MaskCpf { value } => {
            println!("{}", mask_cpf(value.as_deref()));
            Ok(())
        }
        Commands::FormatCnpj { value } => {
            println!("{}", format_cnpj(value.as_deref()));
            Ok(())
        }
        Commands::Calendars => {
            for (id, name) in calendar::available_calendars() {
                println!("{}\t{}", id, name);
            }
            Ok(())
        }
    }
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    match run(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

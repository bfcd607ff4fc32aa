//! `slotbook` CLI — check working days, list availability, and book meetings
//! from the command line.
//!
//! ## Usage
//!
//! ```sh
//! # Is a date a working day?
//! slotbook check-day --date 2025-03-17
//!
//! # Free slots for a user (empty store when -i is omitted)
//! slotbook slots --user Alice --date 2025-03-17 -i bookings.json
//!
//! # Book a meeting and write the updated store
//! slotbook schedule --user Alice --date 2025-03-17 --hour 10 \
//!     -i bookings.json -o bookings.json
//!
//! # List a user's meetings in booking order
//! slotbook meetings --user Alice -i bookings.json
//!
//! # Override working hours / holidays
//! slotbook --config office.json slots --user Alice --date 2025-03-17
//! ```
//!
//! The bookings file is the JSON form of the store: a map from user to a
//! list of `{"start", "end"}` slots. The config file may set
//! `working_hours` (`{"start": 9, "end": 17}`) and `holidays`
//! (`["2025-01-01", ...]`); omitted fields keep their defaults.

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use slotbook_core::{BookingStore, Scheduler, SchedulerConfig};

#[derive(Parser)]
#[command(
    name = "slotbook",
    version,
    about = "Working-day meeting scheduler CLI"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Config file overriding working hours and holidays (JSON)
    #[arg(long, global = true)]
    config: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Check whether a date is a working day
    CheckDay {
        /// Date to check (YYYY-MM-DD)
        #[arg(long)]
        date: String,
    },
    /// List a user's free hourly slots on a date
    Slots {
        /// User identifier
        #[arg(long)]
        user: String,
        /// Date to query (YYYY-MM-DD)
        #[arg(long)]
        date: String,
        /// Bookings file (starts from an empty store if omitted)
        #[arg(short, long)]
        input: Option<String>,
    },
    /// Book a one-hour meeting
    Schedule {
        /// User identifier
        #[arg(long)]
        user: String,
        /// Meeting date (YYYY-MM-DD)
        #[arg(long)]
        date: String,
        /// Start hour, on the hour (e.g. 10 for 10:00-11:00)
        #[arg(long)]
        hour: u32,
        /// Bookings file (starts from an empty store if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Where to write the updated bookings (not written if omitted)
        #[arg(short, long)]
        output: Option<String>,
    },
    /// List a user's booked meetings in booking order
    Meetings {
        /// User identifier
        #[arg(long)]
        user: String,
        /// Bookings file (starts from an empty store if omitted)
        #[arg(short, long)]
        input: Option<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = load_config(cli.config.as_deref())?;

    match cli.command {
        Commands::CheckDay { date } => {
            let date = parse_date(&date)?;
            let scheduler = Scheduler::new(config);
            if scheduler.is_working_day(date) {
                println!("{} is a working day", date);
            } else {
                println!("{} is a non-working day", date);
            }
        }
        Commands::Slots { user, date, input } => {
            let date = parse_date(&date)?;
            let scheduler = Scheduler::with_store(config, load_store(input.as_deref())?);
            for slot in scheduler.available_slots(&user, date) {
                println!("{}", slot);
            }
        }
        Commands::Schedule {
            user,
            date,
            hour,
            input,
            output,
        } => {
            let date = parse_date(&date)?;
            let mut scheduler = Scheduler::with_store(config, load_store(input.as_deref())?);

            let confirmation = scheduler.schedule_meeting(&user, date, hour)?;
            println!("{}", confirmation);

            if let Some(path) = output {
                let json = serde_json::to_string_pretty(scheduler.store())?;
                std::fs::write(&path, json)
                    .with_context(|| format!("Failed to write bookings file: {}", path))?;
            }
        }
        Commands::Meetings { user, input } => {
            let scheduler = Scheduler::with_store(config, load_store(input.as_deref())?);
            for slot in scheduler.view_meetings(&user) {
                println!("{} from {}", slot.start.date(), slot);
            }
        }
    }

    Ok(())
}

fn parse_date(raw: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .with_context(|| format!("Invalid date '{}' (expected YYYY-MM-DD)", raw))
}

/// Load the scheduler config from `--config`, or fall back to the defaults
/// (9-17 working hours, the built-in holiday set).
fn load_config(path: Option<&str>) -> Result<SchedulerConfig> {
    match path {
        Some(path) => {
            let raw = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read config file: {}", path))?;
            serde_json::from_str(&raw)
                .with_context(|| format!("Failed to parse config file: {}", path))
        }
        None => Ok(SchedulerConfig::default()),
    }
}

/// Load the booking store from `-i`, or start from an empty store.
fn load_store(path: Option<&str>) -> Result<BookingStore> {
    match path {
        Some(path) => {
            let raw = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read bookings file: {}", path))?;
            serde_json::from_str(&raw)
                .with_context(|| format!("Failed to parse bookings file: {}", path))
        }
        None => Ok(BookingStore::new()),
    }
}

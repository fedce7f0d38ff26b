//! `cadence` CLI — define recurring events, expand them into dates, and
//! manage a durable event list.
//!
//! ## Usage
//!
//! ```sh
//! # Expand a rule without storing anything (one ISO date per line)
//! cadence expand --freq daily --start 2024-01-01 --end 2024-01-05
//!
//! # Weekly on Monday and Wednesday
//! cadence expand --freq weekly --start 2024-01-01 --end 2024-03-31 --weekdays mon,wed
//!
//! # The 2nd Tuesday of every month
//! cadence expand --freq monthly --start 2024-01-01 --end 2024-06-30 --nth 2 --on tue
//!
//! # Store an event and inspect it later
//! cadence add --title "Standup" --freq daily --start 2024-01-01 --end 2024-01-31
//! cadence list
//! cadence show <id>
//! cadence rename <id> "Daily standup"
//! cadence remove <id>
//! cadence clear
//! ```

use anyhow::{anyhow, Context, Result};
use cadence_engine::{expand, DayOverflow, Frequency, NthWeekday, RecurrenceRule};
use cadence_store::{CalendarEvent, EventPatch, EventRepository, JsonFileStore, StoreError};
use chrono::{NaiveDate, Weekday};
use clap::{Args, Parser, Subcommand};
use std::path::{Path, PathBuf};
use uuid::Uuid;

#[derive(Parser)]
#[command(
    name = "cadence",
    version,
    about = "Recurring-event rules, expanded into calendar dates"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Path of the event store file
    #[arg(long, global = true, default_value = "cadence-events.json")]
    store: PathBuf,
}

#[derive(Args)]
struct RuleArgs {
    /// Recurrence frequency: daily, weekly, monthly, or yearly
    #[arg(long)]
    freq: Frequency,

    /// Step size in units of the frequency
    #[arg(long, default_value_t = 1)]
    interval: u32,

    /// First date of the recurrence (inclusive), e.g. 2024-01-01
    #[arg(long)]
    start: NaiveDate,

    /// Last date of the recurrence (inclusive); open-ended if omitted
    #[arg(long)]
    end: Option<NaiveDate>,

    /// Weekly only: comma-separated weekdays to repeat on, e.g. mon,wed
    #[arg(long)]
    weekdays: Option<String>,

    /// Monthly/yearly: day of month to repeat on (1-31)
    #[arg(long)]
    month_day: Option<u32>,

    /// Monthly only: which occurrence of --on to pick (1-5)
    #[arg(long, requires = "on")]
    nth: Option<u8>,

    /// Monthly only: the weekday whose nth occurrence to pick
    #[arg(long, requires = "nth")]
    on: Option<String>,

    /// Let an out-of-range day of month spill into the next month instead
    /// of snapping to the month's last day
    #[arg(long)]
    rollover: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Expand a rule and print its dates without storing anything
    Expand {
        #[command(flatten)]
        rule: RuleArgs,
    },
    /// Expand a rule and store it as a new event
    Add {
        #[command(flatten)]
        rule: RuleArgs,
        /// Display title (defaults to "<Frequency> Event")
        #[arg(long)]
        title: Option<String>,
    },
    /// List all stored events
    List,
    /// Print the occurrences of one stored event
    Show { id: Uuid },
    /// Change a stored event's title
    Rename { id: Uuid, title: String },
    /// Delete one stored event
    Remove { id: Uuid },
    /// Delete every stored event
    Clear,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Expand { rule } => {
            let rule = build_rule(&rule)?;
            for date in expand(&rule)? {
                println!("{date}");
            }
        }
        Commands::Add { rule, title } => {
            let rule = build_rule(&rule)?;
            let occurrences = expand(&rule)?;
            let event = CalendarEvent::new(title.unwrap_or_default(), rule, occurrences);
            let mut store = open_store(&cli.store)?;
            println!(
                "Added event {} \"{}\": {} occurrences",
                event.id,
                event.title,
                event.occurrences.len()
            );
            store.add_event(event)?;
        }
        Commands::List => {
            let store = open_store(&cli.store)?;
            for event in store.events()? {
                println!(
                    "{}  {}  {}  {} occurrences  {}",
                    event.id,
                    event.title,
                    event.rule.freq,
                    event.occurrences.len(),
                    event.display_color()
                );
            }
        }
        Commands::Show { id } => {
            let store = open_store(&cli.store)?;
            let event = find_event(&store, id)?;
            for date in &event.occurrences {
                println!("{date}");
            }
        }
        Commands::Rename { id, title } => {
            let mut store = open_store(&cli.store)?;
            store.update_event(
                id,
                EventPatch {
                    title: Some(title.clone()),
                    ..EventPatch::default()
                },
            )?;
            println!("Renamed event {id} to \"{title}\"");
        }
        Commands::Remove { id } => {
            let mut store = open_store(&cli.store)?;
            store.delete_event(id)?;
            println!("Removed event {id}");
        }
        Commands::Clear => {
            let mut store = open_store(&cli.store)?;
            let count = store.events()?.len();
            store.clear_events()?;
            println!("Removed {count} events");
        }
    }

    Ok(())
}

/// Assemble a rule from the command-line flags.
fn build_rule(args: &RuleArgs) -> Result<RecurrenceRule> {
    let mut rule = RecurrenceRule::new(args.freq, args.start);
    rule.interval = args.interval;
    rule.end = args.end;
    if let Some(raw) = args.weekdays.as_deref() {
        rule.weekdays = parse_weekdays(raw)?;
    }
    rule.month_day = args.month_day;
    if let (Some(nth), Some(on)) = (args.nth, args.on.as_deref()) {
        rule.nth_weekday = Some(NthWeekday {
            nth,
            weekday: parse_weekday(on)?,
        });
    }
    if args.rollover {
        rule.overflow = DayOverflow::Rollover;
    }
    Ok(rule)
}

/// Parse a comma-separated weekday list such as `mon,wed` or
/// `monday,wednesday`. Empty entries are skipped.
fn parse_weekdays(raw: &str) -> Result<Vec<Weekday>> {
    let mut weekdays = Vec::new();
    for part in raw.split(',') {
        let trimmed = part.trim();
        if !trimmed.is_empty() {
            weekdays.push(parse_weekday(trimmed)?);
        }
    }
    Ok(weekdays)
}

fn parse_weekday(raw: &str) -> Result<Weekday> {
    raw.parse::<Weekday>()
        .map_err(|_| anyhow!("unknown weekday '{raw}' (expected names like mon or tuesday)"))
}

fn open_store(path: &Path) -> Result<JsonFileStore> {
    JsonFileStore::open(path)
        .with_context(|| format!("Failed to open event store at {}", path.display()))
}

fn find_event(store: &JsonFileStore, id: Uuid) -> Result<CalendarEvent> {
    let event = store
        .events()?
        .into_iter()
        .find(|event| event.id == id)
        .ok_or(StoreError::NotFound(id))?;
    Ok(event)
}

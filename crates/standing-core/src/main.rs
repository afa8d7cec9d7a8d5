//! Faction Standing Simulator
//!
//! Command line front end for inspecting and advancing a campaign's
//! faction standings snapshot.

use clap::{Parser, Subcommand};
use std::fs::{self, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

use standing_core::{
    day_report, default_config_toml, effects_with_toggles, process_contract_outcome, set_regard,
    DayCycleHook, FactionStandingConfig, StandingError, ValidatedConfig,
};
use standing_events::{
    CampaignDate, ContractOutcome, ContractOutcomeEvent, FactionStandings, StandingEvent,
    StandingLevel, StandingsSnapshot,
};

/// Command line arguments for the standing simulator
#[derive(Parser, Debug)]
#[command(name = "standing_sim")]
#[command(about = "Faction standing simulator for a mercenary campaign")]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print or write the default configuration
    InitConfig {
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Print the effects of a standing level as JSON
    Effects {
        /// Standing level ordinal (0 = Outlawed, 8 = Honored)
        #[arg(long)]
        level: u8,
        #[arg(long)]
        config: Option<PathBuf>,
    },
    /// Print every tracked faction in a snapshot
    Show {
        #[arg(long)]
        standings: PathBuf,
    },
    /// Advance a snapshot through a number of days
    Simulate {
        #[arg(long)]
        standings: PathBuf,
        #[arg(long)]
        config: Option<PathBuf>,
        #[arg(long, default_value_t = 30)]
        days: u32,
        /// First day to process; defaults to the day after the snapshot date
        #[arg(long)]
        start: Option<CampaignDate>,
        /// Where to write the result; defaults to overwriting the input
        #[arg(long)]
        out: Option<PathBuf>,
        /// Append raised events to this JSONL file
        #[arg(long)]
        events: Option<PathBuf>,
    },
    /// Apply one contract outcome to a snapshot
    Contract {
        #[arg(long)]
        standings: PathBuf,
        #[arg(long)]
        employer: String,
        #[arg(long)]
        target: Option<String>,
        #[arg(long)]
        outcome: ContractOutcome,
        #[arg(long)]
        date: CampaignDate,
        #[arg(long)]
        config: Option<PathBuf>,
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Set a faction's regard directly
    SetRegard {
        #[arg(long)]
        standings: PathBuf,
        #[arg(long)]
        faction: String,
        #[arg(long, allow_negative_numbers = true)]
        regard: f64,
        #[arg(long)]
        date: CampaignDate,
        #[arg(long)]
        out: Option<PathBuf>,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Args::parse();
    if let Err(e) = run(args.command) {
        tracing::error!("{}", e);
        std::process::exit(1);
    }
}

fn run(command: Command) -> Result<(), StandingError> {
    match command {
        Command::InitConfig { out } => {
            let toml = default_config_toml();
            match out {
                Some(path) => {
                    fs::write(&path, toml)?;
                    println!("Wrote default configuration to {}", path.display());
                }
                None => print!("{}", toml),
            }
        }
        Command::Effects { level, config } => {
            let level = StandingLevel::try_from(level)?;
            let config = load_config(config.as_deref())?;
            let effects = effects_with_toggles(level, &config.get().effects);
            println!("{}", serde_json::to_string_pretty(&effects)?);
        }
        Command::Show { standings } => {
            let snapshot = StandingsSnapshot::load(&standings)?;
            println!("Standings as of {}", snapshot.date);
            for standing in snapshot.standings.iter() {
                println!(
                    "  {:<8} regard {:>7.2}  {:<10} accolade {:<26} censure {}",
                    standing.faction_id,
                    standing.regard,
                    standing.level,
                    standing.accolade_level,
                    standing.censure_level
                );
            }
        }
        Command::Simulate {
            standings,
            config,
            days,
            start,
            out,
            events,
        } => {
            let snapshot = load_or_empty(&standings, start)?;
            let start = start.unwrap_or_else(|| snapshot.date.next_day());
            let hook = DayCycleHook::new(load_config(config.as_deref())?);

            println!("Faction Standing Simulator");
            println!("==========================");
            println!("Start: {}", start);
            println!("Days: {}", days);
            println!("Factions: {}", snapshot.standings.len());
            println!();

            let (result, next) = hook.process_days(snapshot.standings, start, days);
            for line in day_report(&result.events) {
                println!("{}", line);
            }
            if let Some(path) = events {
                append_events(&path, &result.events)?;
            }

            // The snapshot date is the last processed day
            let date = if days == 0 { snapshot.date } else { next.previous_day() };
            let out = out.unwrap_or(standings);
            StandingsSnapshot::new(date, result.standings).save(&out)?;
            println!();
            println!("Saved standings to {}", out.display());
        }
        Command::Contract {
            standings,
            employer,
            target,
            outcome,
            date,
            config,
            out,
        } => {
            let snapshot = load_or_empty(&standings, Some(date))?;
            let config = load_config(config.as_deref())?;
            let mut event = ContractOutcomeEvent::new(employer, outcome, date);
            if let Some(target) = target {
                event = event.against(target);
            }

            let result = process_contract_outcome(snapshot.standings, &event, &config);
            for line in day_report(&result.events) {
                println!("{}", line);
            }
            let out = out.unwrap_or(standings);
            StandingsSnapshot::new(snapshot.date.max(date), result.standings).save(&out)?;
            println!("Saved standings to {}", out.display());
        }
        Command::SetRegard {
            standings,
            faction,
            regard,
            date,
            out,
        } => {
            let snapshot = load_or_empty(&standings, Some(date))?;
            let mut map = snapshot.standings;
            let standing = set_regard(map.take_or_default(&faction), regard, date);
            println!("{} regard set to {:.2} ({})", faction, standing.regard, standing.level);
            map.insert(standing);
            let out = out.unwrap_or(standings);
            StandingsSnapshot::new(snapshot.date.max(date), map).save(&out)?;
        }
    }
    Ok(())
}

/// Loads and activates the configuration, falling back to defaults.
fn load_config(path: Option<&Path>) -> Result<ValidatedConfig, StandingError> {
    let config = match path {
        Some(path) => FactionStandingConfig::from_file(path)?,
        None => FactionStandingConfig::default(),
    };
    Ok(config.activate()?)
}

/// Loads a snapshot, or starts an empty one if the file does not exist yet.
fn load_or_empty(path: &Path, date: Option<CampaignDate>) -> Result<StandingsSnapshot, StandingError> {
    if path.exists() {
        return Ok(StandingsSnapshot::load(path)?);
    }
    tracing::info!("No snapshot at {}, starting empty", path.display());
    let date = date.unwrap_or_else(CampaignDate::start);
    Ok(StandingsSnapshot::new(date, FactionStandings::new()))
}

/// Appends events to a JSONL log.
fn append_events(path: &Path, events: &[StandingEvent]) -> Result<(), StandingError> {
    let file = OpenOptions::new().create(true).append(true).open(path)?;
    let mut writer = BufWriter::new(file);
    for event in events {
        writeln!(writer, "{}", event.to_jsonl()?)?;
    }
    writer.flush()?;
    Ok(())
}

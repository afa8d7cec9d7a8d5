//! Faction standing: regard, levels, decay, escalation and effects.
//!
//! The standing core keeps one regard value per external faction, maps it
//! onto nine standing levels, lets it decay and escalate over time, and
//! exposes the level-derived modifiers other campaign systems consume.
//!
//! # Architecture
//!
//! ```text
//! contract resolution ──▶ contract ──┐
//!                                    ├──▶ regard ──▶ FactionStandings
//! day pipeline ──────────▶ day_cycle ┤
//!                          (decay, escalation)
//!
//! consumers ──▶ effects::get_all_effects(level) ──▶ EffectsSnapshot
//! ```
//!
//! Every operation takes standings by value and returns the next value.
//! Nothing here performs I/O except snapshot loading in the CLI.
//!
//! # Modules
//!
//! - [`regard`]: Signed regard adjustments and GM overrides
//! - [`decay`]: Daily pull toward zero
//! - [`escalation`]: Monthly accolade and censure ladders
//! - [`effects`]: Level-keyed modifier tables
//! - [`contract`]: Contract outcome translation
//! - [`day_cycle`]: Daily orchestration
//! - [`report`]: Day report text
//! - [`config`]: TOML configuration and validation

pub mod config;
pub mod contract;
pub mod day_cycle;
pub mod decay;
pub mod effects;
pub mod escalation;
pub mod regard;
pub mod report;

// Re-export config types
pub use config::{
    default_config_toml, ConfigError, DecayConfig, EscalationConfig, FactionStandingConfig,
    GeneralConfig, ValidatedConfig,
};

// Re-export operation entry points
pub use contract::{
    contract_constants, employer_delta, process_contract_outcome, target_delta,
    ContractOutcomeResult,
};
pub use day_cycle::{DayCycleHook, DayCycleResult};
pub use decay::{process_regard_decay, DEFAULT_DECAY_RATE};
pub use effects::{
    effects_with_toggles, get_all_effects, EffectToggles, EffectsSnapshot, RecruitmentBundle,
};
pub use escalation::{
    accolade_eligible, censure_eligible, process_escalation, EscalationOutcome,
    ACCOLADE_MIN_LEVEL,
};
pub use regard::{adjust_regard, enforce_invariants, set_regard};
pub use report::{day_report, describe_event};

pub use standing_events::get_standing_level;

/// Errors surfaced by the command line front end.
#[derive(Debug, thiserror::Error)]
pub enum StandingError {
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),
    #[error("Persistence error: {0}")]
    Persist(#[from] standing_events::PersistError),
    #[error("Date error: {0}")]
    Date(#[from] standing_events::ParseDateError),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("{0}")]
    Level(#[from] standing_events::LevelOutOfRange),
}

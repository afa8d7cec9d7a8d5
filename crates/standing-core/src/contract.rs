//! Contract Outcomes
//!
//! Translates a resolved contract into regard changes for the employer and,
//! optionally, the faction the campaign acted against.

use standing_events::{
    reasons, ContractOutcome, ContractOutcomeEvent, FactionStanding, FactionStandings,
    StandingChangeEvent, StandingEvent,
};

use crate::config::ValidatedConfig;
use crate::regard::adjust_regard;

/// Constants for contract-driven regard changes
pub mod contract_constants {
    /// Employer regard change for a successful contract
    pub const SUCCESS_DELTA: f64 = 1.875;
    /// Employer regard change for a partially successful contract
    pub const PARTIAL_DELTA: f64 = 0.625;
    /// Employer regard change for a failed contract
    pub const FAILURE_DELTA: f64 = -1.25;
    /// Employer regard change for a breached contract
    pub const BREACH_DELTA: f64 = -5.625;
}

/// Fixed employer regard change for an outcome.
pub fn employer_delta(outcome: ContractOutcome) -> f64 {
    use self::contract_constants::*;
    match outcome {
        ContractOutcome::Success => SUCCESS_DELTA,
        ContractOutcome::Partial => PARTIAL_DELTA,
        ContractOutcome::Failure => FAILURE_DELTA,
        ContractOutcome::Breach => BREACH_DELTA,
    }
}

/// Regard change for the opposed faction: always negative, `ratio` of the
/// employer's magnitude.
pub fn target_delta(outcome: ContractOutcome, ratio: f64) -> f64 {
    -(employer_delta(outcome).abs() * ratio)
}

/// Standings after a contract outcome, with any level-change notifications.
#[derive(Debug, Clone, PartialEq)]
pub struct ContractOutcomeResult {
    pub standings: FactionStandings,
    pub events: Vec<StandingEvent>,
}

/// Applies a contract outcome to the standings map.
///
/// Only the employer and the distinct target (if any) are replaced; every
/// other entry is returned as it was. With the feature disabled the map is
/// returned untouched.
pub fn process_contract_outcome(
    mut standings: FactionStandings,
    event: &ContractOutcomeEvent,
    config: &ValidatedConfig,
) -> ContractOutcomeResult {
    let mut events = Vec::new();
    if !config.is_enabled() {
        return ContractOutcomeResult { standings, events };
    }

    let general = &config.get().standing;
    let multiplier = general.regard_multiplier;

    tracing::info!(
        employer = %event.employer_faction_id,
        target = ?event.target_faction_id,
        outcome = %event.outcome,
        "applying contract outcome"
    );

    let employer = standings.take_or_default(&event.employer_faction_id);
    let employer = adjust_regard(
        employer,
        employer_delta(event.outcome),
        event.outcome.reason(),
        event.date,
        multiplier,
    );
    push_level_change(&employer, &mut events);
    standings.insert(employer);

    let target_id = event
        .target_faction_id
        .as_deref()
        .filter(|id| *id != event.employer_faction_id);
    if let Some(target_id) = target_id {
        let target = standings.take_or_default(target_id);
        let target = adjust_regard(
            target,
            target_delta(event.outcome, general.target_delta_ratio),
            reasons::ACTED_AGAINST,
            event.date,
            multiplier,
        );
        push_level_change(&target, &mut events);
        standings.insert(target);
    }

    ContractOutcomeResult { standings, events }
}

fn push_level_change(standing: &FactionStanding, events: &mut Vec<StandingEvent>) {
    if let Some(change) = standing.last_change().filter(|c| c.level_changed()) {
        events.push(StandingEvent::StandingChange(StandingChangeEvent {
            faction_id: standing.faction_id.clone(),
            date: change.date,
            previous_level: change.previous_level,
            new_level: change.new_level,
            regard: change.new_regard,
            reason: change.reason.clone(),
        }));
    }
}

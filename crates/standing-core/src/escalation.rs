//! Escalation Ladders
//!
//! Monthly advancement of the accolade and censure ladders.
//!
//! Each ladder only ever moves one step up, on the first day of a month, and
//! only while its condition holds:
//!
//! - accolade: standing level is [`StandingLevel::Warm`] or better
//! - censure: regard is below zero
//!
//! Neither ladder regresses. Once a ladder reaches its top step it stays
//! there for the life of the campaign.
//!
//! Payloads attached to accolade steps are reported in the returned events
//! and never applied here.

use standing_events::{
    AccoladeEvent, CampaignDate, CensureEvent, FactionStanding, StandingEvent, StandingLevel,
};

use crate::config::EscalationConfig;

/// Minimum standing level at which accolades accrue.
pub const ACCOLADE_MIN_LEVEL: StandingLevel = StandingLevel::Warm;

/// Result of one escalation check for one faction.
#[derive(Debug, Clone, PartialEq)]
pub struct EscalationOutcome {
    pub standing: FactionStanding,
    /// At most one accolade and one censure event
    pub events: Vec<StandingEvent>,
}

impl EscalationOutcome {
    fn unchanged(standing: FactionStanding) -> Self {
        Self {
            standing,
            events: Vec::new(),
        }
    }
}

/// Returns true if the standing currently qualifies for an accolade step.
pub fn accolade_eligible(standing: &FactionStanding) -> bool {
    standing.level >= ACCOLADE_MIN_LEVEL && !standing.accolade_level.is_max()
}

/// Returns true if the standing currently qualifies for a censure step.
pub fn censure_eligible(standing: &FactionStanding) -> bool {
    standing.regard < 0.0 && !standing.censure_level.is_max()
}

/// Runs the monthly escalation check.
///
/// On any day other than the first of a month this returns the standing
/// unchanged with no events.
pub fn process_escalation(
    mut standing: FactionStanding,
    date: CampaignDate,
    config: &EscalationConfig,
) -> EscalationOutcome {
    if !date.is_first_of_month() {
        return EscalationOutcome::unchanged(standing);
    }

    let mut events = Vec::new();

    if config.accolades_enabled && accolade_eligible(&standing) {
        let previous = standing.accolade_level;
        if let Some(next) = previous.next() {
            standing.accolade_level = next;
            tracing::info!(
                faction = %standing.faction_id,
                accolade = %next,
                "accolade awarded"
            );
            events.push(StandingEvent::Accolade(AccoladeEvent {
                faction_id: standing.faction_id.clone(),
                date,
                previous_level: previous,
                new_level: next,
                payload: next.payload(),
            }));
        }
    }

    if config.censures_enabled && censure_eligible(&standing) {
        let previous = standing.censure_level;
        if let Some(next) = previous.next() {
            standing.censure_level = next;
            tracing::info!(
                faction = %standing.faction_id,
                censure = %next,
                "censure issued"
            );
            events.push(StandingEvent::Censure(CensureEvent {
                faction_id: standing.faction_id.clone(),
                date,
                previous_level: previous,
                new_level: next,
            }));
        }
    }

    EscalationOutcome { standing, events }
}

//! Event Types
//!
//! Inputs raised by contract resolution and notifications surfaced to the
//! day report.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::level::{AccoladeLevel, AccoladePayload, CensureLevel, StandingLevel};
use crate::standing::reasons;
use crate::CampaignDate;

/// How a contract ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContractOutcome {
    Success,
    Partial,
    Failure,
    Breach,
}

impl ContractOutcome {
    pub fn all() -> &'static [ContractOutcome] {
        &[
            ContractOutcome::Success,
            ContractOutcome::Partial,
            ContractOutcome::Failure,
            ContractOutcome::Breach,
        ]
    }

    /// History reason recorded on the employer's standing.
    pub fn reason(self) -> &'static str {
        match self {
            ContractOutcome::Success => reasons::CONTRACT_SUCCESS,
            ContractOutcome::Partial => reasons::CONTRACT_PARTIAL,
            ContractOutcome::Failure => reasons::CONTRACT_FAILURE,
            ContractOutcome::Breach => reasons::CONTRACT_BREACH,
        }
    }
}

impl fmt::Display for ContractOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContractOutcome::Success => write!(f, "success"),
            ContractOutcome::Partial => write!(f, "partial"),
            ContractOutcome::Failure => write!(f, "failure"),
            ContractOutcome::Breach => write!(f, "breach"),
        }
    }
}

/// Error returned for an unknown contract outcome name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown contract outcome: '{0}', expected success, partial, failure or breach")]
pub struct ParseOutcomeError(pub String);

impl FromStr for ContractOutcome {
    type Err = ParseOutcomeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "success" => Ok(ContractOutcome::Success),
            "partial" => Ok(ContractOutcome::Partial),
            "failure" => Ok(ContractOutcome::Failure),
            "breach" => Ok(ContractOutcome::Breach),
            _ => Err(ParseOutcomeError(s.to_string())),
        }
    }
}

/// Raised by contract resolution when a contract ends.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContractOutcomeEvent {
    pub employer_faction_id: String,
    /// Faction the campaign acted against, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_faction_id: Option<String>,
    pub outcome: ContractOutcome,
    pub date: CampaignDate,
}

impl ContractOutcomeEvent {
    pub fn new(employer_faction_id: impl Into<String>, outcome: ContractOutcome, date: CampaignDate) -> Self {
        Self {
            employer_faction_id: employer_faction_id.into(),
            target_faction_id: None,
            outcome,
            date,
        }
    }

    pub fn against(mut self, target_faction_id: impl Into<String>) -> Self {
        self.target_faction_id = Some(target_faction_id.into());
        self
    }
}

/// A faction moved to a different standing level.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StandingChangeEvent {
    pub faction_id: String,
    pub date: CampaignDate,
    pub previous_level: StandingLevel,
    pub new_level: StandingLevel,
    pub regard: f64,
    pub reason: String,
}

/// A faction advanced the campaign one step on the accolade ladder.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccoladeEvent {
    pub faction_id: String,
    pub date: CampaignDate,
    pub previous_level: AccoladeLevel,
    pub new_level: AccoladeLevel,
    /// Must be applied by the receiver, never by the standing core
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payload: Option<AccoladePayload>,
}

/// A faction advanced the campaign one step on the censure ladder.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CensureEvent {
    pub faction_id: String,
    pub date: CampaignDate,
    pub previous_level: CensureLevel,
    pub new_level: CensureLevel,
}

/// Notification surfaced to the day report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum StandingEvent {
    StandingChange(StandingChangeEvent),
    Accolade(AccoladeEvent),
    Censure(CensureEvent),
}

impl StandingEvent {
    pub fn faction_id(&self) -> &str {
        match self {
            StandingEvent::StandingChange(e) => &e.faction_id,
            StandingEvent::Accolade(e) => &e.faction_id,
            StandingEvent::Censure(e) => &e.faction_id,
        }
    }

    pub fn date(&self) -> CampaignDate {
        match self {
            StandingEvent::StandingChange(e) => e.date,
            StandingEvent::Accolade(e) => e.date,
            StandingEvent::Censure(e) => e.date,
        }
    }

    /// Serializes the event as a single JSON line.
    pub fn to_jsonl(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Deserializes an event from a JSON line.
    pub fn from_jsonl(line: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(line)
    }
}

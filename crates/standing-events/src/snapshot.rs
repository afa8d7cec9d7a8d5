//! Snapshot Types
//!
//! The persisted form of a campaign's faction standings.
//!
//! Snapshots are plain JSON so they can be diffed, inspected and edited by
//! hand. Loading re-checks every invariant and refuses corrupted state.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::standing::{FactionStandings, InvariantViolation};
use crate::CampaignDate;

/// Current snapshot format version.
pub const SNAPSHOT_VERSION: u32 = 1;

/// Errors that can occur while reading or writing snapshots.
#[derive(Debug, thiserror::Error)]
pub enum PersistError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("unsupported snapshot version {found}, expected {expected}")]
    UnsupportedVersion { found: u32, expected: u32 },
    #[error("invariant violation: {0}")]
    InvariantViolation(#[from] InvariantViolation),
}

/// Faction standings of one campaign at a point in time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StandingsSnapshot {
    pub version: u32,
    /// Campaign date the standings are current as of
    pub date: CampaignDate,
    pub standings: FactionStandings,
}

impl StandingsSnapshot {
    pub fn new(date: CampaignDate, standings: FactionStandings) -> Self {
        Self {
            version: SNAPSHOT_VERSION,
            date,
            standings,
        }
    }

    /// Serializes the snapshot as pretty-printed JSON.
    pub fn to_json_pretty(&self) -> Result<String, PersistError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Parses and validates a snapshot from JSON.
    pub fn from_json(json: &str) -> Result<Self, PersistError> {
        let snapshot: StandingsSnapshot = serde_json::from_str(json)?;
        if snapshot.version != SNAPSHOT_VERSION {
            return Err(PersistError::UnsupportedVersion {
                found: snapshot.version,
                expected: SNAPSHOT_VERSION,
            });
        }
        snapshot.standings.check_invariants()?;
        Ok(snapshot)
    }

    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), PersistError> {
        fs::write(path, self.to_json_pretty()?)?;
        Ok(())
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, PersistError> {
        let content = fs::read_to_string(path)?;
        Self::from_json(&content)
    }
}

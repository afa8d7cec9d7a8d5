//! Faction Standing Records
//!
//! Per-faction regard, derived level, escalation ladders and the append-only
//! history of every regard change.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::level::{
    get_standing_level, AccoladeLevel, CensureLevel, StandingLevel, DEFAULT_REGARD, MAX_REGARD,
    MIN_REGARD,
};
use crate::CampaignDate;

/// Well-known reasons recorded on regard changes.
pub mod reasons {
    /// Daily pull toward zero
    pub const DECAY: &str = "decay";
    /// Contract completed successfully
    pub const CONTRACT_SUCCESS: &str = "contract_success";
    /// Contract partially completed
    pub const CONTRACT_PARTIAL: &str = "contract_partial";
    /// Contract failed
    pub const CONTRACT_FAILURE: &str = "contract_failure";
    /// Contract breached
    pub const CONTRACT_BREACH: &str = "contract_breach";
    /// Campaign acted against this faction while working for another
    pub const ACTED_AGAINST: &str = "acted_against";
    /// Manual correction by the game master
    pub const GM_OVERRIDE: &str = "gm_override";
}

/// One immutable entry in a faction's regard history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegardChangeEvent {
    pub date: CampaignDate,
    /// Attempted change, after any multiplier, before clamping
    pub delta: f64,
    pub reason: String,
    pub previous_regard: f64,
    pub new_regard: f64,
    pub previous_level: StandingLevel,
    pub new_level: StandingLevel,
}

impl RegardChangeEvent {
    pub fn level_changed(&self) -> bool {
        self.previous_level != self.new_level
    }
}

/// A violated invariant on a standing record.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum InvariantViolation {
    #[error("faction {faction_id}: regard {regard} outside [-60, 60]")]
    RegardOutOfRange { faction_id: String, regard: f64 },
    #[error("faction {faction_id}: stored level {stored} does not match regard {regard} (expected {expected})")]
    LevelMismatch {
        faction_id: String,
        regard: f64,
        stored: StandingLevel,
        expected: StandingLevel,
    },
    #[error("standings map key '{key}' holds faction '{faction_id}'")]
    KeyMismatch { key: String, faction_id: String },
}

/// Standing of the campaign with one external faction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FactionStanding {
    pub faction_id: String,
    /// Always within `[MIN_REGARD, MAX_REGARD]`
    pub regard: f64,
    /// Always equal to `get_standing_level(regard)`
    pub level: StandingLevel,
    #[serde(default)]
    pub accolade_level: AccoladeLevel,
    #[serde(default)]
    pub censure_level: CensureLevel,
    #[serde(default)]
    pub last_change_date: Option<CampaignDate>,
    #[serde(default)]
    pub history: Vec<RegardChangeEvent>,
}

impl FactionStanding {
    /// Creates the default standing for a faction seen for the first time.
    pub fn new(faction_id: impl Into<String>) -> Self {
        Self {
            faction_id: faction_id.into(),
            regard: DEFAULT_REGARD,
            level: get_standing_level(DEFAULT_REGARD),
            accolade_level: AccoladeLevel::None,
            censure_level: CensureLevel::None,
            last_change_date: None,
            history: Vec::new(),
        }
    }

    /// Sets regard directly, keeping the level in step. Intended for setup and tests.
    pub fn with_regard(mut self, regard: f64) -> Self {
        self.regard = crate::level::clamp_regard(regard);
        self.level = get_standing_level(self.regard);
        self
    }

    pub fn with_ladders(mut self, accolade: AccoladeLevel, censure: CensureLevel) -> Self {
        self.accolade_level = accolade;
        self.censure_level = censure;
        self
    }

    /// Checks the regard range and the regard/level agreement.
    ///
    /// Ladder ranges are enforced by the level types themselves.
    pub fn check_invariants(&self) -> Result<(), InvariantViolation> {
        if !(MIN_REGARD..=MAX_REGARD).contains(&self.regard) {
            return Err(InvariantViolation::RegardOutOfRange {
                faction_id: self.faction_id.clone(),
                regard: self.regard,
            });
        }
        let expected = get_standing_level(self.regard);
        if self.level != expected {
            return Err(InvariantViolation::LevelMismatch {
                faction_id: self.faction_id.clone(),
                regard: self.regard,
                stored: self.level,
                expected,
            });
        }
        Ok(())
    }

    /// Returns the most recent history entry.
    pub fn last_change(&self) -> Option<&RegardChangeEvent> {
        self.history.last()
    }
}

/// All faction standings of one campaign, keyed and iterated by faction id.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FactionStandings {
    standings: BTreeMap<String, FactionStanding>,
}

impl FactionStandings {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, faction_id: &str) -> Option<&FactionStanding> {
        self.standings.get(faction_id)
    }

    /// Regard toward a faction; untracked factions read as neutral.
    pub fn regard(&self, faction_id: &str) -> f64 {
        self.get(faction_id).map(|s| s.regard).unwrap_or(DEFAULT_REGARD)
    }

    /// Level of a faction; untracked factions read as neutral.
    pub fn level(&self, faction_id: &str) -> StandingLevel {
        self.get(faction_id)
            .map(|s| s.level)
            .unwrap_or_else(|| get_standing_level(DEFAULT_REGARD))
    }

    /// Removes and returns a faction's standing, creating the default if absent.
    pub fn take_or_default(&mut self, faction_id: &str) -> FactionStanding {
        self.standings
            .remove(faction_id)
            .unwrap_or_else(|| FactionStanding::new(faction_id))
    }

    /// Inserts a standing under its own faction id, replacing any previous entry.
    pub fn insert(&mut self, standing: FactionStanding) -> Option<FactionStanding> {
        self.standings.insert(standing.faction_id.clone(), standing)
    }

    /// Returns the map with a default entry for `faction_id` if none existed.
    pub fn ensure(mut self, faction_id: &str) -> Self {
        if !self.standings.contains_key(faction_id) {
            self.insert(FactionStanding::new(faction_id));
        }
        self
    }

    /// Faction ids in ascending order.
    pub fn faction_ids(&self) -> impl Iterator<Item = &str> {
        self.standings.keys().map(String::as_str)
    }

    /// Standings in ascending faction id order.
    pub fn iter(&self) -> impl Iterator<Item = &FactionStanding> {
        self.standings.values()
    }

    pub fn len(&self) -> usize {
        self.standings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.standings.is_empty()
    }

    /// Checks every record and that each key matches its record's faction id.
    pub fn check_invariants(&self) -> Result<(), InvariantViolation> {
        for (key, standing) in &self.standings {
            if key != &standing.faction_id {
                return Err(InvariantViolation::KeyMismatch {
                    key: key.clone(),
                    faction_id: standing.faction_id.clone(),
                });
            }
            standing.check_invariants()?;
        }
        Ok(())
    }
}

impl FromIterator<FactionStanding> for FactionStandings {
    fn from_iter<I: IntoIterator<Item = FactionStanding>>(iter: I) -> Self {
        let mut standings = FactionStandings::new();
        for standing in iter {
            standings.insert(standing);
        }
        standings
    }
}

impl IntoIterator for FactionStandings {
    type Item = FactionStanding;
    type IntoIter = std::collections::btree_map::IntoValues<String, FactionStanding>;

    fn into_iter(self) -> Self::IntoIter {
        self.standings.into_values()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_standing_is_neutral() {
        let standing = FactionStanding::new("FS");
        assert_eq!(standing.regard, 0.0);
        assert_eq!(standing.level, StandingLevel::Neutral);
        assert_eq!(standing.accolade_level, AccoladeLevel::None);
        assert_eq!(standing.censure_level, CensureLevel::None);
        assert!(standing.history.is_empty());
        assert!(standing.last_change_date.is_none());
    }

    #[test]
    fn test_with_regard_keeps_level_in_step() {
        let standing = FactionStanding::new("LA").with_regard(42.0);
        assert_eq!(standing.level, StandingLevel::Allied);
        assert!(standing.check_invariants().is_ok());
    }

    #[test]
    fn test_invariant_violations() {
        let mut standing = FactionStanding::new("DC");
        standing.regard = 75.0;
        assert!(matches!(
            standing.check_invariants(),
            Err(InvariantViolation::RegardOutOfRange { .. })
        ));

        let mut standing = FactionStanding::new("DC");
        standing.regard = 30.0;
        assert!(matches!(
            standing.check_invariants(),
            Err(InvariantViolation::LevelMismatch { .. })
        ));
    }

    #[test]
    fn test_lazy_reads_default_to_neutral() {
        let standings = FactionStandings::new();
        assert_eq!(standings.regard("CC"), 0.0);
        assert_eq!(standings.level("CC"), StandingLevel::Neutral);
        assert!(standings.get("CC").is_none());

        let standings = standings.ensure("CC");
        assert_eq!(standings.len(), 1);
        assert_eq!(standings.get("CC"), Some(&FactionStanding::new("CC")));
    }

    #[test]
    fn test_take_or_default() {
        let mut standings: FactionStandings =
            vec![FactionStanding::new("FWL").with_regard(12.0)].into_iter().collect();

        let taken = standings.take_or_default("FWL");
        assert_eq!(taken.regard, 12.0);
        assert!(standings.is_empty());

        let created = standings.take_or_default("MERC");
        assert_eq!(created, FactionStanding::new("MERC"));
    }

    #[test]
    fn test_iteration_is_sorted_by_id() {
        let standings: FactionStandings = ["LA", "CC", "FS", "DC"]
            .into_iter()
            .map(FactionStanding::new)
            .collect();
        let ids: Vec<&str> = standings.faction_ids().collect();
        assert_eq!(ids, vec!["CC", "DC", "FS", "LA"]);
    }

    #[test]
    fn test_key_mismatch_detected() {
        let json = r#"{"LA":{"faction_id":"FS","regard":0.0,"level":4}}"#;
        let standings: FactionStandings = serde_json::from_str(json).unwrap();
        assert!(matches!(
            standings.check_invariants(),
            Err(InvariantViolation::KeyMismatch { .. })
        ));
    }
}

//! Sample data fixtures for testing.
//!
//! This module provides ready-made test data for other crates to use.
//! Enable the `test-fixtures` feature to access these helpers.
//!
//! # Example
//!
//! ```ignore
//! // In your Cargo.toml:
//! // [dev-dependencies]
//! // standing-events = { path = "../standing-events", features = ["test-fixtures"] }
//!
//! use standing_events::fixtures;
//!
//! let snapshot = fixtures::sample_snapshot();
//! let outcomes = fixtures::sample_contract_outcomes();
//! ```

use crate::{ContractOutcomeEvent, FactionStanding, StandingsSnapshot};

/// Returns a sample standings snapshot from the fixtures file.
///
/// Contains 4 factions as of 3025-03-31:
/// - CC: Unfriendly, first censure step, breach in history
/// - DC: untouched neutral record
/// - FS: Honored, two accolade steps, two history entries
/// - LA: just above zero after a decay step
pub fn sample_snapshot() -> StandingsSnapshot {
    let json = include_str!("../tests/fixtures/sample_standings.json");
    StandingsSnapshot::from_json(json)
        .unwrap_or_else(|e| panic!("Failed to parse sample_standings.json: {}", e))
}

/// Returns sample contract outcomes from the fixtures file.
///
/// Contains one of each outcome kind, two of them with a target faction.
pub fn sample_contract_outcomes() -> Vec<ContractOutcomeEvent> {
    let jsonl = include_str!("../tests/fixtures/sample_contract_outcomes.jsonl");
    jsonl
        .lines()
        .filter(|l| !l.trim().is_empty())
        .map(|l| {
            serde_json::from_str(l)
                .unwrap_or_else(|e| panic!("Failed to parse outcome line: {}\nError: {}", l, e))
        })
        .collect()
}

/// Returns a specific standing by faction id from the sample snapshot.
pub fn get_standing(faction_id: &str) -> Option<FactionStanding> {
    sample_snapshot().standings.get(faction_id).cloned()
}

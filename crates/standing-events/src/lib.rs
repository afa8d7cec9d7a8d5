//! Shared standing types and serialization for the faction standing core.
//!
//! This crate contains pure data structures with no standing logic beyond
//! the regard-to-level resolver. It is a dependency for all other crates in
//! the workspace.

pub mod date;
pub mod event;
pub mod level;
pub mod snapshot;
pub mod standing;

#[cfg(any(test, feature = "test-fixtures"))]
pub mod fixtures;

// Re-export date types
pub use date::{CampaignDate, ParseDateError};

// Re-export level types
pub use level::{
    clamp_regard, get_standing_level, AccoladeLevel, AccoladePayload, CensureLevel,
    LevelOutOfRange, StandingLevel, BAND_LOWER_BOUNDS, DEFAULT_REGARD, MAX_REGARD, MIN_REGARD,
};

// Re-export standing types
pub use standing::{reasons, FactionStanding, FactionStandings, InvariantViolation, RegardChangeEvent};

// Re-export event types
pub use event::{
    AccoladeEvent, CensureEvent, ContractOutcome, ContractOutcomeEvent, ParseOutcomeError,
    StandingChangeEvent, StandingEvent,
};

// Re-export snapshot types
pub use snapshot::{PersistError, StandingsSnapshot, SNAPSHOT_VERSION};

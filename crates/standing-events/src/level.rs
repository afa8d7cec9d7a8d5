//! Standing Levels
//!
//! The discrete standing bands, the two escalation ladders, and the pure
//! regard-to-level resolver.
//!
//! All three level types persist as their ordinal integer.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Lowest possible regard.
pub const MIN_REGARD: f64 = -60.0;

/// Highest possible regard.
pub const MAX_REGARD: f64 = 60.0;

/// Regard for a faction with no history.
pub const DEFAULT_REGARD: f64 = 0.0;

/// Inclusive lower bound of each standing band, ascending by level.
///
/// Adjoining bands share their boundary point; the boundary belongs to the
/// higher band. The top band is closed at [`MAX_REGARD`].
pub const BAND_LOWER_BOUNDS: [f64; 9] = [-60.0, -50.0, -40.0, -25.0, -10.0, 10.0, 25.0, 40.0, 50.0];

/// Clamps a regard value into `[MIN_REGARD, MAX_REGARD]`.
///
/// NaN collapses to [`DEFAULT_REGARD`].
pub fn clamp_regard(regard: f64) -> f64 {
    if regard.is_nan() {
        DEFAULT_REGARD
    } else {
        regard.clamp(MIN_REGARD, MAX_REGARD)
    }
}

/// Resolves a regard value to its standing level.
///
/// Total over all inputs: out-of-range regard is clamped first.
pub fn get_standing_level(regard: f64) -> StandingLevel {
    let regard = clamp_regard(regard);
    BAND_LOWER_BOUNDS
        .iter()
        .rposition(|&lower| lower <= regard)
        .and_then(|idx| StandingLevel::from_ordinal(idx as u8))
        .unwrap_or(StandingLevel::Outlawed)
}

/// Error returned when an ordinal does not name a level.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{kind} ordinal {value} out of range 0..={max}")]
pub struct LevelOutOfRange {
    pub kind: &'static str,
    pub value: u8,
    pub max: u8,
}

/// Discrete relationship band derived from regard.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
#[repr(u8)]
pub enum StandingLevel {
    Outlawed = 0,
    Hostile = 1,
    Unfriendly = 2,
    Cold = 3,
    #[default]
    Neutral = 4,
    Warm = 5,
    Friendly = 6,
    Allied = 7,
    Honored = 8,
}

impl StandingLevel {
    pub const MAX_ORDINAL: u8 = 8;

    /// Returns all levels in ascending order.
    pub fn all() -> &'static [StandingLevel] {
        &[
            StandingLevel::Outlawed,
            StandingLevel::Hostile,
            StandingLevel::Unfriendly,
            StandingLevel::Cold,
            StandingLevel::Neutral,
            StandingLevel::Warm,
            StandingLevel::Friendly,
            StandingLevel::Allied,
            StandingLevel::Honored,
        ]
    }

    pub fn from_ordinal(ordinal: u8) -> Option<Self> {
        Self::all().get(ordinal as usize).copied()
    }

    pub fn ordinal(self) -> u8 {
        self as u8
    }

    /// Returns the `[lower, upper]` regard band for this level.
    pub fn regard_range(self) -> (f64, f64) {
        let idx = self.ordinal() as usize;
        let upper = BAND_LOWER_BOUNDS.get(idx + 1).copied().unwrap_or(MAX_REGARD);
        (BAND_LOWER_BOUNDS[idx], upper)
    }

    pub fn label(self) -> &'static str {
        match self {
            StandingLevel::Outlawed => "Outlawed",
            StandingLevel::Hostile => "Hostile",
            StandingLevel::Unfriendly => "Unfriendly",
            StandingLevel::Cold => "Cold",
            StandingLevel::Neutral => "Neutral",
            StandingLevel::Warm => "Warm",
            StandingLevel::Friendly => "Friendly",
            StandingLevel::Allied => "Allied",
            StandingLevel::Honored => "Honored",
        }
    }
}

impl fmt::Display for StandingLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.label())
    }
}

impl From<StandingLevel> for u8 {
    fn from(level: StandingLevel) -> Self {
        level.ordinal()
    }
}

impl TryFrom<u8> for StandingLevel {
    type Error = LevelOutOfRange;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::from_ordinal(value).ok_or(LevelOutOfRange {
            kind: "standing level",
            value,
            max: Self::MAX_ORDINAL,
        })
    }
}

/// Signal attached to certain accolade steps, applied by the receiver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum AccoladePayload {
    /// A cash bonus of the given tier (1 = smallest) should be paid out.
    CashBonus { tier: u8 },
}

/// Positive escalation ladder, advanced monthly while standing is warm or better.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
#[repr(u8)]
pub enum AccoladeLevel {
    #[default]
    None = 0,
    TakingNotice = 1,
    PressRecognition = 2,
    CashBonusI = 3,
    CashBonusII = 4,
    CashBonusIII = 5,
    CashBonusIV = 6,
    CashBonusV = 7,
    Adoption = 8,
    Triumph = 9,
    Parade = 10,
    Statue = 11,
    Medal = 12,
    Monument = 13,
    HonoraryTitle = 14,
    LetterFromHeadOfState = 15,
}

impl AccoladeLevel {
    pub const MAX_ORDINAL: u8 = 15;

    pub fn all() -> &'static [AccoladeLevel] {
        &[
            AccoladeLevel::None,
            AccoladeLevel::TakingNotice,
            AccoladeLevel::PressRecognition,
            AccoladeLevel::CashBonusI,
            AccoladeLevel::CashBonusII,
            AccoladeLevel::CashBonusIII,
            AccoladeLevel::CashBonusIV,
            AccoladeLevel::CashBonusV,
            AccoladeLevel::Adoption,
            AccoladeLevel::Triumph,
            AccoladeLevel::Parade,
            AccoladeLevel::Statue,
            AccoladeLevel::Medal,
            AccoladeLevel::Monument,
            AccoladeLevel::HonoraryTitle,
            AccoladeLevel::LetterFromHeadOfState,
        ]
    }

    pub fn from_ordinal(ordinal: u8) -> Option<Self> {
        Self::all().get(ordinal as usize).copied()
    }

    pub fn ordinal(self) -> u8 {
        self as u8
    }

    pub fn is_max(self) -> bool {
        self.ordinal() == Self::MAX_ORDINAL
    }

    /// Returns the next step, or `None` at the top of the ladder.
    pub fn next(self) -> Option<Self> {
        Self::from_ordinal(self.ordinal() + 1)
    }

    /// Payload the receiving collaborator must act on for this step.
    pub fn payload(self) -> Option<AccoladePayload> {
        match self {
            AccoladeLevel::CashBonusI => Some(AccoladePayload::CashBonus { tier: 1 }),
            AccoladeLevel::CashBonusII => Some(AccoladePayload::CashBonus { tier: 2 }),
            AccoladeLevel::CashBonusIII => Some(AccoladePayload::CashBonus { tier: 3 }),
            AccoladeLevel::CashBonusIV => Some(AccoladePayload::CashBonus { tier: 4 }),
            AccoladeLevel::CashBonusV => Some(AccoladePayload::CashBonus { tier: 5 }),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            AccoladeLevel::None => "No Accolade",
            AccoladeLevel::TakingNotice => "Taking Notice",
            AccoladeLevel::PressRecognition => "Press Recognition",
            AccoladeLevel::CashBonusI => "Cash Bonus I",
            AccoladeLevel::CashBonusII => "Cash Bonus II",
            AccoladeLevel::CashBonusIII => "Cash Bonus III",
            AccoladeLevel::CashBonusIV => "Cash Bonus IV",
            AccoladeLevel::CashBonusV => "Cash Bonus V",
            AccoladeLevel::Adoption => "Adoption",
            AccoladeLevel::Triumph => "Triumph",
            AccoladeLevel::Parade => "Parade",
            AccoladeLevel::Statue => "Statue",
            AccoladeLevel::Medal => "Medal",
            AccoladeLevel::Monument => "Monument",
            AccoladeLevel::HonoraryTitle => "Honorary Title",
            AccoladeLevel::LetterFromHeadOfState => "Letter From Head of State",
        }
    }
}

impl fmt::Display for AccoladeLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.label())
    }
}

impl From<AccoladeLevel> for u8 {
    fn from(level: AccoladeLevel) -> Self {
        level.ordinal()
    }
}

impl TryFrom<u8> for AccoladeLevel {
    type Error = LevelOutOfRange;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::from_ordinal(value).ok_or(LevelOutOfRange {
            kind: "accolade level",
            value,
            max: Self::MAX_ORDINAL,
        })
    }
}

/// Negative escalation ladder, advanced monthly while regard is negative.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
#[repr(u8)]
pub enum CensureLevel {
    #[default]
    None = 0,
    FormalWarning = 1,
    NewsArticle = 2,
    CommanderRetirement = 3,
    LeadershipReplacement = 4,
    Disbandment = 5,
}

impl CensureLevel {
    pub const MAX_ORDINAL: u8 = 5;

    pub fn all() -> &'static [CensureLevel] {
        &[
            CensureLevel::None,
            CensureLevel::FormalWarning,
            CensureLevel::NewsArticle,
            CensureLevel::CommanderRetirement,
            CensureLevel::LeadershipReplacement,
            CensureLevel::Disbandment,
        ]
    }

    pub fn from_ordinal(ordinal: u8) -> Option<Self> {
        Self::all().get(ordinal as usize).copied()
    }

    pub fn ordinal(self) -> u8 {
        self as u8
    }

    pub fn is_max(self) -> bool {
        self.ordinal() == Self::MAX_ORDINAL
    }

    pub fn next(self) -> Option<Self> {
        Self::from_ordinal(self.ordinal() + 1)
    }

    pub fn label(self) -> &'static str {
        match self {
            CensureLevel::None => "No Censure",
            CensureLevel::FormalWarning => "Formal Warning",
            CensureLevel::NewsArticle => "News Article",
            CensureLevel::CommanderRetirement => "Commander Retirement",
            CensureLevel::LeadershipReplacement => "Leadership Replacement",
            CensureLevel::Disbandment => "Disbandment",
        }
    }
}

impl fmt::Display for CensureLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.label())
    }
}

impl From<CensureLevel> for u8 {
    fn from(level: CensureLevel) -> Self {
        level.ordinal()
    }
}

impl TryFrom<u8> for CensureLevel {
    type Error = LevelOutOfRange;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::from_ordinal(value).ok_or(LevelOutOfRange {
            kind: "censure level",
            value,
            max: Self::MAX_ORDINAL,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extremes() {
        assert_eq!(get_standing_level(-60.0), StandingLevel::Outlawed);
        assert_eq!(get_standing_level(60.0), StandingLevel::Honored);
        assert_eq!(get_standing_level(0.0), StandingLevel::Neutral);
    }

    #[test]
    fn test_shared_boundary_resolves_to_higher_band() {
        assert_eq!(get_standing_level(-10.0), StandingLevel::Neutral);
        assert_eq!(get_standing_level(-10.000_001), StandingLevel::Cold);
        assert_eq!(get_standing_level(10.0), StandingLevel::Warm);
        assert_eq!(get_standing_level(9.999), StandingLevel::Neutral);
        assert_eq!(get_standing_level(-50.0), StandingLevel::Hostile);
        assert_eq!(get_standing_level(50.0), StandingLevel::Honored);
    }

    #[test]
    fn test_every_lower_bound_maps_to_its_band() {
        for (idx, &lower) in BAND_LOWER_BOUNDS.iter().enumerate() {
            assert_eq!(get_standing_level(lower).ordinal() as usize, idx);
        }
    }

    #[test]
    fn test_out_of_range_is_clamped() {
        assert_eq!(get_standing_level(-1000.0), StandingLevel::Outlawed);
        assert_eq!(get_standing_level(1000.0), StandingLevel::Honored);
        assert_eq!(get_standing_level(f64::NEG_INFINITY), StandingLevel::Outlawed);
        assert_eq!(get_standing_level(f64::NAN), StandingLevel::Neutral);
    }

    #[test]
    fn test_monotonic_over_range() {
        let mut previous = StandingLevel::Outlawed;
        let mut regard = MIN_REGARD;
        while regard <= MAX_REGARD {
            let level = get_standing_level(regard);
            assert!(level >= previous, "level dropped at regard {}", regard);
            previous = level;
            regard += 0.125;
        }
        assert_eq!(previous, StandingLevel::Honored);
    }

    #[test]
    fn test_regard_range() {
        assert_eq!(StandingLevel::Cold.regard_range(), (-25.0, -10.0));
        assert_eq!(StandingLevel::Honored.regard_range(), (50.0, 60.0));
    }

    #[test]
    fn test_level_serializes_as_ordinal() {
        assert_eq!(serde_json::to_string(&StandingLevel::Warm).unwrap(), "5");
        assert_eq!(serde_json::to_string(&AccoladeLevel::CashBonusI).unwrap(), "3");
        assert_eq!(serde_json::to_string(&CensureLevel::Disbandment).unwrap(), "5");

        let level: StandingLevel = serde_json::from_str("8").unwrap();
        assert_eq!(level, StandingLevel::Honored);
        assert!(serde_json::from_str::<StandingLevel>("9").is_err());
        assert!(serde_json::from_str::<AccoladeLevel>("16").is_err());
        assert!(serde_json::from_str::<CensureLevel>("6").is_err());
    }

    #[test]
    fn test_ladder_next() {
        assert_eq!(AccoladeLevel::None.next(), Some(AccoladeLevel::TakingNotice));
        assert_eq!(AccoladeLevel::LetterFromHeadOfState.next(), None);
        assert_eq!(CensureLevel::LeadershipReplacement.next(), Some(CensureLevel::Disbandment));
        assert_eq!(CensureLevel::Disbandment.next(), None);
    }

    #[test]
    fn test_cash_bonus_payloads() {
        let with_payload: Vec<_> = AccoladeLevel::all()
            .iter()
            .filter(|level| level.payload().is_some())
            .collect();
        assert_eq!(with_payload.len(), 5);
        assert_eq!(
            AccoladeLevel::CashBonusIII.payload(),
            Some(AccoladePayload::CashBonus { tier: 3 })
        );
        assert_eq!(AccoladeLevel::Statue.payload(), None);
    }
}

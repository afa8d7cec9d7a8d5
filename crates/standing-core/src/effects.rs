//! Standing Effects
//!
//! Per-level modifiers read by recruitment, markets, negotiation, pay and
//! logistics. Every effect is a fixed lookup indexed by standing level
//! ordinal, so balance changes only ever touch the tables below.
//!
//! Consumers read effects through [`get_all_effects`] or
//! [`effects_with_toggles`] and never recompute individual values.

use serde::{Deserialize, Serialize};
use standing_events::StandingLevel;

const LEVELS: usize = StandingLevel::MAX_ORDINAL as usize + 1;

// ---------------------------------------------------------------------------
// Lookup tables, indexed Outlawed (0) .. Honored (8)
// ---------------------------------------------------------------------------

const NEGOTIATION: [i32; LEVELS] = [-4, -3, -2, -1, 0, 1, 2, 3, 4];
const RESUPPLY_WEIGHT: [f64; LEVELS] = [0.0, 0.0, 0.25, 0.5, 1.0, 1.25, 1.5, 1.75, 2.0];
const COMMAND_CIRCUIT: [bool; LEVELS] = [false, false, false, false, false, false, false, true, true];
const OUTLAWED: [bool; LEVELS] = [true, true, false, false, false, false, false, false, false];
const BATCHALL_NOT_ALLOWED: [bool; LEVELS] = [true, true, false, false, false, false, false, false, false];
const RECRUITMENT_ROLLS: [f64; LEVELS] = [0.0, 0.25, 0.5, 0.75, 1.0, 1.25, 1.5, 1.75, 2.0];
const RECRUITMENT_TICKETS: [u32; LEVELS] = [0, 1, 3, 4, 5, 7, 9, 12, 15];
const BARRACKS_COST: [f64; LEVELS] = [3.0, 2.5, 2.0, 1.5, 1.0, 1.0, 0.9, 0.8, 0.75];
const UNIT_MARKET_RARITY: [i32; LEVELS] = [-2, -2, -1, -1, 0, 0, 1, 2, 3];
const CONTRACT_PAY: [f64; LEVELS] = [0.6, 0.7, 0.8, 0.9, 1.0, 1.05, 1.1, 1.15, 1.2];
const SUPPORT_POINTS_START: [i32; LEVELS] = [-3, -2, -1, 0, 0, 0, 1, 2, 3];
const SUPPORT_POINTS_PERIODIC: [i32; LEVELS] = [-4, -3, -2, -1, 0, 0, 1, 2, 3];
// Start support from Hostile up, periodic support from Unfriendly up
const SUPPORT_START_ENABLED: [bool; LEVELS] = [false, true, true, true, true, true, true, true, true];
const SUPPORT_PERIODIC_ENABLED: [bool; LEVELS] = [false, false, true, true, true, true, true, true, true];

fn idx(level: StandingLevel) -> usize {
    level.ordinal() as usize
}

/// Negotiation skill modifier, -4 at Outlawed to +4 at Honored.
pub fn negotiation_modifier(level: StandingLevel) -> i32 {
    NEGOTIATION[idx(level)]
}

/// Multiplier on resupply weight allowance.
pub fn resupply_weight_multiplier(level: StandingLevel) -> f64 {
    RESUPPLY_WEIGHT[idx(level)]
}

/// Whether the faction's command circuit is open to the campaign.
pub fn has_command_circuit_access(level: StandingLevel) -> bool {
    COMMAND_CIRCUIT[idx(level)]
}

/// Whether the campaign is outlawed in the faction's space.
pub fn is_outlawed(level: StandingLevel) -> bool {
    OUTLAWED[idx(level)]
}

/// Whether the faction refuses batchall challenges from the campaign.
pub fn is_batchall_not_allowed(level: StandingLevel) -> bool {
    BATCHALL_NOT_ALLOWED[idx(level)]
}

/// Recruitment tickets and roll modifier together.
pub fn recruitment_bundle(level: StandingLevel) -> RecruitmentBundle {
    RecruitmentBundle {
        tickets: recruitment_tickets_modifier(level),
        rolls_modifier: recruitment_rolls_modifier(level),
    }
}

pub fn recruitment_rolls_modifier(level: StandingLevel) -> f64 {
    RECRUITMENT_ROLLS[idx(level)]
}

pub fn recruitment_tickets_modifier(level: StandingLevel) -> u32 {
    RECRUITMENT_TICKETS[idx(level)]
}

/// Multiplier on barracks upkeep; lower is better.
pub fn barracks_cost_multiplier(level: StandingLevel) -> f64 {
    BARRACKS_COST[idx(level)]
}

pub fn unit_market_rarity_modifier(level: StandingLevel) -> i32 {
    UNIT_MARKET_RARITY[idx(level)]
}

pub fn contract_pay_multiplier(level: StandingLevel) -> f64 {
    CONTRACT_PAY[idx(level)]
}

/// Support points granted (or withheld) when a contract starts.
pub fn support_point_modifier_start(level: StandingLevel) -> i32 {
    SUPPORT_POINTS_START[idx(level)]
}

/// Support points granted (or withheld) each support period.
pub fn support_point_modifier_periodic(level: StandingLevel) -> i32 {
    SUPPORT_POINTS_PERIODIC[idx(level)]
}

pub fn is_support_start_enabled(level: StandingLevel) -> bool {
    SUPPORT_START_ENABLED[idx(level)]
}

pub fn is_support_periodic_enabled(level: StandingLevel) -> bool {
    SUPPORT_PERIODIC_ENABLED[idx(level)]
}

/// Recruitment allowance for one standing level.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RecruitmentBundle {
    pub tickets: u32,
    pub rolls_modifier: f64,
}

/// Which effect categories are applied.
///
/// A disabled category reports the Neutral-level value, and the snapshot
/// records the toggles it was built with so consumers can tell "disabled"
/// apart from "computed as neutral".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EffectToggles {
    pub negotiation: bool,
    pub resupply: bool,
    pub command_circuit: bool,
    pub outlawed: bool,
    pub batchall: bool,
    pub recruitment: bool,
    pub barracks: bool,
    pub unit_market: bool,
    pub contract_pay: bool,
    pub support_points: bool,
}

impl EffectToggles {
    pub fn all_enabled() -> Self {
        Self {
            negotiation: true,
            resupply: true,
            command_circuit: true,
            outlawed: true,
            batchall: true,
            recruitment: true,
            barracks: true,
            unit_market: true,
            contract_pay: true,
            support_points: true,
        }
    }

    pub fn all_disabled() -> Self {
        Self {
            negotiation: false,
            resupply: false,
            command_circuit: false,
            outlawed: false,
            batchall: false,
            recruitment: false,
            barracks: false,
            unit_market: false,
            contract_pay: false,
            support_points: false,
        }
    }
}

impl Default for EffectToggles {
    fn default() -> Self {
        Self::all_enabled()
    }
}

/// All effects of one standing level, computed together.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EffectsSnapshot {
    pub level: StandingLevel,
    pub negotiation: i32,
    pub resupply_weight: f64,
    pub command_circuit_access: bool,
    pub outlawed: bool,
    pub batchall_not_allowed: bool,
    pub recruitment: RecruitmentBundle,
    pub recruitment_rolls: f64,
    pub recruitment_tickets: u32,
    pub barracks_cost_multiplier: f64,
    pub unit_market_rarity: i32,
    pub contract_pay_multiplier: f64,
    pub support_points_start: i32,
    pub support_points_periodic: i32,
    pub support_start_enabled: bool,
    pub support_periodic_enabled: bool,
    /// Categories that reflect `level` rather than the neutral fallback
    pub applied: EffectToggles,
}

/// Returns every effect for `level` with all categories applied.
pub fn get_all_effects(level: StandingLevel) -> EffectsSnapshot {
    effects_with_toggles(level, &EffectToggles::all_enabled())
}

/// Returns every effect for `level`, substituting neutral values for
/// disabled categories.
pub fn effects_with_toggles(level: StandingLevel, toggles: &EffectToggles) -> EffectsSnapshot {
    let pick = |enabled: bool| if enabled { level } else { StandingLevel::Neutral };

    let negotiation = pick(toggles.negotiation);
    let resupply = pick(toggles.resupply);
    let command_circuit = pick(toggles.command_circuit);
    let outlawed = pick(toggles.outlawed);
    let batchall = pick(toggles.batchall);
    let recruitment = pick(toggles.recruitment);
    let barracks = pick(toggles.barracks);
    let unit_market = pick(toggles.unit_market);
    let contract_pay = pick(toggles.contract_pay);
    let support = pick(toggles.support_points);

    EffectsSnapshot {
        level,
        negotiation: negotiation_modifier(negotiation),
        resupply_weight: resupply_weight_multiplier(resupply),
        command_circuit_access: has_command_circuit_access(command_circuit),
        outlawed: is_outlawed(outlawed),
        batchall_not_allowed: is_batchall_not_allowed(batchall),
        recruitment: recruitment_bundle(recruitment),
        recruitment_rolls: recruitment_rolls_modifier(recruitment),
        recruitment_tickets: recruitment_tickets_modifier(recruitment),
        barracks_cost_multiplier: barracks_cost_multiplier(barracks),
        unit_market_rarity: unit_market_rarity_modifier(unit_market),
        contract_pay_multiplier: contract_pay_multiplier(contract_pay),
        support_points_start: support_point_modifier_start(support),
        support_points_periodic: support_point_modifier_periodic(support),
        support_start_enabled: is_support_start_enabled(support),
        support_periodic_enabled: is_support_periodic_enabled(support),
        applied: *toggles,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn levels() -> &'static [StandingLevel] {
        StandingLevel::all()
    }

    #[test]
    fn test_outlawed_level_effects() {
        let effects = get_all_effects(StandingLevel::Outlawed);
        assert_eq!(effects.negotiation, -4);
        assert_eq!(effects.contract_pay_multiplier, 0.6);
        assert!(effects.outlawed);
        assert!(effects.batchall_not_allowed);
        assert!(!effects.command_circuit_access);
        assert_eq!(effects.barracks_cost_multiplier, 3.0);
        assert_eq!(effects.resupply_weight, 0.0);
        assert_eq!(effects.unit_market_rarity, -2);
        assert_eq!(effects.support_points_periodic, -4);
    }

    #[test]
    fn test_honored_level_effects() {
        let effects = get_all_effects(StandingLevel::Honored);
        assert_eq!(effects.negotiation, 4);
        assert_eq!(effects.contract_pay_multiplier, 1.2);
        assert!(effects.command_circuit_access);
        assert!(!effects.outlawed);
        assert_eq!(effects.barracks_cost_multiplier, 0.75);
        assert_eq!(effects.resupply_weight, 2.0);
        assert_eq!(effects.recruitment_tickets, 15);
        assert_eq!(effects.recruitment_rolls, 2.0);
        assert_eq!(effects.unit_market_rarity, 3);
        assert_eq!(effects.support_points_start, 3);
        assert_eq!(effects.support_points_periodic, 3);
    }

    #[test]
    fn test_neutral_level_is_identity() {
        let effects = get_all_effects(StandingLevel::Neutral);
        assert_eq!(effects.negotiation, 0);
        assert_eq!(effects.resupply_weight, 1.0);
        assert_eq!(effects.recruitment_rolls, 1.0);
        assert_eq!(effects.barracks_cost_multiplier, 1.0);
        assert_eq!(effects.unit_market_rarity, 0);
        assert_eq!(effects.contract_pay_multiplier, 1.0);
        assert_eq!(effects.support_points_start, 0);
        assert_eq!(effects.support_points_periodic, 0);
        assert!(effects.support_start_enabled);
        assert!(effects.support_periodic_enabled);
    }

    #[test]
    fn test_negotiation_is_linear() {
        for level in levels() {
            assert_eq!(negotiation_modifier(*level), level.ordinal() as i32 - 4);
        }
    }

    #[test]
    fn test_value_ranges() {
        for &level in levels() {
            let e = get_all_effects(level);
            assert!((-4..=4).contains(&e.negotiation));
            assert!((0.0..=2.0).contains(&e.resupply_weight));
            assert!((0.0..=2.0).contains(&e.recruitment_rolls));
            assert!(e.recruitment_tickets <= 15);
            assert!((0.75..=3.0).contains(&e.barracks_cost_multiplier));
            assert!((-2..=3).contains(&e.unit_market_rarity));
            assert!((0.6..=1.2).contains(&e.contract_pay_multiplier));
            assert!((-3..=3).contains(&e.support_points_start));
            assert!((-4..=3).contains(&e.support_points_periodic));
        }
    }

    #[test]
    fn test_tables_are_monotonic() {
        for pair in levels().windows(2) {
            let (lo, hi) = (get_all_effects(pair[0]), get_all_effects(pair[1]));
            assert!(hi.negotiation > lo.negotiation);
            assert!(hi.resupply_weight >= lo.resupply_weight);
            assert!(hi.recruitment_tickets >= lo.recruitment_tickets);
            assert!(hi.recruitment_rolls >= lo.recruitment_rolls);
            assert!(hi.barracks_cost_multiplier <= lo.barracks_cost_multiplier);
            assert!(hi.unit_market_rarity >= lo.unit_market_rarity);
            assert!(hi.contract_pay_multiplier > lo.contract_pay_multiplier);
            assert!(hi.support_points_start >= lo.support_points_start);
            assert!(hi.support_points_periodic >= lo.support_points_periodic);
            assert!(hi.support_start_enabled >= lo.support_start_enabled);
            assert!(hi.support_periodic_enabled >= lo.support_periodic_enabled);
        }
    }

    #[test]
    fn test_boolean_bands() {
        let command: Vec<bool> = levels().iter().map(|l| has_command_circuit_access(*l)).collect();
        assert_eq!(command.iter().filter(|b| **b).count(), 2);
        assert!(has_command_circuit_access(StandingLevel::Allied));

        let outlawed: Vec<bool> = levels().iter().map(|l| is_outlawed(*l)).collect();
        assert_eq!(outlawed.iter().filter(|b| **b).count(), 2);
        assert!(is_outlawed(StandingLevel::Hostile));
        assert!(!is_outlawed(StandingLevel::Unfriendly));

        for &level in levels() {
            assert_eq!(is_outlawed(level), is_batchall_not_allowed(level));
        }
    }

    #[test]
    fn test_support_toggles() {
        assert!(!is_support_start_enabled(StandingLevel::Outlawed));
        assert!(is_support_start_enabled(StandingLevel::Hostile));
        assert!(!is_support_periodic_enabled(StandingLevel::Hostile));
        assert!(is_support_periodic_enabled(StandingLevel::Unfriendly));
    }

    #[test]
    fn test_bundle_matches_individual_lookups() {
        for &level in levels() {
            let e = get_all_effects(level);
            assert_eq!(e.recruitment.tickets, e.recruitment_tickets);
            assert_eq!(e.recruitment.rolls_modifier, e.recruitment_rolls);
            assert_eq!(e.recruitment, recruitment_bundle(level));
        }
    }

    #[test]
    fn test_disabled_category_falls_back_to_neutral() {
        let toggles = EffectToggles {
            contract_pay: false,
            ..EffectToggles::all_enabled()
        };
        let effects = effects_with_toggles(StandingLevel::Outlawed, &toggles);

        assert_eq!(effects.contract_pay_multiplier, 1.0);
        assert_eq!(effects.negotiation, -4);
        assert!(!effects.applied.contract_pay);
        assert!(effects.applied.negotiation);
    }

    #[test]
    fn test_disabled_is_distinguishable_from_neutral() {
        let neutral = get_all_effects(StandingLevel::Neutral);
        let disabled = effects_with_toggles(StandingLevel::Neutral, &EffectToggles::all_disabled());

        assert_eq!(neutral.contract_pay_multiplier, disabled.contract_pay_multiplier);
        assert_ne!(neutral, disabled);
        assert_eq!(disabled.applied, EffectToggles::all_disabled());
    }

    #[test]
    fn test_all_disabled_yields_neutral_values() {
        for &level in levels() {
            let disabled = effects_with_toggles(level, &EffectToggles::all_disabled());
            let neutral = get_all_effects(StandingLevel::Neutral);
            assert_eq!(disabled.level, level);
            assert_eq!(disabled.negotiation, neutral.negotiation);
            assert_eq!(disabled.barracks_cost_multiplier, neutral.barracks_cost_multiplier);
            assert_eq!(disabled.outlawed, neutral.outlawed);
            assert_eq!(disabled.recruitment, neutral.recruitment);
        }
    }

    #[test]
    fn test_snapshot_serialization() {
        let effects = get_all_effects(StandingLevel::Warm);
        let json = serde_json::to_string(&effects).unwrap();
        assert!(json.contains(r#""level":5"#));
        let parsed: EffectsSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, effects);
    }
}

//! Regard Adjustment
//!
//! Applies signed regard changes to a single faction standing. Every change,
//! including one fully absorbed by clamping, lands in the history.

use standing_events::{
    clamp_regard, get_standing_level, reasons, CampaignDate, FactionStanding, RegardChangeEvent,
    MAX_REGARD, MIN_REGARD,
};

/// Applies `delta * multiplier` to a standing and records the change.
///
/// The result is clamped to `[MIN_REGARD, MAX_REGARD]` and its level
/// recomputed. History grows by exactly one entry.
pub fn adjust_regard(
    standing: FactionStanding,
    delta: f64,
    reason: &str,
    date: CampaignDate,
    multiplier: f64,
) -> FactionStanding {
    let mut effective = delta * multiplier;
    if effective.is_nan() {
        tracing::warn!(
            faction = %standing.faction_id,
            delta,
            multiplier,
            "regard delta is NaN, recording as zero"
        );
        effective = 0.0;
    }
    // History entries must stay serializable, so overflow saturates
    effective = effective.clamp(-f64::MAX, f64::MAX);
    let new_regard = clamp_regard(standing.regard + effective);
    record_change(standing, new_regard, effective, reason, date)
}

/// Sets regard to an absolute value, recorded as a game-master correction.
pub fn set_regard(standing: FactionStanding, value: f64, date: CampaignDate) -> FactionStanding {
    let new_regard = clamp_regard(value);
    let delta = new_regard - standing.regard;
    record_change(standing, new_regard, delta, reasons::GM_OVERRIDE, date)
}

/// Moves a standing to `new_regard` and appends the matching history entry.
pub(crate) fn record_change(
    mut standing: FactionStanding,
    new_regard: f64,
    delta: f64,
    reason: &str,
    date: CampaignDate,
) -> FactionStanding {
    let previous_regard = standing.regard;
    let previous_level = standing.level;
    let new_level = get_standing_level(new_regard);

    standing.regard = new_regard;
    standing.level = new_level;
    standing.last_change_date = Some(date);
    standing.history.push(RegardChangeEvent {
        date,
        delta,
        reason: reason.to_string(),
        previous_regard,
        new_regard,
        previous_level,
        new_level,
    });

    if previous_level != new_level {
        tracing::debug!(
            faction = %standing.faction_id,
            from = %previous_level,
            to = %new_level,
            reason,
            "standing level changed"
        );
    }

    enforce_invariants(standing)
}

/// Fails loudly in debug builds and repairs the record in release builds.
///
/// Ladder ranges cannot be violated since the ladder types only represent
/// valid ordinals.
pub fn enforce_invariants(mut standing: FactionStanding) -> FactionStanding {
    let checked = standing.check_invariants();
    debug_assert!(checked.is_ok(), "{:?}", checked);
    if let Err(violation) = checked {
        tracing::warn!(%violation, "repairing corrupted faction standing");
        if !(MIN_REGARD..=MAX_REGARD).contains(&standing.regard) {
            standing.regard = clamp_regard(standing.regard);
        }
        standing.level = get_standing_level(standing.regard);
    }
    standing
}

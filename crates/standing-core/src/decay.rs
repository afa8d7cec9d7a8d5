//! Regard Decay
//!
//! Daily pull of regard toward zero.

use standing_events::{reasons, CampaignDate, FactionStanding};

use crate::regard::record_change;

/// Regard moved toward zero per day unless configured otherwise.
pub const DEFAULT_DECAY_RATE: f64 = 0.375;

/// Moves regard toward zero by `rate`, snapping to zero instead of overshooting.
///
/// A history entry is only written when regard actually moves, so a neutral
/// faction does not accumulate empty decay entries.
pub fn process_regard_decay(standing: FactionStanding, date: CampaignDate, rate: f64) -> FactionStanding {
    if !(rate.is_finite() && rate > 0.0) || standing.regard == 0.0 {
        return standing;
    }

    let new_regard = if standing.regard.abs() <= rate {
        0.0
    } else {
        standing.regard - rate.copysign(standing.regard)
    };
    let delta = new_regard - standing.regard;

    tracing::debug!(
        faction = %standing.faction_id,
        from = standing.regard,
        to = new_regard,
        "regard decayed"
    );
    record_change(standing, new_regard, delta, reasons::DECAY, date)
}

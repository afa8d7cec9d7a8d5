//! Day Cycle
//!
//! Once-per-day entry point: decay every tracked faction, then run the
//! monthly escalation check on the first day of a month.

use standing_events::{CampaignDate, FactionStandings, StandingEvent};

use crate::config::ValidatedConfig;
use crate::decay::process_regard_decay;
use crate::escalation::process_escalation;

/// Standings after one day, plus escalation notifications for the day report.
#[derive(Debug, Clone, PartialEq)]
pub struct DayCycleResult {
    pub standings: FactionStandings,
    pub events: Vec<StandingEvent>,
}

/// Runs the daily standing update for the surrounding day pipeline.
#[derive(Debug, Clone, Default)]
pub struct DayCycleHook {
    config: ValidatedConfig,
}

impl DayCycleHook {
    pub fn new(config: ValidatedConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ValidatedConfig {
        &self.config
    }

    /// Processes one simulated day.
    ///
    /// Factions are handled in ascending id order. Within a faction decay
    /// always runs before escalation, so escalation sees decayed regard.
    /// With the feature disabled nothing is read or written.
    pub fn process_day(&self, standings: FactionStandings, date: CampaignDate) -> DayCycleResult {
        if !self.config.is_enabled() {
            return DayCycleResult {
                standings,
                events: Vec::new(),
            };
        }

        let config = self.config.get();
        let monthly = date.is_first_of_month();
        let mut events = Vec::new();
        let mut next = FactionStandings::new();

        for mut standing in standings {
            if config.decay.enabled {
                standing = process_regard_decay(standing, date, config.decay.rate);
            }
            if monthly {
                let outcome = process_escalation(standing, date, &config.escalation);
                events.extend(outcome.events);
                standing = outcome.standing;
            }
            next.insert(standing);
        }

        if !events.is_empty() {
            tracing::info!(%date, count = events.len(), "faction standing escalations");
        }

        DayCycleResult {
            standings: next,
            events,
        }
    }

    /// Processes `days` consecutive days starting at `start`.
    ///
    /// Returns the final standings, every event raised along the way and the
    /// date following the last processed day.
    pub fn process_days(
        &self,
        mut standings: FactionStandings,
        start: CampaignDate,
        days: u32,
    ) -> (DayCycleResult, CampaignDate) {
        let mut date = start;
        let mut events = Vec::new();
        for _ in 0..days {
            let result = self.process_day(standings, date);
            standings = result.standings;
            events.extend(result.events);
            date.advance_day();
        }
        (DayCycleResult { standings, events }, date)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::FactionStandingConfig;
    use standing_events::{AccoladeLevel, CensureLevel, FactionStanding};

    fn sample() -> FactionStandings {
        vec![
            FactionStanding::new("LA").with_regard(20.0),
            FactionStanding::new("CC").with_regard(-20.0),
            FactionStanding::new("DC"),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn test_disabled_hook_is_noop() {
        let mut raw = FactionStandingConfig::default();
        raw.standing.enabled = false;
        let hook = DayCycleHook::new(raw.activate().unwrap());

        let result = hook.process_day(sample(), CampaignDate::from_ymd(3025, 1, 1).unwrap());
        assert_eq!(result.standings, sample());
        assert!(result.events.is_empty());
    }

    #[test]
    fn test_mid_month_only_decays() {
        let hook = DayCycleHook::default();
        let result = hook.process_day(sample(), CampaignDate::from_ymd(3025, 1, 10).unwrap());

        assert_eq!(result.standings.regard("LA"), 19.625);
        assert_eq!(result.standings.regard("CC"), -19.625);
        assert_eq!(result.standings.get("DC").unwrap().history.len(), 0);
        assert!(result.events.is_empty());
    }

    #[test]
    fn test_first_of_month_escalates_after_decay() {
        let hook = DayCycleHook::default();
        let result = hook.process_day(sample(), CampaignDate::from_ymd(3025, 2, 1).unwrap());

        let la = result.standings.get("LA").unwrap();
        assert_eq!(la.accolade_level, AccoladeLevel::TakingNotice);
        let cc = result.standings.get("CC").unwrap();
        assert_eq!(cc.censure_level, CensureLevel::FormalWarning);
        assert_eq!(result.events.len(), 2);
        // Sorted order: CC before LA
        assert_eq!(result.events[0].faction_id(), "CC");
        assert_eq!(result.events[1].faction_id(), "LA");
    }

    #[test]
    fn test_escalation_sees_decayed_regard() {
        // 10.25 is Warm before decay and Neutral after
        let standings: FactionStandings =
            vec![FactionStanding::new("FS").with_regard(10.25)].into_iter().collect();
        let hook = DayCycleHook::default();
        let result = hook.process_day(standings, CampaignDate::from_ymd(3025, 3, 1).unwrap());

        let fs = result.standings.get("FS").unwrap();
        assert_eq!(fs.regard, 9.875);
        assert_eq!(fs.accolade_level, AccoladeLevel::None);
        assert!(result.events.is_empty());
    }

    #[test]
    fn test_decay_disabled() {
        let mut raw = FactionStandingConfig::default();
        raw.decay.enabled = false;
        let hook = DayCycleHook::new(raw.activate().unwrap());

        let result = hook.process_day(sample(), CampaignDate::from_ymd(3025, 1, 10).unwrap());
        assert_eq!(result.standings, sample());
    }

    #[test]
    fn test_process_days_advances_date() {
        let hook = DayCycleHook::default();
        let start = CampaignDate::from_ymd(3025, 1, 30).unwrap();
        let (result, next) = hook.process_days(sample(), start, 3);

        assert_eq!(next, CampaignDate::from_ymd(3025, 2, 2).unwrap());
        assert_eq!(result.standings.regard("LA"), 20.0 - 3.0 * 0.375);
        assert_eq!(result.events.len(), 2);
    }
}

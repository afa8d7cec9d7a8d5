//! Day Report Lines
//!
//! Plain-text rendering of standing notifications for the day report.

use standing_events::{AccoladePayload, CensureLevel, StandingEvent};

/// What the receiving collaborator is expected to do for a censure step.
fn censure_consequence(level: CensureLevel) -> &'static str {
    match level {
        CensureLevel::None => "no action",
        CensureLevel::FormalWarning => "a formal warning has been issued",
        CensureLevel::NewsArticle => "the press has been briefed against the unit",
        CensureLevel::CommanderRetirement => "the commander is expected to retire",
        CensureLevel::LeadershipReplacement => "unit leadership is to be replaced",
        CensureLevel::Disbandment => "the unit is ordered to disband",
    }
}

/// Renders one notification as a single line.
pub fn describe_event(event: &StandingEvent) -> String {
    match event {
        StandingEvent::StandingChange(e) => format!(
            "{} [{}]: standing moved from {} to {} (regard {:.2}, {})",
            e.date, e.faction_id, e.previous_level, e.new_level, e.regard, e.reason
        ),
        StandingEvent::Accolade(e) => {
            let mut line = format!("{} [{}]: accolade - {}", e.date, e.faction_id, e.new_level);
            if let Some(AccoladePayload::CashBonus { tier }) = e.payload {
                line.push_str(&format!(" (cash bonus, tier {})", tier));
            }
            line
        }
        StandingEvent::Censure(e) => format!(
            "{} [{}]: censure - {}; {}",
            e.date,
            e.faction_id,
            e.new_level,
            censure_consequence(e.new_level)
        ),
    }
}

/// Renders a day's notifications in order.
pub fn day_report(events: &[StandingEvent]) -> Vec<String> {
    events.iter().map(describe_event).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use standing_events::{
        AccoladeEvent, AccoladeLevel, CampaignDate, CensureEvent, StandingChangeEvent,
        StandingLevel,
    };

    fn date() -> CampaignDate {
        CampaignDate::from_ymd(3025, 11, 1).unwrap()
    }

    #[test]
    fn test_describe_accolade_with_cash_bonus() {
        let event = StandingEvent::Accolade(AccoladeEvent {
            faction_id: "FS".to_string(),
            date: date(),
            previous_level: AccoladeLevel::CashBonusI,
            new_level: AccoladeLevel::CashBonusII,
            payload: AccoladeLevel::CashBonusII.payload(),
        });
        assert_eq!(
            describe_event(&event),
            "3025-11-01 [FS]: accolade - Cash Bonus II (cash bonus, tier 2)"
        );
    }

    #[test]
    fn test_describe_censure() {
        let event = StandingEvent::Censure(CensureEvent {
            faction_id: "CC".to_string(),
            date: date(),
            previous_level: CensureLevel::None,
            new_level: CensureLevel::FormalWarning,
        });
        assert_eq!(
            describe_event(&event),
            "3025-11-01 [CC]: censure - Formal Warning; a formal warning has been issued"
        );
    }

    #[test]
    fn test_describe_standing_change() {
        let event = StandingEvent::StandingChange(StandingChangeEvent {
            faction_id: "LA".to_string(),
            date: date(),
            previous_level: StandingLevel::Neutral,
            new_level: StandingLevel::Warm,
            regard: 10.5,
            reason: "contract_success".to_string(),
        });
        let line = describe_event(&event);
        assert!(line.contains("Neutral to Warm"));
        assert!(line.contains("10.50"));
    }

    #[test]
    fn test_day_report_preserves_order() {
        let events = vec![
            StandingEvent::Censure(CensureEvent {
                faction_id: "CC".to_string(),
                date: date(),
                previous_level: CensureLevel::FormalWarning,
                new_level: CensureLevel::NewsArticle,
            }),
            StandingEvent::Accolade(AccoladeEvent {
                faction_id: "LA".to_string(),
                date: date(),
                previous_level: AccoladeLevel::None,
                new_level: AccoladeLevel::TakingNotice,
                payload: None,
            }),
        ];
        let lines = day_report(&events);
        assert_eq!(lines.len(), 2);
        assert!(lines[0].contains("[CC]"));
        assert!(lines[1].contains("[LA]"));
        assert!(day_report(&[]).is_empty());
    }
}

#[cfg(test)]
mod tests {
    use super::super::*;
    use crate::calendar::{build_quarter_days, DayStatus};
    use crate::streak::tally_streak;
    use chrono::NaiveDate;

    #[test]
    fn test_default_seed_builds() {
        let seed = StreakSeed::default();
        let days = build_quarter_days(&seed.calendar).unwrap();

        assert_eq!(days.len(), 98);
        assert_eq!(seed.calendar.red_dates.len(), 3);
        assert_eq!(seed.calendar.automation_dates.len(), 20);
    }

    #[test]
    fn test_default_tracks_follow_ladders() {
        let seed = StreakSeed::default();

        let reached = |track: &StreakTrack| -> Vec<bool> {
            track.milestones.iter().map(|m| m.reached).collect()
        };

        assert_eq!(seed.discipline.current_days, 12);
        assert_eq!(reached(&seed.discipline), vec![true, false, false]);
        assert_eq!(seed.automation.current_days, 8);
        assert_eq!(reached(&seed.automation), vec![true, false, false]);
        assert_eq!(seed.revit.current_days, 12);
        assert_eq!(seed.revit.milestones[1].reward, 50);
    }

    #[test]
    fn test_default_catalog() {
        let seed = StreakSeed::default();

        assert_eq!(seed.products.len(), 26);
        assert!(seed.products.iter().enumerate().all(|(i, p)| p.id == i as u32));
        assert_eq!(seed.balance, seed.goal.current_balance);
    }

    #[test]
    fn test_seed_json_roundtrip_keeps_calendar() {
        let seed = StreakSeed::default();
        let json = serde_json::to_string(&seed).unwrap();
        let parsed: StreakSeed = serde_json::from_str(&json).unwrap();

        let days = build_quarter_days(&parsed.calendar).unwrap();
        let feb_4 = NaiveDate::from_ymd_opt(2026, 2, 4).unwrap();
        let record = days.iter().find(|d| d.date == feb_4).unwrap();
        assert_eq!(record.status, DayStatus::Frozen);
    }

    #[test]
    fn test_minimal_json_seed_uses_defaults_for_optional_sets() {
        let json = r#"{
            "calendar": {
                "window": { "start": "2026-01-01", "end": "2026-01-31" },
                "today": "2026-01-10"
            },
            "discipline": { "current_days": 0, "milestones": [] },
            "automation": { "current_days": 0, "milestones": [] },
            "revit": { "current_days": 0, "milestones": [] },
            "goal": { "product_name": "Кофе", "target_price": 250, "current_balance": 0 },
            "balance": 0
        }"#;

        let seed: StreakSeed = serde_json::from_str(json).unwrap();

        assert!(seed.calendar.red_dates.is_empty());
        assert!(seed.calendar.frozen_range.is_none());
        assert!(seed.products.is_empty());
        assert!(seed.departments.is_empty());
        assert!(seed.daily_tasks.is_empty());
    }

    #[test]
    fn test_discipline_counter_matches_calendar_streak() {
        let seed = StreakSeed::default();
        let tally = tally_streak(&build_quarter_days(&seed.calendar).unwrap());

        assert_eq!(seed.discipline.current_days, tally.current_streak);

        let mut drifted = seed.clone();
        drifted.discipline.current_days = 3;
        let shown = drifted.displayed_track(StreakKind::Discipline, tally.current_streak);
        assert_eq!(shown.current_days, 12);
        assert_eq!(shown.milestones, seed.discipline.milestones);

        let revit = drifted.displayed_track(StreakKind::Revit, tally.current_streak);
        assert_eq!(&revit, drifted.track(StreakKind::Revit));
    }

    #[test]
    fn test_default_contest_data_is_valid() {
        let seed = StreakSeed::default();

        assert_eq!(seed.departments.len(), 5);
        assert!(crate::contest::validate_departments(&seed.departments).is_ok());
        assert!(seed.daily_tasks.iter().all(|t| t.validate().is_ok()));
    }

    #[test]
    fn test_track_lookup_by_kind() {
        let seed = StreakSeed::default();

        assert_eq!(seed.track(StreakKind::Revit).current_days, 12);
        assert_eq!("Automation".parse::<StreakKind>().unwrap(), StreakKind::Automation);
        assert!(matches!(
            "social".parse::<StreakKind>(),
            Err(crate::shared::DomainError::InvalidInput(_))
        ));
    }
}

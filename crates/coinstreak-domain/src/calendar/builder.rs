use chrono::{Datelike, Days, NaiveDate, Weekday};

use super::value_objects::{CalendarSeed, DayRecord, DayStatus};
use crate::shared::{DateRange, DomainError};

/// Build the week-aligned day sequence for the reporting window.
///
/// The sequence starts on the Monday on/before `window.start` and ends on the
/// Sunday on/after `window.end`; padding days are `Out`.
pub fn build_quarter_days(seed: &CalendarSeed) -> Result<Vec<DayRecord>, DomainError> {
    validate_seed(seed)?;

    let grid = DateRange::new(week_start(seed.window.start())?, week_end(seed.window.end())?)?;

    let mut days = Vec::with_capacity(grid.days() as usize);
    days.extend(grid.iter_days().map(|date| classify(seed, date)));

    debug_assert_eq!(days.len() % 7, 0);
    Ok(days)
}

fn validate_seed(seed: &CalendarSeed) -> Result<(), DomainError> {
    seed.window
        .validate()
        .map_err(|e| DomainError::InvalidRange(format!("reporting window: {}", e.message())))?;

    if let Some(frozen) = &seed.frozen_range {
        frozen
            .validate()
            .map_err(|e| DomainError::InvalidRange(format!("frozen range: {}", e.message())))?;

        if !seed.window.contains_range(frozen) {
            return Err(DomainError::InvalidRange(format!(
                "frozen range {}..{} is outside the reporting window {}..{}",
                frozen.start(),
                frozen.end(),
                seed.window.start(),
                seed.window.end()
            )));
        }
    }

    Ok(())
}

fn classify(seed: &CalendarSeed, date: NaiveDate) -> DayRecord {
    let status = if !seed.window.contains(date) {
        DayStatus::Out
    } else if is_weekend(date) {
        DayStatus::Gray
    } else if date > seed.today {
        DayStatus::Future
    } else if seed.red_dates.contains(&date) {
        DayStatus::Red
    } else if seed.frozen_range.is_some_and(|r| r.contains(date)) {
        DayStatus::Frozen
    } else {
        DayStatus::Green
    };

    DayRecord {
        date,
        status,
        automation: status.is_reportable() && seed.automation_dates.contains(&date),
    }
}

fn is_weekend(date: NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

/// Monday on or before `date`.
pub(crate) fn week_start(date: NaiveDate) -> Result<NaiveDate, DomainError> {
    let offset = u64::from(date.weekday().num_days_from_monday());
    date.checked_sub_days(Days::new(offset)).ok_or_else(|| {
        DomainError::InvalidRange(format!("no Monday on or before {} in the calendar", date))
    })
}

/// Sunday on or after `date`.
pub(crate) fn week_end(date: NaiveDate) -> Result<NaiveDate, DomainError> {
    let offset = 6 - u64::from(date.weekday().num_days_from_monday());
    date.checked_add_days(Days::new(offset)).ok_or_else(|| {
        DomainError::InvalidRange(format!("no Sunday on or after {} in the calendar", date))
    })
}

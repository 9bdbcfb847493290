use chrono::Datelike;

use super::value_objects::{DayRecord, DayStatus, MonthGroup, MonthLocale};
use crate::shared::DomainError;

pub const DAYS_PER_WEEK: usize = 7;

/// Split a day sequence into Monday..Sunday columns.
pub fn chunk_weeks(days: &[DayRecord]) -> Result<Vec<Vec<DayRecord>>, DomainError> {
    if days.len() % DAYS_PER_WEEK != 0 {
        return Err(DomainError::UnalignedSequence(days.len()));
    }

    Ok(days
        .chunks_exact(DAYS_PER_WEEK)
        .map(|week| week.to_vec())
        .collect())
}

/// Label week columns with the month most of their in-window days belong to.
///
/// Consecutive weeks with the same month share one group. A week with no
/// in-window day belongs to no group and ends the current run.
pub fn group_weeks_by_month(
    weeks: &[Vec<DayRecord>],
    locale: MonthLocale,
) -> Result<Vec<MonthGroup>, DomainError> {
    let mut groups: Vec<MonthGroup> = Vec::new();
    let mut previous: Option<(i32, u32)> = None;

    for (index, week) in weeks.iter().enumerate() {
        if week.len() != DAYS_PER_WEEK {
            return Err(DomainError::UnalignedSequence(week.len()));
        }

        let Some(month) = dominant_month(week) else {
            previous = None;
            continue;
        };

        let extends_run = previous == Some(month);
        previous = Some(month);

        if extends_run {
            if let Some(group) = groups.last_mut() {
                group.week_count += 1;
                continue;
            }
        }

        groups.push(MonthGroup {
            key: format!("{:04}-{:02}", month.0, month.1),
            display_name: locale.month_name(month.1),
            start_week_index: index,
            week_count: 1,
        });
    }

    Ok(groups)
}

/// (year, month) holding the most non-`Out` days; ties go to the month seen first.
fn dominant_month(week: &[DayRecord]) -> Option<(i32, u32)> {
    let mut tally: Vec<((i32, u32), usize)> = Vec::with_capacity(2);

    for day in week.iter().filter(|d| d.status != DayStatus::Out) {
        let month = (day.date.year(), day.date.month());
        match tally.iter_mut().find(|(m, _)| *m == month) {
            Some((_, count)) => *count += 1,
            None => tally.push((month, 1)),
        }
    }

    let mut best: Option<((i32, u32), usize)> = None;
    for (month, count) in tally {
        if best.is_none_or(|(_, c)| count > c) {
            best = Some((month, count));
        }
    }
    best.map(|(month, _)| month)
}

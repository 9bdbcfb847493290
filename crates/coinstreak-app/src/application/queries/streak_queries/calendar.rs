use log::{info, warn};

use crate::application::dtos::{CalendarDayDto, CalendarDto, MonthLabelDto, StreakTallyDto};
use coinstreak_domain::calendar::{
    build_quarter_days, chunk_weeks, group_weeks_by_month, CalendarSeed, MonthLocale,
};
use coinstreak_domain::shared::DomainError;
use coinstreak_domain::streak::tally_streak;

pub(super) fn build_calendar(
    seed: &CalendarSeed,
    locale: MonthLocale,
) -> Result<CalendarDto, DomainError> {
    let days = build_quarter_days(seed)?;
    let weeks = chunk_weeks(&days)?;
    let months = group_weeks_by_month(&weeks, locale)?;
    let tally = tally_streak(&days);

    if tally.counts.green + tally.counts.red == 0 {
        warn!(
            "[streak] calendar has no reportable days window={}..{} today={}",
            seed.window.start(),
            seed.window.end(),
            seed.today
        );
    } else {
        info!(
            "[streak] calendar window={}..{} days={} weeks={} months={}",
            seed.window.start(),
            seed.window.end(),
            days.len(),
            weeks.len(),
            months.len()
        );
    }

    let dto = CalendarDto {
        window_start: seed.window.start().format("%Y-%m-%d").to_string(),
        window_end: seed.window.end().format("%Y-%m-%d").to_string(),
        today: seed.today.format("%Y-%m-%d").to_string(),
        days: days.iter().map(CalendarDayDto::from).collect(),
        weeks: weeks
            .iter()
            .map(|week| week.iter().map(CalendarDayDto::from).collect())
            .collect(),
        months: months.into_iter().map(MonthLabelDto::from).collect(),
        tally: StreakTallyDto::from(&tally),
    };

    info!(
        "[streak] calendar result current={} longest={} rate={:.2}% automation={}",
        dto.tally.current_streak,
        dto.tally.longest_streak,
        dto.tally.green_rate,
        dto.tally.automation_days
    );

    Ok(dto)
}

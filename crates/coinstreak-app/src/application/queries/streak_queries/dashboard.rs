use log::info;

use super::{calendar, contest, goal, milestone, quests, store};
use crate::application::dtos::DashboardDto;
use coinstreak_domain::calendar::MonthLocale;
use coinstreak_domain::seed::{StreakKind, StreakSeed};
use coinstreak_domain::shared::DomainError;
use coinstreak_domain::store::CategoryFilter;

pub(super) fn build_dashboard(
    seed: &StreakSeed,
    locale: MonthLocale,
) -> Result<DashboardDto, DomainError> {
    let calendar = calendar::build_calendar(&seed.calendar, locale)?;

    let milestones = StreakKind::ALL
        .iter()
        .map(|&kind| {
            let track = seed.displayed_track(kind, calendar.tally.current_streak);
            milestone::build_milestone_progress(&track, kind)
        })
        .collect::<Result<Vec<_>, _>>()?;

    let goal = goal::build_goal_progress(&seed.goal)?;
    let store = store::build_store_catalog(&seed.products, CategoryFilter::All, seed.balance)?;
    let contest = contest::build_contest(seed)?;
    let daily_tasks = quests::build_daily_tasks(&seed.daily_tasks)?;

    info!(
        "[streak] dashboard balance={} current_streak={} products={}",
        seed.balance,
        calendar.tally.current_streak,
        store.products.len()
    );

    Ok(DashboardDto {
        balance: seed.balance,
        calendar,
        milestones,
        goal,
        store,
        contest,
        daily_tasks,
    })
}

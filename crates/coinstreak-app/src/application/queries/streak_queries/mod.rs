use std::sync::Arc;

use crate::application::dtos::{
    CalendarDto, ContestDto, DailyTasksDto, DashboardDto, GoalProgressDto, MilestoneProgressDto,
    StoreCatalogDto,
};
use coinstreak_domain::calendar::{build_quarter_days, MonthLocale};
use coinstreak_domain::seed::{SeedRepository, StreakKind};
use coinstreak_domain::shared::DomainError;
use coinstreak_domain::streak::tally_streak;

mod calendar;
mod contest;
mod dashboard;
mod goal;
mod milestone;
mod quests;
mod store;

#[cfg(test)]
mod tests;

pub struct StreakQueries {
    seed_repo: Arc<dyn SeedRepository>,
    locale: MonthLocale,
}

impl StreakQueries {
    pub fn new(seed_repo: Arc<dyn SeedRepository>, locale: MonthLocale) -> Self {
        Self { seed_repo, locale }
    }

    /// Get the quarter heatmap with week columns, month labels and counters
    pub async fn get_calendar(&self) -> Result<CalendarDto, DomainError> {
        let seed = self.seed_repo.load().await?;
        calendar::build_calendar(&seed.calendar, self.locale)
    }

    /// Get progress towards the next reward of one streak track
    pub async fn get_milestone_progress(
        &self,
        track: StreakKind,
    ) -> Result<MilestoneProgressDto, DomainError> {
        let seed = self.seed_repo.load().await?;
        let displayed = match track {
            StreakKind::Discipline => {
                let days = build_quarter_days(&seed.calendar)?;
                seed.displayed_track(track, tally_streak(&days).current_streak)
            }
            _ => seed.track(track).clone(),
        };
        milestone::build_milestone_progress(&displayed, track)
    }

    /// Get progress towards the savings goal
    pub async fn get_goal_progress(&self) -> Result<GoalProgressDto, DomainError> {
        let seed = self.seed_repo.load().await?;
        goal::build_goal_progress(&seed.goal)
    }

    /// Get store products for a category tab (`all`, `fun`, `food`, `merch`, `upgrade`)
    pub async fn get_store_catalog(&self, filter: &str) -> Result<StoreCatalogDto, DomainError> {
        let filter = filter.parse()?;
        let seed = self.seed_repo.load().await?;
        store::build_store_catalog(&seed.products, filter, seed.balance)
    }

    /// Get both department contest columns and the days left to compete
    pub async fn get_department_contest(&self) -> Result<ContestDto, DomainError> {
        let seed = self.seed_repo.load().await?;
        contest::build_contest(&seed)
    }

    /// Get today's tasks with their bars and the reward summary
    pub async fn get_daily_tasks(&self) -> Result<DailyTasksDto, DomainError> {
        let seed = self.seed_repo.load().await?;
        quests::build_daily_tasks(&seed.daily_tasks)
    }

    /// Get everything the dashboard page shows, from a single seed load
    pub async fn get_dashboard(&self) -> Result<DashboardDto, DomainError> {
        let seed = self.seed_repo.load().await?;
        dashboard::build_dashboard(&seed, self.locale)
    }
}

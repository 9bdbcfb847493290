use std::sync::Arc;

use async_trait::async_trait;
use mockall::mock;

use super::StreakQueries;
use coinstreak_domain::calendar::MonthLocale;
use coinstreak_domain::seed::{SeedRepository, StreakKind, StreakSeed};
use coinstreak_domain::shared::DomainError;

mock! {
    pub SeedRepo {}

    #[async_trait]
    impl SeedRepository for SeedRepo {
        async fn load(&self) -> Result<StreakSeed, DomainError>;
    }
}

fn queries_with(seed: StreakSeed, locale: MonthLocale) -> StreakQueries {
    let mut repo = MockSeedRepo::new();
    repo.expect_load().returning(move || Ok(seed.clone()));
    StreakQueries::new(Arc::new(repo), locale)
}

#[tokio::test]
async fn calendar_for_sample_quarter() {
    let queries = queries_with(StreakSeed::default(), MonthLocale::Russian);

    let calendar = queries.get_calendar().await.unwrap();

    assert_eq!(calendar.days.len(), 98);
    assert_eq!(calendar.weeks.len(), 14);
    assert!(calendar.weeks.iter().all(|w| w.len() == 7));
    assert_eq!(calendar.today, "2026-02-26");

    let labels: Vec<(&str, usize)> = calendar
        .months
        .iter()
        .map(|m| (m.label.as_str(), m.week_count))
        .collect();
    assert_eq!(labels, vec![("Январь", 5), ("Февраль", 4), ("Март", 5)]);

    assert_eq!(calendar.tally.current_streak, 12);
    assert_eq!(calendar.tally.red_days, 3);
    assert_eq!(calendar.tally.last_green_date.as_deref(), Some("2026-02-26"));

    let jan_15 = calendar.days.iter().find(|d| d.date == "2026-01-15").unwrap();
    assert_eq!(jan_15.status, "red");
}

#[tokio::test]
async fn calendar_uses_configured_locale() {
    let queries = queries_with(StreakSeed::default(), MonthLocale::English);

    let calendar = queries.get_calendar().await.unwrap();

    assert_eq!(calendar.months[1].label, "February");
    assert_eq!(calendar.months[1].key, "2026-02");
}

#[tokio::test]
async fn milestone_progress_per_track() {
    let queries = queries_with(StreakSeed::default(), MonthLocale::Russian);

    let revit = queries
        .get_milestone_progress(StreakKind::Revit)
        .await
        .unwrap();
    assert_eq!(revit.track, "revit");
    assert!((revit.percent - 21.739).abs() < 0.01);
    assert_eq!(revit.next_milestone.unwrap().threshold_days, 30);
    assert_eq!(revit.milestones.len(), 3);

    let automation = queries
        .get_milestone_progress(StreakKind::Automation)
        .await
        .unwrap();
    // 8 days between the 5 and 14 day marks
    assert!((automation.percent - 100.0 / 3.0).abs() < 0.01);
    assert_eq!(automation.previous_milestone.threshold_days, 5);
}

#[tokio::test]
async fn empty_milestone_list_surfaces_error() {
    let mut seed = StreakSeed::default();
    seed.discipline.milestones.clear();
    let queries = queries_with(seed, MonthLocale::Russian);

    let err = queries
        .get_milestone_progress(StreakKind::Discipline)
        .await
        .unwrap_err();

    assert!(matches!(err, DomainError::EmptyMilestoneList));
}

#[tokio::test]
async fn goal_progress_for_sample_balance() {
    let queries = queries_with(StreakSeed::default(), MonthLocale::Russian);

    let goal = queries.get_goal_progress().await.unwrap();

    assert_eq!(goal.percent, 58);
    assert_eq!(goal.remaining, 2550);
    assert!(!goal.reached);
}

#[tokio::test]
async fn store_catalog_filters_and_marks_affordability() {
    let queries = queries_with(StreakSeed::default(), MonthLocale::Russian);

    let food = queries.get_store_catalog("food").await.unwrap();

    assert_eq!(food.filter, "food");
    assert_eq!(food.total_count, 26);
    let ids: Vec<u32> = food.products.iter().map(|p| p.id).collect();
    assert_eq!(ids, vec![6, 7, 8, 9, 10, 11]);
    // Everything in the food tab costs less than 3450
    assert!(food.products.iter().all(|p| p.affordable && p.deficit == 0));

    let upgrade = queries.get_store_catalog("upgrade").await.unwrap();
    let chair = upgrade.products.iter().find(|p| p.id == 24).unwrap();
    assert!(!chair.affordable);
    assert_eq!(chair.deficit, 15000 - 3450);
}

#[tokio::test]
async fn unknown_store_filter_skips_repository() {
    let mut repo = MockSeedRepo::new();
    repo.expect_load().never();
    let queries = StreakQueries::new(Arc::new(repo), MonthLocale::Russian);

    let err = queries.get_store_catalog("gadgets").await.unwrap_err();

    assert!(matches!(err, DomainError::InvalidInput(_)));
}

#[tokio::test]
async fn dashboard_loads_seed_once() {
    let mut repo = MockSeedRepo::new();
    repo.expect_load()
        .times(1)
        .returning(|| Ok(StreakSeed::default()));
    let queries = StreakQueries::new(Arc::new(repo), MonthLocale::Russian);

    let dashboard = queries.get_dashboard().await.unwrap();

    assert_eq!(dashboard.balance, 3450);
    assert_eq!(dashboard.milestones.len(), 3);
    assert_eq!(dashboard.milestones[0].track, "discipline");
    assert_eq!(dashboard.store.products.len(), 26);
    assert_eq!(dashboard.goal.percent, 58);
    assert_eq!(dashboard.contest.standings.len(), 2);
    assert_eq!(dashboard.daily_tasks.task_count, 2);
}

#[tokio::test]
async fn repository_errors_propagate() {
    let mut repo = MockSeedRepo::new();
    repo.expect_load()
        .returning(|| Err(DomainError::NotFound("seed.json".to_string())));
    let queries = StreakQueries::new(Arc::new(repo), MonthLocale::Russian);

    let err = queries.get_dashboard().await.unwrap_err();

    assert!(matches!(err, DomainError::NotFound(_)));
}

#[tokio::test]
async fn discipline_counter_follows_calendar_streak() {
    let mut seed = StreakSeed::default();
    // A stale stored counter must not leak onto the dashboard
    seed.discipline.current_days = 4;
    let queries = queries_with(seed, MonthLocale::Russian);

    let calendar = queries.get_calendar().await.unwrap();
    let discipline = queries
        .get_milestone_progress(StreakKind::Discipline)
        .await
        .unwrap();
    let dashboard = queries.get_dashboard().await.unwrap();

    assert_eq!(discipline.current_days, calendar.tally.current_streak);
    assert_eq!(discipline.current_days, 12);
    assert!((discipline.percent - 21.739).abs() < 0.01);
    assert_eq!(dashboard.milestones[0], discipline);
}

#[tokio::test]
async fn department_contest_for_sample_month() {
    let queries = queries_with(StreakSeed::default(), MonthLocale::Russian);

    let contest = queries.get_department_contest().await.unwrap();

    assert_eq!(contest.days_until_month_end, 2);
    assert_eq!(contest.standings.len(), 2);

    let ws = &contest.standings[0];
    assert_eq!(ws.discipline, "worksection");
    assert_eq!(ws.prize, 150);
    assert_eq!(ws.leader.as_deref(), Some("КО"));
    assert_eq!(ws.current_rank, Some(1));
    assert_eq!(ws.gap_to_leader, None);

    let automation = &contest.standings[1];
    assert_eq!(automation.prize, 200);
    assert_eq!(automation.leader.as_deref(), Some("АО"));
    assert_eq!(automation.current_rank, Some(2));
    assert_eq!(automation.gap_to_leader, Some(14));
    assert!(automation.departments[1].is_current);
}

#[tokio::test]
async fn daily_tasks_with_reward_summary() {
    let queries = queries_with(StreakSeed::default(), MonthLocale::Russian);

    let daily = queries.get_daily_tasks().await.unwrap();

    assert_eq!(daily.task_count, 2);
    assert_eq!(daily.completed_count, 0);
    assert_eq!(daily.total_reward, 3);
    assert_eq!(daily.tasks[0].percent, 75.0);
    assert_eq!(daily.tasks[0].source, "worksection");
    assert_eq!(daily.tasks[1].percent, 0.0);
}

#[tokio::test]
async fn invalid_daily_task_surfaces_error() {
    let mut seed = StreakSeed::default();
    seed.daily_tasks[0].total = 0;
    let queries = queries_with(seed, MonthLocale::Russian);

    let err = queries.get_daily_tasks().await.unwrap_err();

    assert!(matches!(err, DomainError::Validation(_)));
}

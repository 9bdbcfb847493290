use crate::application::dtos::{
    CalendarDto, ContestDto, DailyTasksDto, DashboardDto, GoalProgressDto, MilestoneProgressDto,
    StoreCatalogDto,
};
use std::path::PathBuf;

use crate::application::services::LogLevel;
use crate::application::ResultExt;
use crate::presentation::error::CommandError;
use crate::presentation::state::AppState;
use coinstreak_domain::calendar::MonthLocale;
use coinstreak_domain::seed::StreakKind;

/// Get the quarter heatmap
pub async fn get_streak_calendar(state: &AppState) -> Result<CalendarDto, CommandError> {
    Ok(state.streak_queries.get_calendar().await?)
}

/// Get milestone progress for `discipline`, `automation` or `revit`
pub async fn get_milestone_progress(
    track: String,
    state: &AppState,
) -> Result<MilestoneProgressDto, CommandError> {
    let kind: StreakKind = track.parse()?;
    Ok(state.streak_queries.get_milestone_progress(kind).await?)
}

pub async fn get_goal_progress(state: &AppState) -> Result<GoalProgressDto, CommandError> {
    Ok(state.streak_queries.get_goal_progress().await?)
}

pub async fn get_store_catalog(
    filter: String,
    state: &AppState,
) -> Result<StoreCatalogDto, CommandError> {
    Ok(state.streak_queries.get_store_catalog(&filter).await?)
}

/// Department contest standings for both prize columns
pub async fn get_department_contest(state: &AppState) -> Result<ContestDto, CommandError> {
    Ok(state.streak_queries.get_department_contest().await?)
}

pub async fn get_daily_tasks(state: &AppState) -> Result<DailyTasksDto, CommandError> {
    Ok(state.streak_queries.get_daily_tasks().await?)
}

pub async fn get_dashboard(state: &AppState) -> Result<DashboardDto, CommandError> {
    Ok(state.streak_queries.get_dashboard().await?)
}

/// Dashboard rendered as pretty JSON
pub async fn export_dashboard_json(state: &AppState) -> Result<String, CommandError> {
    let dashboard = state.streak_queries.get_dashboard().await?;
    Ok(serde_json::to_string_pretty(&dashboard).to_serialization_err()?)
}

/// Get current log level
pub async fn get_log_level(state: &AppState) -> Result<String, CommandError> {
    Ok(state.config.get_log_level().as_str().to_string())
}

/// Set log level
pub async fn set_log_level(level: String, state: &AppState) -> Result<(), CommandError> {
    let log_level: LogLevel = level.parse()?;

    state.config.set_log_level(log_level).to_infra_err()?;
    Ok(())
}

/// Set month label language (`ru` or `en`). Takes effect on next start.
pub async fn set_locale(locale: String, state: &AppState) -> Result<(), CommandError> {
    let locale: MonthLocale = locale.parse()?;
    state.config.set_locale(locale)?;
    Ok(())
}

/// Set the seed file used on next start; `None` restores the built-in sample
pub async fn set_seed_path(path: Option<String>, state: &AppState) -> Result<(), CommandError> {
    state.config.set_seed_path(path.map(PathBuf::from))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::services::ConfigService;
    use coinstreak_domain::seed::StreakSeed;

    fn sample_state(dir: &std::path::Path) -> AppState {
        AppState::new(ConfigService::new(dir).unwrap(), None)
    }

    #[tokio::test]
    async fn test_unknown_track_is_invalid_input() {
        let dir = tempfile::tempdir().unwrap();
        let state = sample_state(dir.path());

        let err = get_milestone_progress("social".to_string(), &state)
            .await
            .unwrap_err();

        assert_eq!(err.code, 6002);
    }

    #[tokio::test]
    async fn test_export_dashboard_json() {
        let dir = tempfile::tempdir().unwrap();
        let state = sample_state(dir.path());

        let json = export_dashboard_json(&state).await.unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["balance"], 3450);
        assert_eq!(value["calendar"]["days"].as_array().unwrap().len(), 98);
        assert_eq!(value["calendar"]["months"][0]["label"], "Январь");
        assert_eq!(value["contest"]["days_until_month_end"], 2);
        assert_eq!(value["daily_tasks"]["total_reward"], 3);
    }

    #[tokio::test]
    async fn test_contest_and_daily_task_commands() {
        let dir = tempfile::tempdir().unwrap();
        let state = sample_state(dir.path());

        let contest = get_department_contest(&state).await.unwrap();
        assert_eq!(contest.standings[1].gap_to_leader, Some(14));

        let daily = get_daily_tasks(&state).await.unwrap();
        assert_eq!(daily.tasks.len(), 2);
    }

    #[tokio::test]
    async fn test_discipline_command_matches_calendar() {
        let dir = tempfile::tempdir().unwrap();
        let state = sample_state(dir.path());

        let calendar = get_streak_calendar(&state).await.unwrap();
        let discipline = get_milestone_progress("discipline".to_string(), &state)
            .await
            .unwrap();

        assert_eq!(discipline.current_days, calendar.tally.current_streak);
    }

    #[tokio::test]
    async fn test_seed_override_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let state = AppState::new(
            ConfigService::new(dir.path()).unwrap(),
            Some(dir.path().join("absent.json")),
        );

        let err = get_dashboard(&state).await.unwrap_err();

        assert_eq!(err.code, 2001);
        assert!(err.recoverable);
    }

    #[tokio::test]
    async fn test_configured_seed_path_is_used() {
        let dir = tempfile::tempdir().unwrap();
        let seed_path = dir.path().join("seed.json");
        let mut seed = StreakSeed::default();
        seed.balance = 7000;
        std::fs::write(&seed_path, serde_json::to_string(&seed).unwrap()).unwrap();

        let config = ConfigService::new(dir.path()).unwrap();
        config.set_seed_path(Some(seed_path)).unwrap();
        let state = AppState::new(config, None);

        let catalog = get_store_catalog("upgrade".to_string(), &state).await.unwrap();
        let mouse = catalog.products.iter().find(|p| p.id == 22).unwrap();
        assert!(mouse.affordable);
    }

    #[tokio::test]
    async fn test_log_level_commands() {
        let dir = tempfile::tempdir().unwrap();
        let state = sample_state(dir.path());

        set_log_level("warn".to_string(), &state).await.unwrap();
        assert_eq!(get_log_level(&state).await.unwrap(), "warn");

        let err = set_log_level("loud".to_string(), &state).await.unwrap_err();
        assert_eq!(err.code, 6001);
    }

    #[tokio::test]
    async fn test_config_commands_persist() {
        let dir = tempfile::tempdir().unwrap();
        let state = sample_state(dir.path());

        set_locale("en".to_string(), &state).await.unwrap();
        set_seed_path(Some("/tmp/q2.json".to_string()), &state)
            .await
            .unwrap();

        let reloaded = ConfigService::new(dir.path()).unwrap().config();
        assert_eq!(reloaded.locale, MonthLocale::English);
        assert_eq!(reloaded.seed_path, Some(PathBuf::from("/tmp/q2.json")));

        let err = set_locale("de".to_string(), &state).await.unwrap_err();
        assert_eq!(err.code, 6002);
    }
}

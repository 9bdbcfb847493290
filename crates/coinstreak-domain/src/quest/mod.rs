use serde::{Deserialize, Serialize};

use crate::shared::DomainError;

/// System a daily task is checked against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskSource {
    Worksection,
    Revit,
    Social,
}

impl TaskSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            TaskSource::Worksection => "worksection",
            TaskSource::Revit => "revit",
            TaskSource::Social => "social",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyTask {
    pub id: u32,
    pub title: String,
    pub description: String,
    pub reward: u32,
    pub icon: String,
    pub progress: u32,
    pub total: u32,
    pub completed: bool,
    pub source: TaskSource,
}

impl DailyTask {
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.total == 0 {
            return Err(DomainError::Validation(format!(
                "daily task {} has a zero target",
                self.id
            )));
        }
        Ok(())
    }

    /// Bar fill, capped at 100.
    pub fn progress_percent(&self) -> Result<f64, DomainError> {
        self.validate()?;
        Ok((f64::from(self.progress) / f64::from(self.total) * 100.0).min(100.0))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailySummary {
    pub completed_count: usize,
    pub task_count: usize,
    pub total_reward: u32,  // everything on offer today
    pub earned_reward: u32, // completed tasks only
}

pub fn summarize_daily_tasks(tasks: &[DailyTask]) -> DailySummary {
    DailySummary {
        completed_count: tasks.iter().filter(|t| t.completed).count(),
        task_count: tasks.len(),
        total_reward: tasks.iter().map(|t| t.reward).sum(),
        earned_reward: tasks.iter().filter(|t| t.completed).map(|t| t.reward).sum(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed::StreakSeed;

    fn task(id: u32, reward: u32, progress: u32, total: u32, completed: bool) -> DailyTask {
        DailyTask {
            id,
            title: format!("Задание {}", id),
            description: String::new(),
            reward,
            icon: "✅".to_string(),
            progress,
            total,
            completed,
            source: TaskSource::Social,
        }
    }

    #[test]
    fn test_sample_tasks_summary() {
        let seed = StreakSeed::default();
        let summary = summarize_daily_tasks(&seed.daily_tasks);

        assert_eq!(summary.task_count, 2);
        assert_eq!(summary.completed_count, 0);
        assert_eq!(summary.total_reward, 3);
        assert_eq!(summary.earned_reward, 0);
        assert_eq!(seed.daily_tasks[0].progress_percent().unwrap(), 75.0);
    }

    #[test]
    fn test_earned_reward_counts_completed_only() {
        let tasks = vec![task(1, 2, 1, 1, true), task(2, 5, 0, 3, false)];
        let summary = summarize_daily_tasks(&tasks);

        assert_eq!(summary.completed_count, 1);
        assert_eq!(summary.total_reward, 7);
        assert_eq!(summary.earned_reward, 2);
    }

    #[test]
    fn test_overshoot_is_capped() {
        assert_eq!(task(1, 1, 12, 8, true).progress_percent().unwrap(), 100.0);
    }

    #[test]
    fn test_zero_target_is_rejected() {
        let err = task(4, 1, 0, 0, false).progress_percent().unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }

    #[test]
    fn test_empty_day() {
        let summary = summarize_daily_tasks(&[]);
        assert_eq!(summary.task_count, 0);
        assert_eq!(summary.total_reward, 0);
    }
}

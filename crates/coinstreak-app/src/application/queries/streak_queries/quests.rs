use log::{debug, info};

use crate::application::dtos::{DailyTaskDto, DailyTasksDto};
use coinstreak_domain::quest::{summarize_daily_tasks, DailyTask};
use coinstreak_domain::shared::DomainError;

pub(super) fn build_daily_tasks(tasks: &[DailyTask]) -> Result<DailyTasksDto, DomainError> {
    let summary = summarize_daily_tasks(tasks);

    let tasks = tasks
        .iter()
        .map(|task| {
            let percent = task.progress_percent()?;
            debug!(
                "[streak] daily task id={} source={} progress={}/{}",
                task.id,
                task.source.as_str(),
                task.progress,
                task.total
            );
            Ok(DailyTaskDto::new(task, percent))
        })
        .collect::<Result<Vec<_>, DomainError>>()?;

    info!(
        "[streak] daily tasks completed={}/{} reward={}/{}",
        summary.completed_count, summary.task_count, summary.earned_reward, summary.total_reward
    );

    Ok(DailyTasksDto {
        completed_count: summary.completed_count,
        task_count: summary.task_count,
        total_reward: summary.total_reward,
        earned_reward: summary.earned_reward,
        tasks,
    })
}

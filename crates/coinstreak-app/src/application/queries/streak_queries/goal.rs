use log::info;

use crate::application::dtos::GoalProgressDto;
use coinstreak_domain::goal::SavingsGoal;
use coinstreak_domain::shared::DomainError;

pub(super) fn build_goal_progress(goal: &SavingsGoal) -> Result<GoalProgressDto, DomainError> {
    let progress = goal.progress()?;

    info!(
        "[streak] goal product={} balance={}/{} percent={} remaining={}",
        goal.product_name,
        goal.current_balance,
        goal.target_price,
        progress.percent,
        progress.remaining
    );

    Ok(GoalProgressDto::new(goal, progress))
}

use super::value_objects::{MilestoneRecord, ProgressSummary};
use crate::shared::DomainError;

/// Progress from the last reached milestone towards the next one.
pub fn compute_milestone_progress(
    current_days: u32,
    milestones: &[MilestoneRecord],
) -> Result<ProgressSummary, DomainError> {
    if milestones.is_empty() {
        return Err(DomainError::EmptyMilestoneList);
    }

    if let Some(pair) = milestones
        .windows(2)
        .find(|w| w[1].threshold_days < w[0].threshold_days)
    {
        return Err(DomainError::InvalidInput(format!(
            "milestone thresholds must ascend, got {} after {}",
            pair[1].threshold_days, pair[0].threshold_days
        )));
    }

    if let Some(pair) = milestones.windows(2).find(|w| !w[0].reached && w[1].reached) {
        return Err(DomainError::InvalidInput(format!(
            "milestone {} is reached but the earlier {} is not",
            pair[1].threshold_days, pair[0].threshold_days
        )));
    }

    let next_milestone = milestones.iter().find(|m| !m.reached).copied();
    let previous_milestone = milestones
        .iter()
        .rev()
        .find(|m| m.reached)
        .copied()
        .unwrap_or_else(MilestoneRecord::baseline);

    let percent = match next_milestone {
        None => 100.0,
        Some(next) if next.threshold_days == previous_milestone.threshold_days => {
            if current_days >= next.threshold_days {
                100.0
            } else {
                0.0
            }
        }
        Some(next) => {
            let from = f64::from(previous_milestone.threshold_days);
            let to = f64::from(next.threshold_days);
            ((f64::from(current_days) - from) / (to - from) * 100.0).clamp(0.0, 100.0)
        }
    };

    Ok(ProgressSummary {
        percent,
        next_milestone,
        previous_milestone,
    })
}

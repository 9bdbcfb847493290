use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MilestoneRecord {
    pub threshold_days: u32,
    pub reward: u32, // coins
    pub reached: bool,
}

impl MilestoneRecord {
    pub fn new(threshold_days: u32, reward: u32, reached: bool) -> Self {
        Self {
            threshold_days,
            reward,
            reached,
        }
    }

    /// Build an ascending ladder whose `reached` flags follow `current_days`.
    pub fn ladder(steps: &[(u32, u32)], current_days: u32) -> Vec<Self> {
        steps
            .iter()
            .map(|&(threshold_days, reward)| {
                Self::new(threshold_days, reward, current_days >= threshold_days)
            })
            .collect()
    }

    /// Starting point used when nothing has been reached yet.
    pub fn baseline() -> Self {
        Self::new(0, 0, true)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgressSummary {
    pub percent: f64, // 0.0 - 100.0
    pub next_milestone: Option<MilestoneRecord>,
    pub previous_milestone: MilestoneRecord,
}

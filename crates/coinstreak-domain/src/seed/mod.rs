mod defaults;
mod repository;

#[cfg(test)]
mod defaults_test;

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::calendar::CalendarSeed;
use crate::contest::Department;
use crate::goal::SavingsGoal;
use crate::milestone::MilestoneRecord;
use crate::quest::DailyTask;
use crate::shared::DomainError;
use crate::store::Product;

pub use repository::SeedRepository;

/// One counter on the dashboard together with its reward ladder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StreakTrack {
    pub current_days: u32,
    pub milestones: Vec<MilestoneRecord>,
}

impl StreakTrack {
    pub fn new(current_days: u32, milestones: Vec<MilestoneRecord>) -> Self {
        Self {
            current_days,
            milestones,
        }
    }

    /// Track whose `reached` flags are derived from `current_days`.
    pub fn from_ladder(current_days: u32, steps: &[(u32, u32)]) -> Self {
        Self::new(current_days, MilestoneRecord::ladder(steps, current_days))
    }
}

/// Everything the dashboard is rendered from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StreakSeed {
    pub calendar: CalendarSeed,
    pub discipline: StreakTrack,
    pub automation: StreakTrack,
    pub revit: StreakTrack,
    pub goal: SavingsGoal,
    pub balance: u32,
    #[serde(default)]
    pub products: Vec<Product>,
    #[serde(default)]
    pub departments: Vec<Department>,
    #[serde(default)]
    pub daily_tasks: Vec<DailyTask>,
}

impl StreakSeed {
    pub fn track(&self, kind: StreakKind) -> &StreakTrack {
        match kind {
            StreakKind::Discipline => &self.discipline,
            StreakKind::Automation => &self.automation,
            StreakKind::Revit => &self.revit,
        }
    }

    /// Track as shown on the dashboard.
    ///
    /// The discipline counter is the calendar's current streak, so the stored
    /// `discipline.current_days` never disagrees with the heatmap. Reward flags
    /// are kept as stored.
    pub fn displayed_track(&self, kind: StreakKind, calendar_streak: u32) -> StreakTrack {
        match kind {
            StreakKind::Discipline => {
                StreakTrack::new(calendar_streak, self.discipline.milestones.clone())
            }
            _ => self.track(kind).clone(),
        }
    }
}

/// Which dashboard counter a milestone ladder belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StreakKind {
    Discipline,
    Automation,
    Revit,
}

impl StreakKind {
    pub const ALL: [StreakKind; 3] = [
        StreakKind::Discipline,
        StreakKind::Automation,
        StreakKind::Revit,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            StreakKind::Discipline => "discipline",
            StreakKind::Automation => "automation",
            StreakKind::Revit => "revit",
        }
    }
}

impl FromStr for StreakKind {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "discipline" => Ok(StreakKind::Discipline),
            "automation" => Ok(StreakKind::Automation),
            "revit" => Ok(StreakKind::Revit),
            other => Err(DomainError::InvalidInput(format!(
                "unknown streak track '{}'",
                other
            ))),
        }
    }
}

//! Streak counting over a built day sequence.
//!
//! Green days extend the streak, red days reset it, frozen and weekend days
//! keep it as is. Future and padding days are not looked at.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::calendar::{DayRecord, DayStatus};


#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusCounts {
    pub green: u32,
    pub red: u32,
    pub gray: u32,
    pub frozen: u32,
    pub future: u32,
    pub out: u32,
}

impl StatusCounts {
    fn record(&mut self, status: DayStatus) {
        let slot = match status {
            DayStatus::Green => &mut self.green,
            DayStatus::Red => &mut self.red,
            DayStatus::Gray => &mut self.gray,
            DayStatus::Frozen => &mut self.frozen,
            DayStatus::Future => &mut self.future,
            DayStatus::Out => &mut self.out,
        };
        *slot += 1;
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StreakTally {
    pub current_streak: u32,
    pub longest_streak: u32,
    pub automation_days: u32,
    pub last_green_date: Option<NaiveDate>,
    pub counts: StatusCounts,
}

impl StreakTally {
    /// Share of reportable days that were green, 0.0 - 100.0.
    pub fn green_rate(&self) -> f64 {
        let reportable = self.counts.green + self.counts.red;
        if reportable == 0 {
            return 0.0;
        }
        f64::from(self.counts.green) / f64::from(reportable) * 100.0
    }
}

/// Walk `days` in order and count streaks and statuses.
pub fn tally_streak(days: &[DayRecord]) -> StreakTally {
    let mut tally = StreakTally::default();

    for day in days {
        tally.counts.record(day.status);
        if day.automation {
            tally.automation_days += 1;
        }

        match day.status {
            DayStatus::Green => {
                tally.current_streak += 1;
                tally.longest_streak = tally.longest_streak.max(tally.current_streak);
                tally.last_green_date = Some(day.date);
            }
            DayStatus::Red => tally.current_streak = 0,
            DayStatus::Frozen | DayStatus::Gray | DayStatus::Future | DayStatus::Out => {}
        }
    }

    tally
}

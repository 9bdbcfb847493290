use std::collections::BTreeSet;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::shared::{DateRange, DomainError};

/// Heatmap cell classification, one per calendar day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DayStatus {
    Green,
    Red,
    Gray,
    Frozen,
    Future,
    Out,
}

impl DayStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            DayStatus::Green => "green",
            DayStatus::Red => "red",
            DayStatus::Gray => "gray",
            DayStatus::Frozen => "frozen",
            DayStatus::Future => "future",
            DayStatus::Out => "out",
        }
    }

    /// Weekday inside the window that has already happened and is not on leave.
    pub fn is_reportable(&self) -> bool {
        matches!(self, DayStatus::Green | DayStatus::Red)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayRecord {
    pub date: NaiveDate, // YYYY-MM-DD
    pub status: DayStatus,
    pub automation: bool,
}

/// Everything the quarter calendar is derived from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarSeed {
    pub window: DateRange,
    pub today: NaiveDate,
    #[serde(default)]
    pub red_dates: BTreeSet<NaiveDate>,
    #[serde(default)]
    pub frozen_range: Option<DateRange>,
    #[serde(default)]
    pub automation_dates: BTreeSet<NaiveDate>,
}

impl CalendarSeed {
    pub fn new(window: DateRange, today: NaiveDate) -> Self {
        Self {
            window,
            today,
            red_dates: BTreeSet::new(),
            frozen_range: None,
            automation_dates: BTreeSet::new(),
        }
    }

    pub fn with_red_dates(mut self, dates: impl IntoIterator<Item = NaiveDate>) -> Self {
        self.red_dates.extend(dates);
        self
    }

    pub fn with_frozen_range(mut self, range: DateRange) -> Self {
        self.frozen_range = Some(range);
        self
    }

    pub fn with_automation_dates(mut self, dates: impl IntoIterator<Item = NaiveDate>) -> Self {
        self.automation_dates.extend(dates);
        self
    }
}

/// Language used for month labels above the week columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MonthLocale {
    #[default]
    Russian,
    English,
}

impl MonthLocale {
    const RUSSIAN: [&'static str; 12] = [
        "январь", "февраль", "март", "апрель", "май", "июнь", "июль", "август", "сентябрь",
        "октябрь", "ноябрь", "декабрь",
    ];

    const ENGLISH: [&'static str; 12] = [
        "january", "february", "march", "april", "may", "june", "july", "august", "september",
        "october", "november", "december",
    ];

    /// Capitalized nominative month name; `month` is 1-based.
    pub fn month_name(&self, month: u32) -> String {
        let names = match self {
            MonthLocale::Russian => &Self::RUSSIAN,
            MonthLocale::English => &Self::ENGLISH,
        };
        let index = (month.clamp(1, 12) - 1) as usize;
        capitalize(names[index])
    }
}

impl FromStr for MonthLocale {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "ru" | "russian" => Ok(MonthLocale::Russian),
            "en" | "english" => Ok(MonthLocale::English),
            other => Err(DomainError::InvalidInput(format!("unknown locale '{}'", other))),
        }
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Contiguous run of week columns sharing one month label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthGroup {
    pub key: String, // YYYY-MM
    pub display_name: String,
    pub start_week_index: usize,
    pub week_count: usize,
}

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::DomainError;

/// Inclusive date interval.
///
/// `new` rejects inverted bounds. Values coming through serde are checked
/// with [`DateRange::validate`] by whoever consumes them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DateRange {
    start: NaiveDate,
    end: NaiveDate,
}

impl DateRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self, DomainError> {
        let range = Self { start, end };
        range.validate()?;
        Ok(range)
    }

    /// Single-day range.
    pub fn single(date: NaiveDate) -> Self {
        Self {
            start: date,
            end: date,
        }
    }

    pub fn validate(&self) -> Result<(), DomainError> {
        if self.start > self.end {
            return Err(DomainError::InvalidRange(format!(
                "start {} is after end {}",
                self.start, self.end
            )));
        }
        Ok(())
    }

    pub fn start(&self) -> NaiveDate {
        self.start
    }

    pub fn end(&self) -> NaiveDate {
        self.end
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }

    pub fn contains_range(&self, other: &DateRange) -> bool {
        self.contains(other.start) && self.contains(other.end)
    }

    /// Number of days in the range, both ends included.
    pub fn days(&self) -> i64 {
        (self.end - self.start).num_days() + 1
    }

    pub fn iter_days(&self) -> impl Iterator<Item = NaiveDate> {
        let end = self.end;
        self.start.iter_days().take_while(move |d| *d <= end)
    }
}

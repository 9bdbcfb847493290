mod builder;
mod grouping;
mod value_objects;


pub use builder::build_quarter_days;
pub use grouping::{chunk_weeks, group_weeks_by_month, DAYS_PER_WEEK};
pub use value_objects::{CalendarSeed, DayRecord, DayStatus, MonthGroup, MonthLocale};

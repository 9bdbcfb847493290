mod progress;
mod value_objects;


pub use progress::compute_milestone_progress;
pub use value_objects::{MilestoneRecord, ProgressSummary};

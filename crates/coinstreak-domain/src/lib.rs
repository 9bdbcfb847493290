// Domain layer - Pure business logic
// No dependencies on infrastructure or presentation layers

pub mod calendar;
pub mod contest;
pub mod goal;
pub mod milestone;
pub mod quest;
pub mod seed;
pub mod shared;
pub mod store;
pub mod streak;

// Re-exports for convenience
pub use seed::{SeedRepository, StreakKind, StreakSeed};
pub use shared::{DateRange, DomainError};

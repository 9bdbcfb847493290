use async_trait::async_trait;

use super::StreakSeed;
use crate::shared::DomainError;

#[async_trait]
pub trait SeedRepository: Send + Sync {
    /// Load the seed the dashboard is built from.
    ///
    /// Implementations return `NotFound` when the source is missing and
    /// `Deserialization` when it cannot be parsed.
    async fn load(&self) -> Result<StreakSeed, DomainError>;
}

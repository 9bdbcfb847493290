use async_trait::async_trait;

use coinstreak_domain::seed::{SeedRepository, StreakSeed};
use coinstreak_domain::shared::DomainError;

/// Serves a seed held in memory.
#[derive(Debug, Clone, Default)]
pub struct StaticSeedRepository {
    seed: StreakSeed,
}

impl StaticSeedRepository {
    pub fn new(seed: StreakSeed) -> Self {
        Self { seed }
    }
}

#[async_trait]
impl SeedRepository for StaticSeedRepository {
    async fn load(&self) -> Result<StreakSeed, DomainError> {
        Ok(self.seed.clone())
    }
}

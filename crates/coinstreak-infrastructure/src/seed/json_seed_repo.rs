use async_trait::async_trait;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use coinstreak_domain::calendar::build_quarter_days;
use coinstreak_domain::contest::validate_departments;
use coinstreak_domain::seed::{SeedRepository, StreakSeed};
use coinstreak_domain::shared::DomainError;

/// Reads the seed from a JSON file on every `load`.
#[derive(Debug, Clone)]
pub struct JsonSeedRepository {
    path: PathBuf,
}

impl JsonSeedRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn parse(&self, raw: &str) -> Result<StreakSeed, DomainError> {
        let seed: StreakSeed = serde_json::from_str(raw).map_err(|e| {
            DomainError::Deserialization(format!(
                "Invalid seed file {}: {}",
                self.path.display(),
                e
            ))
        })?;

        // Catches inverted or misplaced ranges before anything renders
        build_quarter_days(&seed.calendar)?;
        validate_departments(&seed.departments)?;
        for task in &seed.daily_tasks {
            task.validate()?;
        }

        Ok(seed)
    }
}

#[async_trait]
impl SeedRepository for JsonSeedRepository {
    async fn load(&self) -> Result<StreakSeed, DomainError> {
        let raw = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|e| match e.kind() {
                ErrorKind::NotFound => DomainError::NotFound(format!(
                    "Seed file not found: {}",
                    self.path.display()
                )),
                _ => DomainError::Infrastructure(format!(
                    "Failed to read seed file {}: {}",
                    self.path.display(),
                    e
                )),
            })?;

        let seed = self.parse(&raw)?;

        log::debug!(
            "Loaded seed from {} ({} products)",
            self.path.display(),
            seed.products.len()
        );

        Ok(seed)
    }
}

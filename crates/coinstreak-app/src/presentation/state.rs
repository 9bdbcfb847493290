use std::path::PathBuf;
use std::sync::Arc;

use crate::application::queries::StreakQueries;
use crate::application::services::ConfigService;
use coinstreak_domain::seed::SeedRepository;
use coinstreak_infrastructure::seed::{JsonSeedRepository, StaticSeedRepository};

/// Everything a command needs, built once at startup
pub struct AppState {
    pub streak_queries: Arc<StreakQueries>,
    pub config: Arc<ConfigService>,
}

impl AppState {
    /// `seed_override` wins over the configured seed path; with neither the
    /// built-in sample quarter is served.
    pub fn new(config: ConfigService, seed_override: Option<PathBuf>) -> Self {
        let settings = config.config();

        let seed_repo: Arc<dyn SeedRepository> = match seed_override.or(settings.seed_path) {
            Some(path) => {
                tracing::info!("Using seed file: {}", path.display());
                Arc::new(JsonSeedRepository::new(path))
            }
            None => {
                tracing::info!("Using built-in sample seed");
                Arc::new(StaticSeedRepository::default())
            }
        };

        Self {
            streak_queries: Arc::new(StreakQueries::new(seed_repo, settings.locale)),
            config: Arc::new(config),
        }
    }
}

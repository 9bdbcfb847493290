use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::sync::atomic::{AtomicU8, Ordering};
use std::sync::{Arc, RwLock};
use tracing::{info, warn};

use coinstreak_domain::calendar::MonthLocale;
use coinstreak_domain::shared::DomainError;

pub const CONFIG_FILE_NAME: &str = "app_config.json";
const APP_DIR_NAME: &str = "coinstreak";

/// Log level configuration
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error = 1,
    Warn = 2,
    #[default]
    Info = 3,
    Debug = 4,
    Trace = 5,
}

impl LogLevel {
    pub fn from_u8(value: u8) -> Self {
        match value {
            1 => LogLevel::Error,
            2 => LogLevel::Warn,
            3 => LogLevel::Info,
            4 => LogLevel::Debug,
            5 => LogLevel::Trace,
            _ => LogLevel::Info,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        }
    }
}

impl FromStr for LogLevel {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "error" => Ok(LogLevel::Error),
            "warn" => Ok(LogLevel::Warn),
            "info" => Ok(LogLevel::Info),
            "debug" => Ok(LogLevel::Debug),
            "trace" => Ok(LogLevel::Trace),
            _ => Err(DomainError::Validation(
                "Invalid log level. Must be one of: error, warn, info, debug, trace".to_string(),
            )),
        }
    }
}

/// Persistent configuration structure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct AppConfig {
    pub log_level: LogLevel,
    pub seed_path: Option<PathBuf>, // None serves the built-in sample quarter
    pub locale: MonthLocale,
}

/// Application configuration service
pub struct ConfigService {
    log_level: Arc<AtomicU8>,
    config: RwLock<AppConfig>,
    config_path: PathBuf,
}

impl ConfigService {
    /// Load config from `config_dir`, creating the directory if needed.
    /// A missing or unreadable file falls back to defaults.
    pub fn new(config_dir: &Path) -> Result<Self> {
        std::fs::create_dir_all(config_dir)?;

        let config_path = config_dir.join(CONFIG_FILE_NAME);

        let config = if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            serde_json::from_str::<AppConfig>(&content).unwrap_or_else(|e| {
                warn!("Ignoring malformed config {:?}: {}", config_path, e);
                AppConfig::default()
            })
        } else {
            AppConfig::default()
        };

        info!("Config loaded from: {:?}", config_path);
        info!("Initial log level: {}", config.log_level.as_str());

        Ok(Self {
            log_level: Arc::new(AtomicU8::new(config.log_level as u8)),
            config: RwLock::new(config),
            config_path,
        })
    }

    /// Load config from the platform config directory
    pub fn from_default_dir() -> Result<Self> {
        Self::new(&Self::default_dir()?)
    }

    pub fn default_dir() -> Result<PathBuf> {
        dirs::config_dir()
            .map(|dir| dir.join(APP_DIR_NAME))
            .ok_or_else(|| anyhow::anyhow!("Failed to get config dir"))
    }

    /// Platform data directory for log files
    pub fn default_log_dir() -> Result<PathBuf> {
        dirs::data_local_dir()
            .map(|dir| dir.join(APP_DIR_NAME).join("logs"))
            .ok_or_else(|| anyhow::anyhow!("Failed to get data dir"))
    }

    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    /// Snapshot of the current configuration
    pub fn config(&self) -> AppConfig {
        let mut config = self
            .config
            .read()
            .map(|guard| guard.clone())
            .unwrap_or_default();
        config.log_level = self.get_log_level();
        config
    }

    /// Get current log level
    pub fn get_log_level(&self) -> LogLevel {
        LogLevel::from_u8(self.log_level.load(Ordering::Relaxed))
    }

    /// Set log level and persist to disk. Takes effect on next start.
    pub fn set_log_level(&self, level: LogLevel) -> Result<()> {
        info!("Changing log level to: {}", level.as_str());
        self.log_level.store(level as u8, Ordering::Relaxed);
        self.update(|config| config.log_level = level)
    }

    pub fn set_seed_path(&self, path: Option<PathBuf>) -> Result<()> {
        self.update(|config| config.seed_path = path)
    }

    pub fn set_locale(&self, locale: MonthLocale) -> Result<()> {
        self.update(|config| config.locale = locale)
    }

    fn update(&self, apply: impl FnOnce(&mut AppConfig)) -> Result<()> {
        let snapshot = {
            let mut guard = self
                .config
                .write()
                .map_err(|_| anyhow::anyhow!("Config lock poisoned"))?;
            apply(&mut *guard);
            guard.log_level = self.get_log_level();
            guard.clone()
        };

        let content = serde_json::to_string_pretty(&snapshot)?;
        std::fs::write(&self.config_path, content)?;

        info!("Config saved to: {:?}", self.config_path);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_level_conversion() {
        assert_eq!(LogLevel::from_u8(1), LogLevel::Error);
        assert_eq!(LogLevel::from_u8(3), LogLevel::Info);
        assert_eq!(LogLevel::from_u8(5), LogLevel::Trace);
        assert_eq!(LogLevel::from_u8(99), LogLevel::Info); // Invalid -> Info
    }

    #[test]
    fn test_log_level_parse() {
        assert_eq!("DEBUG".parse::<LogLevel>().unwrap(), LogLevel::Debug);
        assert!(matches!(
            "verbose".parse::<LogLevel>(),
            Err(DomainError::Validation(_))
        ));
    }

    #[test]
    fn test_defaults_without_file() {
        let dir = tempfile::tempdir().unwrap();
        let service = ConfigService::new(dir.path()).unwrap();

        assert_eq!(service.config(), AppConfig::default());
        assert!(!service.config_path().exists());
    }

    #[test]
    fn test_changes_persist_across_instances() {
        let dir = tempfile::tempdir().unwrap();
        let service = ConfigService::new(dir.path()).unwrap();

        service.set_log_level(LogLevel::Debug).unwrap();
        service
            .set_seed_path(Some(PathBuf::from("/tmp/q2.json")))
            .unwrap();
        service.set_locale(MonthLocale::English).unwrap();

        let reloaded = ConfigService::new(dir.path()).unwrap().config();
        assert_eq!(reloaded.log_level, LogLevel::Debug);
        assert_eq!(reloaded.seed_path, Some(PathBuf::from("/tmp/q2.json")));
        assert_eq!(reloaded.locale, MonthLocale::English);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(CONFIG_FILE_NAME), r#"{"locale":"english"}"#).unwrap();

        let config = ConfigService::new(dir.path()).unwrap().config();

        assert_eq!(config.locale, MonthLocale::English);
        assert_eq!(config.log_level, LogLevel::Info);
        assert!(config.seed_path.is_none());
    }

    #[test]
    fn test_malformed_file_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(CONFIG_FILE_NAME), "not json").unwrap();

        let config = ConfigService::new(dir.path()).unwrap().config();

        assert_eq!(config, AppConfig::default());
    }
}

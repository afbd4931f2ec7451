// Configuration service
// Loads `config.toml` from the platform config directory

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::models::theme::SeasonalTheme;

const CONFIG_FILE_NAME: &str = "config.toml";
const DATABASE_FILE_NAME: &str = "preferences.db";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Root URL of the events backend
    pub base_url: String,
    /// Seasonal theme chosen by whoever deploys the calendar
    pub theme: String,
    /// Reload the shown month this often; 0 disables
    pub refresh_interval_minutes: u64,
    /// Where preferences are stored; defaults to the platform data directory
    pub database_path: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:5000".to_string(),
            theme: SeasonalTheme::Default.as_str().to_string(),
            refresh_interval_minutes: 0,
            database_path: None,
        }
    }
}

impl AppConfig {
    /// Configured theme, falling back to the neutral theme for unknown names
    pub fn seasonal_theme(&self) -> SeasonalTheme {
        self.theme.parse().unwrap_or_else(|err| {
            log::warn!("{}; using the default theme", err);
            SeasonalTheme::Default
        })
    }

    pub fn refresh_interval(&self) -> Option<std::time::Duration> {
        let secs = self.refresh_interval_minutes.saturating_mul(60);
        (secs > 0).then(|| std::time::Duration::from_secs(secs))
    }
}

pub struct ConfigService;

impl ConfigService {
    fn project_dirs() -> Option<ProjectDirs> {
        ProjectDirs::from("com", "Ken24T", "SeasonalCalendar")
    }

    pub fn default_config_path() -> Option<PathBuf> {
        Self::project_dirs().map(|dirs| dirs.config_dir().join(CONFIG_FILE_NAME))
    }

    /// Load from the platform config path; defaults when there is none
    pub fn load() -> Result<AppConfig> {
        match Self::default_config_path() {
            Some(path) => Self::load_or_create(&path),
            None => {
                log::warn!("No config directory available, using default configuration");
                Ok(AppConfig::default())
            }
        }
    }

    /// Like [`Self::load_from_path`], but a missing file is first written out
    /// with the defaults so there is something to edit.
    pub fn load_or_create(path: &Path) -> Result<AppConfig> {
        if !path.exists() {
            let config = AppConfig::default();
            match Self::save_to_path(&config, path) {
                Ok(()) => log::info!("Wrote default config to {}", path.display()),
                Err(e) => log::warn!("Could not write default config: {:#}", e),
            }
            return Ok(config);
        }

        Self::load_from_path(path)
    }

    /// Load `path`, or defaults when the file does not exist
    pub fn load_from_path(path: &Path) -> Result<AppConfig> {
        if !path.exists() {
            log::info!("No config at {}, using defaults", path.display());
            return Ok(AppConfig::default());
        }

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config: AppConfig = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;

        log::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    pub fn save_to_path(config: &AppConfig, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config directory {}", parent.display()))?;
        }
        let content = toml::to_string_pretty(config).context("Failed to serialize config")?;
        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config file {}", path.display()))?;
        Ok(())
    }

    /// Preference database location: explicit path, platform data dir, or the working directory
    pub fn database_path(config: &AppConfig) -> PathBuf {
        if let Some(path) = &config.database_path {
            return path.clone();
        }

        if let Some(dirs) = Self::project_dirs() {
            let data_dir = dirs.data_dir();
            match std::fs::create_dir_all(data_dir) {
                Ok(()) => return data_dir.join(DATABASE_FILE_NAME),
                Err(e) => log::warn!("Failed to create data directory {}: {}", data_dir.display(), e),
            }
        }

        PathBuf::from(DATABASE_FILE_NAME)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = ConfigService::load_from_path(&dir.path().join("config.toml")).unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "theme = \"halloween\"\n").unwrap();

        let config = ConfigService::load_from_path(&path).unwrap();
        assert_eq!(config.seasonal_theme(), SeasonalTheme::Halloween);
        assert_eq!(config.base_url, "http://localhost:5000");
        assert_eq!(config.refresh_interval(), None);
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "theme = [unterminated").unwrap();

        let err = ConfigService::load_from_path(&path).unwrap_err();
        assert!(err.to_string().contains("Failed to parse config file"));
    }

    #[test]
    fn test_save_and_reload() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");
        let config = AppConfig {
            base_url: "http://calendar.local:8080".to_string(),
            theme: "winter".to_string(),
            refresh_interval_minutes: 15,
            database_path: Some(dir.path().join("prefs.db")),
        };

        ConfigService::save_to_path(&config, &path).unwrap();
        let loaded = ConfigService::load_from_path(&path).unwrap();
        assert_eq!(loaded, config);
        assert_eq!(loaded.refresh_interval(), Some(std::time::Duration::from_secs(900)));
    }

    #[test]
    fn test_load_or_create_writes_defaults_once() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("seasonal").join("config.toml");

        let config = ConfigService::load_or_create(&path).unwrap();
        assert_eq!(config, AppConfig::default());
        assert!(path.exists());

        std::fs::write(&path, "theme = \"autumn\"\n").unwrap();
        let edited = ConfigService::load_or_create(&path).unwrap();
        assert_eq!(edited.seasonal_theme(), SeasonalTheme::Autumn);
    }

    #[test]
    fn test_huge_refresh_interval_saturates() {
        let config = AppConfig {
            refresh_interval_minutes: u64::MAX,
            ..AppConfig::default()
        };
        assert_eq!(config.refresh_interval(), Some(std::time::Duration::from_secs(u64::MAX)));
    }

    #[test]
    fn test_unknown_theme_falls_back_to_default() {
        let config = AppConfig {
            theme: "mardigras".to_string(),
            ..AppConfig::default()
        };
        assert_eq!(config.seasonal_theme(), SeasonalTheme::Default);
    }

    #[test]
    fn test_explicit_database_path_wins() {
        let config = AppConfig {
            database_path: Some(PathBuf::from("/tmp/custom.db")),
            ..AppConfig::default()
        };
        assert_eq!(ConfigService::database_path(&config), PathBuf::from("/tmp/custom.db"));
    }
}

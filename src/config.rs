use chrono::{TimeZone, Utc};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{Result, UpwatchError};
use crate::site::{Downtime, SeedSite};

/// Minimum check interval to keep the countdown meaningful (10 seconds)
pub const MIN_INTERVAL_SECS: u64 = 10;

/// Global upwatch configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Seconds between scheduled checks, used for the next-check display
    #[serde(default = "default_interval")]
    pub check_interval_secs: u64,

    /// Log filter used when UPWATCH_LOG is not set
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Sites loaded into the registry at startup
    #[serde(default)]
    pub sites: Vec<SeedSite>,
}

fn default_interval() -> u64 {
    300 // 5 minutes
}

fn default_log_level() -> String {
    "warn".to_string()
}

/// The demo entries shown before any config file exists
fn default_sites() -> Vec<SeedSite> {
    let date = |y, m, d| Utc.with_ymd_and_hms(y, m, d, 0, 0, 0).single().unwrap_or_default();
    vec![
        SeedSite {
            id: None,
            url: "https://example.com".into(),
            is_up: true,
            tracking_since: date(2023, 1, 1),
            uptime_percentage: 99.9,
            response_time_ms: 250,
            last_downtime: Some(Downtime { at: date(2023, 6, 18), duration_mins: 15 }),
        },
        SeedSite {
            id: None,
            url: "https://downsite.com".into(),
            is_up: false,
            tracking_since: date(2023, 6, 15),
            uptime_percentage: 95.5,
            response_time_ms: 500,
            last_downtime: Some(Downtime { at: date(2023, 6, 22), duration_mins: 60 }),
        },
    ]
}

impl Default for Config {
    fn default() -> Self {
        Self {
            check_interval_secs: default_interval(),
            log_level: default_log_level(),
            sites: default_sites(),
        }
    }
}

impl Config {
    /// Load configuration from the default location
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    /// Load configuration from `path`, falling back to defaults if it does not exist
    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            let config: Config = toml::from_str(&content)?;
            tracing::debug!(path = %path.display(), sites = config.sites.len(), "loaded config");
            Ok(config.normalized())
        } else {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            Ok(Self::default())
        }
    }

    /// Write `Config::default()` to `path`, refusing to overwrite an existing file
    pub fn init_at(path: &Path) -> Result<()> {
        if path.exists() {
            return Err(UpwatchError::ConfigError(format!(
                "{} already exists",
                path.display()
            )));
        }
        Self::default().save_to(path)?;
        tracing::info!(path = %path.display(), "wrote default config");
        Ok(())
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Get the config file path
    ///
    /// Supports UPWATCH_CONFIG environment variable for test isolation
    pub fn config_path() -> Result<PathBuf> {
        if let Ok(path) = std::env::var("UPWATCH_CONFIG") {
            return Ok(PathBuf::from(path));
        }
        let dirs = ProjectDirs::from("", "", "upwatch")
            .ok_or_else(|| UpwatchError::ConfigError("Could not determine config directory".into()))?;
        Ok(dirs.config_dir().join("config.toml"))
    }

    /// Get the data directory path
    pub fn data_dir() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("", "", "upwatch")
            .ok_or_else(|| UpwatchError::ConfigError("Could not determine data directory".into()))?;
        Ok(dirs.data_dir().to_path_buf())
    }

    /// Check interval as a chrono duration
    pub fn check_interval(&self) -> chrono::Duration {
        let secs = i64::try_from(self.check_interval_secs).unwrap_or(i64::MAX);
        chrono::Duration::try_seconds(secs).unwrap_or(chrono::Duration::MAX)
    }

    fn normalized(mut self) -> Self {
        if self.check_interval_secs < MIN_INTERVAL_SECS {
            tracing::warn!(
                configured = self.check_interval_secs,
                min = MIN_INTERVAL_SECS,
                "check interval too short, clamping"
            );
            self.check_interval_secs = MIN_INTERVAL_SECS;
        }
        self
    }
}

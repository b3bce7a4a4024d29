//! Configuration management for drowse-guard.
//!
//! Handles loading and saving TOML configuration files with cross-platform
//! paths and atomic write operations. The service base URL can be
//! overridden by the `DROWSE_GUARD_BASE_URL` environment variable at
//! process start.

use crate::{
    AppError, AppResult,
    config::{AlertConfig, CaptureConfig, MonitorConfig, ServiceConfig},
    config::{
        DEFAULT_ALERT_MS, DEFAULT_BASE_URL, DEFAULT_CHUNK_BYTES, DEFAULT_CHUNK_INTERVAL_MS,
        DEFAULT_CYCLE_DELAY_MS, DEFAULT_SEGMENT_MS, DEFAULT_UPLOAD_TIMEOUT_SECS,
    },
};

use std::{fs, io::Write, panic::Location, path::PathBuf, time::Duration};

use directories::ProjectDirs;
use drowse_guard_core::MonitorSettings;
use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// Environment variable overriding the configured service base URL.
pub(crate) const BASE_URL_ENV: &str = "DROWSE_GUARD_BASE_URL";

/// Main configuration struct.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Classification service settings.
    pub service: ServiceConfig,
    /// Capture device settings.
    pub capture: CaptureConfig,
    /// Cycle scheduling settings.
    pub monitor: MonitorConfig,
    /// Audible alert settings.
    pub alert: AlertConfig,
}

impl Config {
    /// Load configuration from disk, creating default if not found.
    #[track_caller]
    #[instrument]
    pub fn load() -> AppResult<Self> {
        let config_path = Self::config_path()?;

        if config_path.exists() {
            let contents = fs::read_to_string(&config_path).map_err(|e| AppError::ConfigError {
                reason: format!("Failed to read config: {}", e),
                location: ErrorLocation::from(Location::caller()),
            })?;

            let config: Config = toml::from_str(&contents).map_err(|e| AppError::ConfigError {
                reason: format!("Failed to parse config: {}", e),
                location: ErrorLocation::from(Location::caller()),
            })?;

            info!(config_path = ?config_path, "Configuration loaded");

            Ok(config)
        } else {
            info!("No config found, creating default");
            Self::create_default()
        }
    }

    /// Apply environment overrides: the service base URL is the single
    /// parameter the environment may supply at process start.
    pub fn apply_env_overrides(&mut self) {
        self.apply_base_url_override(std::env::var(BASE_URL_ENV).ok());
    }

    pub(crate) fn apply_base_url_override(&mut self, base_url: Option<String>) {
        if let Some(base_url) = base_url {
            if !base_url.trim().is_empty() {
                info!(base_url = %base_url, "Service base URL overridden from environment");
                self.service.base_url = base_url;
            }
        }
    }

    /// Save configuration to disk using atomic write pattern.
    ///
    /// Writes to a temporary file first, then renames to prevent
    /// corruption if the process crashes during the write.
    #[track_caller]
    #[instrument]
    pub fn save(&self) -> AppResult<()> {
        let config_path = Self::config_path()?;

        let contents = toml::to_string_pretty(self).map_err(|e| AppError::ConfigError {
            reason: format!("Failed to serialize config: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })?;

        // Atomic write: write to temp file then rename
        let temp_path = config_path.with_extension("toml.tmp");

        let mut temp_file = fs::File::create(&temp_path).map_err(|e| AppError::ConfigError {
            reason: format!("Failed to create temp config file: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })?;

        temp_file
            .write_all(contents.as_bytes())
            .map_err(|e| AppError::ConfigError {
                reason: format!("Failed to write temp config file: {}", e),
                location: ErrorLocation::from(Location::caller()),
            })?;

        temp_file.sync_all().map_err(|e| AppError::ConfigError {
            reason: format!("Failed to sync temp config file: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })?;

        fs::rename(&temp_path, &config_path).map_err(|e| AppError::ConfigError {
            reason: format!("Failed to rename temp config to final: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })?;

        info!(config_path = ?config_path, "Configuration saved (atomic write)");

        Ok(())
    }

    /// Cycle timing parameters for the monitor.
    pub fn monitor_settings(&self) -> MonitorSettings {
        MonitorSettings {
            segment_duration: Duration::from_millis(self.capture.segment_ms),
            cycle_delay: Duration::from_millis(self.monitor.cycle_delay_ms),
        }
    }

    /// Upload request timeout.
    pub fn upload_timeout(&self) -> Duration {
        Duration::from_secs(self.service.upload_timeout_secs)
    }

    /// Alert playback bound.
    pub fn alert_duration(&self) -> Duration {
        Duration::from_millis(self.alert.duration_ms)
    }

    /// Chunk emission interval of the synthetic stream.
    pub fn chunk_interval(&self) -> Duration {
        Duration::from_millis(self.capture.chunk_interval_ms)
    }

    #[track_caller]
    fn config_path() -> AppResult<PathBuf> {
        let proj_dirs =
            ProjectDirs::from("com", "drowse-guard", "Drowse-Guard").ok_or_else(|| {
                AppError::ConfigError {
                    reason: "Failed to get config directory".to_string(),
                    location: ErrorLocation::from(Location::caller()),
                }
            })?;

        let config_dir = proj_dirs.config_dir();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir)?;
            debug!(config_dir = ?config_dir, "Created config directory");
        }

        Ok(config_dir.join("config.toml"))
    }

    #[track_caller]
    fn create_default() -> AppResult<Self> {
        let config = Config {
            service: ServiceConfig {
                base_url: DEFAULT_BASE_URL.to_string(),
                upload_timeout_secs: DEFAULT_UPLOAD_TIMEOUT_SECS,
            },
            capture: CaptureConfig {
                segment_ms: DEFAULT_SEGMENT_MS,
                chunk_interval_ms: DEFAULT_CHUNK_INTERVAL_MS,
                chunk_bytes: DEFAULT_CHUNK_BYTES,
            },
            monitor: MonitorConfig {
                cycle_delay_ms: DEFAULT_CYCLE_DELAY_MS,
            },
            alert: AlertConfig {
                duration_ms: DEFAULT_ALERT_MS,
                sound_path: None,
            },
        };

        config.save()?;

        Ok(config)
    }
}

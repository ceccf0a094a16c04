//! Application configuration: load, save, and sanitize.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Smallest buffer that can still hold a single byte plus the guard slot.
const MIN_BUFFER_CAPACITY: usize = 16;
/// Largest buffer accepted from a config file (16 MiB).
const MAX_BUFFER_CAPACITY: usize = 16 * 1024 * 1024;
const MAX_UNDO_LEVELS: usize = 1024;
const MAX_TAB_SIZE: usize = 16;
const MAX_TERMINAL_DIMENSION: u16 = 1000;

/// Top-level application configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Maximum document size in internal bytes.
    pub buffer_capacity: usize,
    /// Number of undo snapshots kept.
    pub undo_levels: usize,
    /// Tab stop width used by the tab command.
    pub tab_size: usize,
    /// Terminal width used when the terminal does not report its size.
    pub fallback_width: u16,
    /// Terminal height used when the terminal does not report its size.
    pub fallback_height: u16,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            buffer_capacity: 32768,
            undo_levels: 64,
            tab_size: 4,
            fallback_width: 80,
            fallback_height: 25,
        }
    }
}

impl AppConfig {
    /// Returns the config file path.
    ///
    /// Resolution order:
    /// 1. `UE_CONFIG` environment variable
    /// 2. `ue/ue.json` under the platform config directory
    /// 3. `ue.json` in the working directory
    pub fn config_path() -> PathBuf {
        if let Ok(path) = std::env::var("UE_CONFIG") {
            return PathBuf::from(path);
        }
        dirs::config_dir()
            .map(|d| d.join("ue").join("ue.json"))
            .unwrap_or_else(|| PathBuf::from("ue.json"))
    }

    /// Loads the editor settings from `path`.
    ///
    /// A missing file is created with the defaults. An unreadable or
    /// malformed file is left untouched and the defaults are used instead.
    /// Loaded values are always clamped to their valid ranges.
    pub fn load_or_create(path: &Path) -> Self {
        if !path.exists() {
            let config = Self::default();
            config.write_default(path);
            return config;
        }

        let contents = match std::fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(e) => {
                tracing::warn!(path = %path.display(), "cannot read ue config, using defaults: {e}");
                return Self::default();
            }
        };
        match serde_json::from_str::<AppConfig>(&contents) {
            Ok(mut config) => {
                config.sanitize();
                tracing::debug!(path = %path.display(), ?config, "loaded ue config");
                config
            }
            Err(e) => {
                tracing::warn!(path = %path.display(), "ignoring malformed ue config: {e}");
                Self::default()
            }
        }
    }

    fn write_default(&self, path: &Path) {
        if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
            if let Err(e) = std::fs::create_dir_all(dir) {
                tracing::warn!(dir = %dir.display(), "cannot create config directory: {e}");
                return;
            }
        }
        match self.save(path) {
            Ok(()) => tracing::info!(path = %path.display(), "wrote default ue config"),
            Err(e) => tracing::warn!(path = %path.display(), "cannot write default ue config: {e}"),
        }
    }

    /// Saves config to `path` as pretty-printed JSON.
    pub fn save(&self, path: &Path) -> Result<(), std::io::Error> {
        let json = serde_json::to_string_pretty(self).map_err(std::io::Error::other)?;
        std::fs::write(path, json)
    }

    /// Clamps values to valid ranges, warning about each one that moved.
    pub fn sanitize(&mut self) {
        self.buffer_capacity = clamped(
            "buffer_capacity",
            self.buffer_capacity,
            MIN_BUFFER_CAPACITY,
            MAX_BUFFER_CAPACITY,
        );
        self.undo_levels = clamped("undo_levels", self.undo_levels, 1, MAX_UNDO_LEVELS);
        self.tab_size = clamped("tab_size", self.tab_size, 1, MAX_TAB_SIZE);
        self.fallback_width = clamped(
            "fallback_width",
            self.fallback_width,
            1,
            MAX_TERMINAL_DIMENSION,
        );
        self.fallback_height = clamped(
            "fallback_height",
            self.fallback_height,
            2,
            MAX_TERMINAL_DIMENSION,
        );
    }
}

fn clamped<T>(field: &str, value: T, min: T, max: T) -> T
where
    T: Ord + Copy + std::fmt::Display,
{
    let adjusted = value.clamp(min, max);
    if adjusted != value {
        tracing::warn!("{field} = {value} is out of range, using {adjusted}");
    }
    adjusted
}

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::host::RevealPolicy;

pub const MAX_HISTORY_SIZE: usize = 100;
pub const MIN_LINE_DISTANCE: u32 = 5;

#[derive(Debug, Clone, Deserialize, PartialEq, Eq, Default)]
#[serde(default)]
pub struct Config {
    pub history: HistoryConfig,
    pub persistence: PersistenceConfig,
    pub host: HostConfig,
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct HistoryConfig {
    pub max_entries: usize,
    pub min_line_distance: u32,
    pub reveal: RevealPolicy,
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self {
            max_entries: MAX_HISTORY_SIZE,
            min_line_distance: MIN_LINE_DISTANCE,
            reveal: RevealPolicy::default(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct PersistenceConfig {
    pub enabled: bool,
    /// Overrides the store directory.
    pub path: Option<PathBuf>,
    /// Key for the per-workspace snapshot; defaults to the working directory.
    pub workspace: Option<String>,
}

impl Default for PersistenceConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            path: None,
            workspace: None,
        }
    }
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct HostConfig {
    pub viewport_lines: u32,
}

impl Default for HostConfig {
    fn default() -> Self {
        Self { viewport_lines: 40 }
    }
}

impl Config {
    pub fn load() -> AppResult<Self> {
        let Some(path) = default_config_path() else {
            return Ok(Self::default());
        };
        Self::load_from_path(path)
    }

    pub fn load_from_path(path: impl AsRef<Path>) -> AppResult<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Self::default());
        }
        if !path.is_file() {
            return Err(AppError::invalid_argument(format!(
                "config path is not a regular file: {}",
                path.display()
            )));
        }

        let raw = fs::read_to_string(path).map_err(|source| {
            AppError::io_with_context(source, format!("failed to read config: {}", path.display()))
        })?;
        let parsed = toml::from_str::<Self>(&raw).map_err(|source| {
            AppError::invalid_argument(format!(
                "failed to parse config {}: {source}",
                path.display()
            ))
        })?;
        Ok(parsed.sanitized())
    }

    fn sanitized(mut self) -> Self {
        self.history.max_entries = self.history.max_entries.max(1);
        self.history.min_line_distance = self.history.min_line_distance.max(1);
        self.host.viewport_lines = self.host.viewport_lines.max(1);
        self
    }

    pub fn store_dir(&self) -> Option<PathBuf> {
        self.persistence.path.clone().or_else(default_data_dir)
    }
}

pub fn default_config_path() -> Option<PathBuf> {
    if let Some(explicit) = std::env::var_os("NAVTRAIL_CONFIG_PATH")
        && !explicit.is_empty()
    {
        return Some(PathBuf::from(explicit));
    }

    if let Some(xdg) = std::env::var_os("XDG_CONFIG_HOME")
        && !xdg.is_empty()
    {
        return Some(PathBuf::from(xdg).join("navtrail").join("config.toml"));
    }
    if let Some(home) = std::env::var_os("HOME")
        && !home.is_empty()
    {
        return Some(
            PathBuf::from(home)
                .join(".config")
                .join("navtrail")
                .join("config.toml"),
        );
    }
    if let Some(appdata) = std::env::var_os("APPDATA")
        && !appdata.is_empty()
    {
        return Some(PathBuf::from(appdata).join("navtrail").join("config.toml"));
    }
    None
}

pub fn default_data_dir() -> Option<PathBuf> {
    if let Some(explicit) = std::env::var_os("NAVTRAIL_DATA_PATH")
        && !explicit.is_empty()
    {
        return Some(PathBuf::from(explicit));
    }

    if let Some(xdg) = std::env::var_os("XDG_DATA_HOME")
        && !xdg.is_empty()
    {
        return Some(PathBuf::from(xdg).join("navtrail"));
    }
    if let Some(home) = std::env::var_os("HOME")
        && !home.is_empty()
    {
        return Some(
            PathBuf::from(home)
                .join(".local")
                .join("share")
                .join("navtrail"),
        );
    }
    if let Some(appdata) = std::env::var_os("APPDATA")
        && !appdata.is_empty()
    {
        return Some(PathBuf::from(appdata).join("navtrail"));
    }
    None
}

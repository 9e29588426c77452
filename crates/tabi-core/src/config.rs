use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Resolve the workspace data directory path based on priority:
/// 1. Explicit path (with tilde expansion)
/// 2. TABI_PATH environment variable (with tilde expansion)
/// 3. XDG data directory (recommended default)
/// 4. ~/.tabi (fallback for systems without XDG)
pub fn resolve_workspace_path(explicit_path: Option<&str>) -> Result<PathBuf> {
    if let Some(path) = explicit_path {
        return Ok(expand_tilde(path));
    }

    if let Ok(env_path) = std::env::var("TABI_PATH") {
        return Ok(expand_tilde(&env_path));
    }

    if let Some(data_dir) = dirs::data_dir() {
        return Ok(data_dir.join("tabi"));
    }

    if let Some(home) = std::env::var_os("HOME") {
        return Ok(PathBuf::from(home).join(".tabi"));
    }

    Err(Error::Config(
        "Could not determine workspace path: no HOME directory or XDG data directory found"
            .to_string(),
    ))
}

/// Expand tilde (~) in paths to the user's home directory
pub fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/")
        && let Some(home) = std::env::var_os("HOME")
    {
        return PathBuf::from(home).join(stripped);
    }
    PathBuf::from(path)
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SplashConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,
    #[serde(default = "default_splash_ms")]
    pub duration_ms: u64,
}

impl Default for SplashConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            duration_ms: default_splash_ms(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DisplayConfig {
    /// Colour console output (only applied when stdout is a terminal)
    #[serde(default = "default_true")]
    pub color: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self { color: true }
    }
}

fn default_true() -> bool {
    true
}

fn default_splash_ms() -> u64 {
    2000
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Itinerary file used when no `--itinerary` flag is given
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub itinerary: Option<PathBuf>,

    #[serde(default)]
    pub splash: SplashConfig,

    #[serde(default)]
    pub display: DisplayConfig,
}

impl Config {
    pub const FILE_NAME: &'static str = "config.toml";

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        let mut config: Config = toml::from_str(&content)?;
        if let Some(itinerary) = &config.itinerary
            && let Some(raw) = itinerary.to_str()
        {
            config.itinerary = Some(expand_tilde(raw));
        }
        // Relative itinerary paths are relative to the config file, not the cwd
        if let Some(itinerary) = &config.itinerary
            && itinerary.is_relative()
            && let Some(dir) = path.parent()
        {
            config.itinerary = Some(dir.join(itinerary));
        }
        Ok(config)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Effective splash duration in milliseconds (0 when disabled)
    pub fn splash_duration_ms(&self) -> u64 {
        if self.splash.enabled {
            self.splash.duration_ms
        } else {
            0
        }
    }
}

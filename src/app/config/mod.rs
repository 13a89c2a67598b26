// SPDX-License-Identifier: MPL-2.0
//! User preferences read from a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[general]` - Display language and theme mode
//! - `[api]` - Backend location
//!
//! ```toml
//! [general]
//! language = "ca"
//! theme_mode = "system"
//!
//! [api]
//! base_url = "http://127.0.0.1:5000"
//! ```
//!
//! The file is only ever read. A missing file means defaults; an unreadable
//! or invalid one means defaults plus a warning for the caller to log.
//!
//! # Path Resolution
//!
//! 1. Use `load_from_path()` with an explicit path
//! 2. `--config-dir` on the command line
//! 3. Set `EPHEMERIDES_CONFIG_DIR` environment variable
//! 4. Falls back to platform-specific config directory

use crate::api::DEFAULT_BASE_URL;
use crate::app::paths;
use crate::error::Result;
use crate::ui::theming::ThemeMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";

/// Environment variable overriding `[api] base_url`.
pub const ENV_API_URL: &str = "EPHEMERIDES_API_URL";

/// General application settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct GeneralConfig {
    /// Display language code (`ca`, `es` or `en`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    #[serde(default, deserialize_with = "deserialize_theme_mode")]
    pub theme_mode: ThemeMode,
}

/// Backend settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ApiConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub api: ApiConfig,
}

fn deserialize_theme_mode<'de, D>(deserializer: D) -> std::result::Result<ThemeMode, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::Error;

    let raw = String::deserialize(deserializer)?;
    match raw.to_lowercase().as_str() {
        "light" => Ok(ThemeMode::Light),
        "dark" => Ok(ThemeMode::Dark),
        "system" => Ok(ThemeMode::System),
        other => Err(D::Error::custom(format!("invalid theme_mode: {}", other))),
    }
}

fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_app_config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

/// Loads the configuration from the default location.
///
/// Returns `(config, warning)`; the warning describes why defaults were used
/// instead of an existing file.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    let Some(path) = get_config_path_with_override(base_dir) else {
        return (Config::default(), None);
    };
    if !path.exists() {
        return (Config::default(), None);
    }
    match load_from_path(&path) {
        Ok(config) => {
            tracing::debug!(path = %path.display(), "loaded settings");
            (config, None)
        }
        Err(err) => (
            Config::default(),
            Some(format!("ignoring {}: {err}", path.display())),
        ),
    }
}

/// Loads configuration from a specific path.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content)?)
}

/// Picks the backend base URL: CLI, then `EPHEMERIDES_API_URL`, then the
/// config file, then the built-in default. Blank values are skipped.
#[must_use]
pub fn resolve_api_url(cli: Option<&str>, config: &Config) -> String {
    let env = std::env::var(ENV_API_URL).ok();
    let url = [cli, env.as_deref(), config.api.base_url.as_deref()]
        .into_iter()
        .flatten()
        .map(str::trim)
        .find(|url| !url.is_empty())
        .unwrap_or(DEFAULT_BASE_URL)
        .to_string();
    url
}

//! Directory management for Baoleme clients.
//!
//! Directory layout:
//! ```text
//! baoleme/
//! ├── tokens.json      # per-role bearer tokens, written by FileStore
//! └── settings.json    # persisted client settings (base URL)
//! ```

pub mod format;

use serde::{Deserialize, Serialize};
use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

pub const HOME_ENV: &str = "BAOLEME_HOME";

/// Settings remembered between runs.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,
}

/// Pick the data root: explicit override, then the platform config dir.
fn resolve_root(env: Option<OsString>, config_dir: Option<PathBuf>) -> PathBuf {
    if let Some(val) = env.filter(|v| !v.is_empty()) {
        return PathBuf::from(val);
    }
    match config_dir {
        Some(dir) => dir.join("baoleme"),
        None => PathBuf::from("baoleme_data"),
    }
}

/// Get the data root from `BAOLEME_HOME`, the platform config dir, or a local fallback
pub fn baoleme_root() -> PathBuf {
    resolve_root(std::env::var_os(HOME_ENV), dirs::config_dir())
}

/// Durable token file shared by every role
pub fn token_file() -> PathBuf {
    baoleme_root().join("tokens.json")
}

pub fn settings_file() -> PathBuf {
    baoleme_root().join("settings.json")
}

/// Load settings from `path`. A missing or unreadable file yields defaults.
pub fn load_settings_from(path: &Path) -> Settings {
    if !path.exists() {
        return Settings::default();
    }

    match fs::read_to_string(path) {
        Ok(content) => match serde_json::from_str::<Settings>(&content) {
            Ok(settings) => settings,
            Err(e) => {
                warn!("Failed to parse settings at {:?}: {}", path, e);
                Settings::default()
            }
        },
        Err(e) => {
            warn!("Failed to read settings at {:?}: {}", path, e);
            Settings::default()
        }
    }
}

pub fn load_settings() -> Settings {
    load_settings_from(&settings_file())
}

pub fn save_settings_to(path: &Path, settings: &Settings) -> anyhow::Result<()> {
    ensure_parent(path)?;
    let json = serde_json::to_string_pretty(settings)?;
    fs::write(path, json)?;
    Ok(())
}

pub fn save_settings(settings: &Settings) -> anyhow::Result<()> {
    save_settings_to(&settings_file(), settings)
}

/// Ensure a single directory exists
pub fn ensure_dir(path: &Path) -> anyhow::Result<()> {
    if !path.exists() {
        fs::create_dir_all(path)?;
        info!("Created directory: {:?}", path);
    }
    Ok(())
}

/// Ensure a file's parent directory exists
pub fn ensure_parent(path: &Path) -> anyhow::Result<()> {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => ensure_dir(parent),
        _ => Ok(()),
    }
}

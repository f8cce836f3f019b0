// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, including loading and
//! saving user preferences to a `settings.toml` file.
//!
//! Every field is optional on disk; missing fields fall back to the values in
//! [`defaults`]. The configuration is read once at shell construction and is
//! never mutated by the running application.

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub mod defaults;

const CONFIG_FILE: &str = "settings.toml";
const APP_NAME: &str = "Astrofolio";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Window title and navbar brand.
    pub site_title: Option<String>,
    /// One-line description, shown under the brand in the footer.
    pub site_description: Option<String>,
    /// Backdrop color as a hex string (`#rrggbb` or `#rrggbbaa`).
    pub theme_color: Option<String>,
    /// Whether ambient background videos are decoded at all.
    #[serde(default)]
    pub video_autoplay: Option<bool>,
    /// Disables every animation: pulse, fades, starfield motion, video.
    #[serde(default)]
    pub reduced_motion: Option<bool>,
    /// Directory image and video assets are resolved against.
    #[serde(default)]
    pub assets_dir: Option<PathBuf>,
    /// Optional content registry override file.
    #[serde(default)]
    pub content_path: Option<PathBuf>,
    /// Decoded-frame cache size in MB for the looping ambient video.
    #[serde(default)]
    pub frame_cache_mb: Option<u32>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            site_title: Some(defaults::DEFAULT_SITE_TITLE.to_string()),
            site_description: Some(defaults::DEFAULT_SITE_DESCRIPTION.to_string()),
            theme_color: Some(defaults::DEFAULT_THEME_COLOR.to_string()),
            video_autoplay: Some(true),
            reduced_motion: Some(false),
            assets_dir: Some(PathBuf::from(defaults::DEFAULT_ASSETS_DIR)),
            content_path: None,
            frame_cache_mb: Some(defaults::FRAME_CACHE_DEFAULT_MB),
        }
    }
}

impl Config {
    /// Effective frame cache size, clamped to the supported range.
    pub fn frame_cache_mb(&self) -> u32 {
        self.frame_cache_mb
            .unwrap_or(defaults::FRAME_CACHE_DEFAULT_MB)
            .clamp(defaults::FRAME_CACHE_MIN_MB, defaults::FRAME_CACHE_MAX_MB)
    }

    pub fn site_title(&self) -> &str {
        self.site_title
            .as_deref()
            .unwrap_or(defaults::DEFAULT_SITE_TITLE)
    }

    pub fn site_description(&self) -> &str {
        self.site_description
            .as_deref()
            .unwrap_or(defaults::DEFAULT_SITE_DESCRIPTION)
    }

    pub fn assets_dir(&self) -> PathBuf {
        self.assets_dir
            .clone()
            .unwrap_or_else(|| PathBuf::from(defaults::DEFAULT_ASSETS_DIR))
    }

    pub fn video_autoplay(&self) -> bool {
        self.video_autoplay.unwrap_or(true)
    }

    pub fn reduced_motion(&self) -> bool {
        self.reduced_motion.unwrap_or(false)
    }
}

fn get_default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path.push(CONFIG_FILE);
        path
    })
}

pub fn load() -> Result<Config> {
    if let Some(path) = get_default_config_path() {
        if path.exists() {
            return load_from_path(&path);
        }
    }
    Ok(Config::default())
}

pub fn save(config: &Config) -> Result<()> {
    if let Some(path) = get_default_config_path() {
        return save_to_path(config, &path);
    }
    Ok(())
}

pub fn load_from_path(path: &Path) -> Result<Config> {
    let contents = fs::read_to_string(path)?;
    let config = toml::from_str(&contents)?;
    Ok(config)
}

pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let contents = toml::to_string_pretty(config)?;
    fs::write(path, contents)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn default_config_has_builtin_site_values() {
        let config = Config::default();
        assert_eq!(config.site_title(), defaults::DEFAULT_SITE_TITLE);
        assert_eq!(config.theme_color.as_deref(), Some("#030014"));
        assert!(config.video_autoplay());
        assert!(!config.reduced_motion());
    }

    #[test]
    fn save_and_load_round_trip() {
        let dir = tempdir().expect("failed to create temporary directory");
        let path = dir.path().join("settings.toml");

        let mut config = Config::default();
        config.site_title = Some("Orbital".to_string());
        config.reduced_motion = Some(true);
        config.frame_cache_mb = Some(64);

        save_to_path(&config, &path).expect("failed to save config");
        let loaded = load_from_path(&path).expect("failed to load config");

        assert_eq!(loaded.site_title(), "Orbital");
        assert!(loaded.reduced_motion());
        assert_eq!(loaded.frame_cache_mb(), 64);
    }

    #[test]
    fn load_from_missing_path_errors() {
        let dir = tempdir().expect("failed to create temporary directory");
        let path = dir.path().join("absent.toml");
        assert!(load_from_path(&path).is_err());
    }

    #[test]
    fn partial_file_falls_back_to_defaults() {
        let dir = tempdir().expect("failed to create temporary directory");
        let path = dir.path().join("settings.toml");
        fs::write(&path, "site_title = \"Minimal\"\n").expect("failed to write config");

        let loaded = load_from_path(&path).expect("failed to load config");
        assert_eq!(loaded.site_title(), "Minimal");
        assert!(loaded.video_autoplay());
        assert_eq!(loaded.frame_cache_mb(), defaults::FRAME_CACHE_DEFAULT_MB);
    }

    #[test]
    fn frame_cache_is_clamped_to_supported_range() {
        let mut config = Config::default();
        config.frame_cache_mb = Some(4096);
        assert_eq!(config.frame_cache_mb(), defaults::FRAME_CACHE_MAX_MB);
    }
}

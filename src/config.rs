// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, including loading and
//! saving user preferences to a `settings.toml` file.
//!
//! The gallery shape (`max_guests`, `excluded_ids`) and the image directory
//! are all optional: a missing or unreadable file degrades to the built-in
//! defaults rather than failing startup.

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";
const APP_NAME: &str = "GuestGallery";

/// Highest guest id generated when the config does not say otherwise.
pub const DEFAULT_MAX_GUESTS: u32 = 57;

/// Guest ids omitted from the gallery when the config does not say otherwise.
pub const DEFAULT_EXCLUDED_IDS: &[u32] = &[10];

/// Directory searched for guest images, relative to the working directory.
pub const DEFAULT_ASSETS_DIR: &str = "assets/guests";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub max_guests: Option<u32>,
    #[serde(default)]
    pub excluded_ids: Option<Vec<u32>>,
    #[serde(default)]
    pub assets_dir: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_guests: Some(DEFAULT_MAX_GUESTS),
            excluded_ids: Some(DEFAULT_EXCLUDED_IDS.to_vec()),
            assets_dir: None,
        }
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
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content).unwrap_or_default())
}

pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config).unwrap();
    fs::write(path, content)?;
    Ok(())
}

// src/config/config_load.rs
//
// loading of config.toml

use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use super::WindowConfig;
use crate::error::Result;

const CONFIG_FILE: &str = "config.toml";

#[derive(Debug, Deserialize, Clone, Default, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub window: WindowConfig,
}

impl Config {
    /// Executable directory first, then the working directory, then defaults.
    pub fn load() -> Result<Self> {
        if let Some(path) = Self::exe_dir_path().filter(|p| p.exists()) {
            return Self::load_from(&path);
        }

        let local = Path::new(CONFIG_FILE);
        if local.exists() {
            return Self::load_from(local);
        }

        log::info!("no {} found, using defaults", CONFIG_FILE);
        Ok(Self::default())
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config = Self::parse(&content)?;
        log::info!("loaded config from {}", path.display());
        Ok(config)
    }

    pub fn parse(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    fn exe_dir_path() -> Option<PathBuf> {
        let exe_path = std::env::current_exe().ok()?;
        Some(exe_path.parent()?.join(CONFIG_FILE))
    }
}

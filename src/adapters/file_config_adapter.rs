//! INI file configuration adapter.
//!
//! The config file is optional; every key has a built-in default. Sections:
//! `[data]` (dir, symbol, timeframes), `[scan]` (threshold),
//! `[report]` (output).

use crate::domain::error::RetscanError;
use crate::ports::config_port::ConfigPort;
use configparser::ini::Ini;
use std::path::Path;

#[derive(Debug)]
pub struct FileConfigAdapter {
    config: Ini,
}

impl FileConfigAdapter {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, RetscanError> {
        let mut config = Ini::new();
        config
            .load(&path)
            .map_err(|reason| RetscanError::ConfigParse {
                file: path.as_ref().display().to_string(),
                reason,
            })?;
        Ok(Self { config })
    }

    pub fn from_string(content: &str) -> Result<Self, RetscanError> {
        let mut config = Ini::new();
        config
            .read(content.to_string())
            .map_err(|reason| RetscanError::ConfigParse {
                file: "<inline>".into(),
                reason,
            })?;
        Ok(Self { config })
    }

    /// An adapter over no file at all; every lookup falls back to defaults.
    pub fn empty() -> Self {
        Self { config: Ini::new() }
    }
}

impl ConfigPort for FileConfigAdapter {
    fn get_string(&self, section: &str, key: &str) -> Option<String> {
        self.config.get(section, key)
    }

    fn get_double(&self, section: &str, key: &str, default: f64) -> f64 {
        self.config
            .getfloat(section, key)
            .ok()
            .flatten()
            .unwrap_or(default)
    }
}

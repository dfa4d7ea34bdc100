//! Endpoint credentials loaded from the local YAML configuration file

use log::debug;
use serde::Deserialize;
use std::fs;
use std::path::Path;

use crate::error::{CfError, Result};

/// Top-level configuration file structure
#[derive(Deserialize, Debug, Clone)]
pub struct Settings {
    pub endpoint: Endpoint,
}

/// CF endpoint credentials
#[derive(Deserialize, Debug, Clone)]
pub struct Endpoint {
    /// API base address, scheme optional (https assumed)
    pub host: String,
    pub username: String,
    pub password: String,
}

impl Settings {
    /// Load settings from a YAML file.
    ///
    /// Any I/O or parse failure is returned as `CfError::Config` with the
    /// file path in the message; the caller treats it as fatal.
    pub fn load(path: &Path) -> Result<Settings> {
        debug!("Loading configuration from: {}", path.display());

        let content = fs::read_to_string(path).map_err(|e| {
            CfError::Config(format!("Could not read {}: {}", path.display(), e))
        })?;

        let settings: Settings = serde_yml::from_str(&content).map_err(|e| {
            CfError::Config(format!("Could not parse {}: {}", path.display(), e))
        })?;

        debug!(
            "Configuration loaded for host: {}, user: {}",
            settings.endpoint.host, settings.endpoint.username
        );
        Ok(settings)
    }
}

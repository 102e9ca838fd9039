use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;

use recipe_form_engine::{BodyMode, SubmitSettings};
use serde::Deserialize;
use thiserror::Error;

use super::logging::LogDestination;

pub(crate) const CONFIG_FILENAME: &str = "recipe_form.ron";

#[derive(Debug, Error)]
pub(crate) enum ConfigError {
    #[error("failed to read {path:?}: {source}")]
    Io { path: PathBuf, source: io::Error },
    #[error("failed to parse {path:?}: {source}")]
    Parse {
        path: PathBuf,
        source: ron::error::SpannedError,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub(crate) struct AppConfig {
    pub server_url: String,
    pub companies: Vec<String>,
    pub body_mode: BodyMode,
    pub connect_timeout_secs: u64,
    pub request_timeout_secs: Option<u64>,
    pub max_bytes: u64,
    pub log_destination: LogDestination,
}

impl Default for AppConfig {
    fn default() -> Self {
        let engine = SubmitSettings::default();
        Self {
            server_url: engine.server_url,
            companies: vec!["Nabisco".into(), "Kraft".into(), "Nestle".into()],
            body_mode: engine.body_mode,
            connect_timeout_secs: engine.connect_timeout.as_secs(),
            request_timeout_secs: engine.request_timeout.map(|t| t.as_secs()),
            max_bytes: engine.max_bytes,
            log_destination: LogDestination::default(),
        }
    }
}

impl AppConfig {
    pub fn submit_settings(&self) -> SubmitSettings {
        SubmitSettings {
            server_url: self.server_url.clone(),
            connect_timeout: Duration::from_secs(self.connect_timeout_secs),
            request_timeout: self.request_timeout_secs.map(Duration::from_secs),
            max_bytes: self.max_bytes,
            body_mode: self.body_mode,
        }
    }
}

/// Reads the config file. A missing file is not an error and yields `None`.
pub(crate) fn read_config(path: &Path) -> Result<Option<AppConfig>, ConfigError> {
    let content = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(None),
        Err(source) => {
            return Err(ConfigError::Io {
                path: path.to_path_buf(),
                source,
            })
        }
    };

    ron::from_str(&content)
        .map(Some)
        .map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
}

//! Configuration handling

use crate::error::ConfigError;
use crate::signature::{DEFAULT_PAD_HEIGHT, DEFAULT_PAD_WIDTH};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Environment variable that overrides `submit_url`
pub const SUBMIT_URL_ENV: &str = "NHS_SUBMIT_URL";

/// Deploy-time configuration for the form
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct FormConfig {
    /// Endpoint that receives submitted records
    pub submit_url: Option<String>,
    /// Logical width of each signature pad
    pub signature_width: Option<f64>,
    /// Logical height of each signature pad
    pub signature_height: Option<f64>,
}

impl FormConfig {
    /// Get the config file path
    pub fn config_path() -> Option<PathBuf> {
        ProjectDirs::from("org", "nhs", "nhs-service-log")
            .map(|dirs| dirs.config_dir().join("config.json"))
    }

    fn display_path() -> String {
        Self::config_path()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "config.json".to_string())
    }

    /// Load the config file if present, then apply the environment override
    pub fn load() -> Result<Self, ConfigError> {
        let config = match Self::config_path() {
            Some(path) if path.exists() => Self::load_from(&path)?,
            _ => Self::default(),
        };
        Ok(config.with_env_override(std::env::var(SUBMIT_URL_ENV).ok()))
    }

    /// Load configuration from a specific file
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Replace `submit_url` with a non-empty override
    pub fn with_env_override(mut self, value: Option<String>) -> Self {
        if let Some(url) = value.map(|v| v.trim().to_string()).filter(|v| !v.is_empty()) {
            self.submit_url = Some(url);
        }
        self
    }

    /// The configured endpoint, required to be an http(s) URL
    pub fn submit_url(&self) -> Result<&str, ConfigError> {
        let url = self
            .submit_url
            .as_deref()
            .map(str::trim)
            .filter(|u| !u.is_empty())
            .ok_or_else(|| ConfigError::MissingSubmitUrl {
                path: Self::display_path(),
            })?;

        let scheme_ok = url.starts_with("https://") || url.starts_with("http://");
        let has_host = url
            .split_once("://")
            .is_some_and(|(_, rest)| !rest.is_empty() && !rest.starts_with('/'));
        if !scheme_ok || !has_host {
            return Err(ConfigError::InvalidSubmitUrl(url.to_string()));
        }
        Ok(url)
    }

    /// Signature pad size in logical units
    pub fn pad_size(&self) -> (f64, f64) {
        let positive = |v: Option<f64>| v.filter(|v| v.is_finite() && *v > 0.0);
        (
            positive(self.signature_width).unwrap_or(DEFAULT_PAD_WIDTH),
            positive(self.signature_height).unwrap_or(DEFAULT_PAD_HEIGHT),
        )
    }
}

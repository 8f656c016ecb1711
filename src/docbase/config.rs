//! Profile configuration, stored as TOML.
//!
//! ```toml
//! [default]
//! AccessToken = "..."
//! Domain      = "myteam"
//! UserID      = "me"
//! Editor      = "vim"
//! ```
//!
//! Each table is a named profile. The loader picks one profile (normally
//! `default`) and ignores the rest.

use directories::ProjectDirs;
use serde::Deserialize;
use std::collections::HashMap;
use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub const DEFAULT_PROFILE: &str = "default";
const CONFIG_FILENAME: &str = "config.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("'{0}' profile not found")]
    MissingProfile(String),

    #[error("domain is not configured; pass --domain or set DOCBASE_DOMAIN")]
    MissingDomain,

    #[error("access token is not configured; pass --token or set DOCBASE_TOKEN")]
    MissingToken,
}

/// A single profile record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    #[serde(rename = "AccessToken")]
    pub access_token: String,
    #[serde(rename = "Domain")]
    pub domain: String,
    #[serde(rename = "UserID")]
    pub user_id: String,
    #[serde(rename = "Editor")]
    pub editor: String,
}

type ConfigMap = HashMap<String, Config>;

impl Config {
    /// Loads the `default` profile from a TOML document.
    pub fn load<R: Read>(reader: R) -> Result<Self, ConfigError> {
        Self::load_profile(reader, DEFAULT_PROFILE)
    }

    /// Loads a named profile from a TOML document.
    pub fn load_profile<R: Read>(mut reader: R, profile: &str) -> Result<Self, ConfigError> {
        let mut buf = String::new();
        reader.read_to_string(&mut buf)?;
        let mut profiles: ConfigMap = toml::from_str(&buf)?;
        profiles
            .remove(profile)
            .ok_or_else(|| ConfigError::MissingProfile(profile.to_string()))
    }

    /// Loads a profile from a file. A missing file yields an empty profile so
    /// flags and environment variables can supply everything.
    pub fn load_path(path: &Path, profile: &str) -> Result<Self, ConfigError> {
        match fs::File::open(path) {
            Ok(file) => Self::load_profile(file, profile),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(e) => Err(ConfigError::Io(e)),
        }
    }

    /// Default location: `<platform config dir>/docbase/config.toml`.
    pub fn default_path() -> Option<PathBuf> {
        ProjectDirs::from("io", "docbase", "docbase")
            .map(|dirs| dirs.config_dir().join(CONFIG_FILENAME))
    }

    /// Overlays non-empty values given on the command line or environment.
    pub fn with_overrides(mut self, token: Option<String>, domain: Option<String>) -> Self {
        if let Some(token) = token.filter(|t| !t.is_empty()) {
            self.access_token = token;
        }
        if let Some(domain) = domain.filter(|d| !d.is_empty()) {
            self.domain = domain;
        }
        self
    }

    pub fn require_domain(&self) -> Result<&str, ConfigError> {
        if self.domain.is_empty() {
            Err(ConfigError::MissingDomain)
        } else {
            Ok(&self.domain)
        }
    }

    pub fn require_token(&self) -> Result<&str, ConfigError> {
        if self.access_token.is_empty() {
            Err(ConfigError::MissingToken)
        } else {
            Ok(&self.access_token)
        }
    }

    /// The profile's editor, if one is set.
    pub fn editor(&self) -> Option<&str> {
        let editor = self.editor.trim();
        (!editor.is_empty()).then_some(editor)
    }
}

//! Persistent user settings.
//!
//! Stored as JSON at `<config dir>/srkit/settings.json`. Saved API keys act as
//! a [`CredentialSource`] keyed by environment-variable name, so the CLI can
//! layer them over the process environment.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::credentials::CredentialSource;
use crate::provider::groq::GroqOptions;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// API keys by environment-variable name (e.g. "GROQ_API_KEY")
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub api_keys: BTreeMap<String, String>,

    /// Default options for Groq transcription
    #[serde(default)]
    pub groq: GroqOptions,
}

impl Settings {
    /// Default settings file location
    pub fn path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("srkit")
            .join("settings.json")
    }

    /// Load settings from the default location, falling back to defaults.
    pub fn load() -> Self {
        Self::load_from(&Self::path())
    }

    /// Load settings from the default location, failing on a corrupt file.
    pub fn try_load() -> Result<Self> {
        Self::try_load_from(&Self::path())
    }

    /// Load settings from `path`, falling back to defaults.
    ///
    /// A corrupt file is reported on stderr, whether or not verbose output is
    /// enabled.
    pub fn load_from(path: &Path) -> Self {
        match Self::try_load_from(path) {
            Ok(settings) => settings,
            Err(e) => {
                eprintln!("Warning: {e:#}; using default settings");
                Self::default()
            }
        }
    }

    /// Load settings from `path`.
    ///
    /// A missing file yields default settings; an unreadable or invalid file
    /// is an error.
    pub fn try_load_from(path: &Path) -> Result<Self> {
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                crate::verbose!("No settings at {}, using defaults", path.display());
                return Ok(Self::default());
            }
            Err(e) => {
                return Err(e)
                    .with_context(|| format!("Failed to read settings from {}", path.display()));
            }
        };

        serde_json::from_str(&content)
            .with_context(|| format!("Invalid settings file {}", path.display()))
    }

    /// Save settings to the default location.
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::path())
    }

    /// Save settings to `path`, creating parent directories.
    ///
    /// On Unix the file is made readable by the owner only.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }

        let content = serde_json::to_string_pretty(self).context("Failed to serialize settings")?;
        fs::write(path, content)
            .with_context(|| format!("Failed to write settings to {}", path.display()))?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            fs::set_permissions(path, fs::Permissions::from_mode(0o600))
                .context("Failed to restrict settings file permissions")?;
        }

        Ok(())
    }

    /// Store an API key under its environment-variable name.
    ///
    /// An empty key removes the entry so lookups fall back to the environment.
    pub fn set_api_key(&mut self, env_var: &str, key: &str) {
        let key = key.trim();
        if key.is_empty() {
            self.api_keys.remove(env_var);
        } else {
            self.api_keys.insert(env_var.to_string(), key.to_string());
        }
    }

    pub fn has_api_key(&self, env_var: &str) -> bool {
        self.get(env_var).is_some()
    }
}

impl CredentialSource for Settings {
    fn get(&self, name: &str) -> Option<String> {
        self.api_keys
            .get(name)
            .filter(|key| !key.is_empty())
            .cloned()
    }
}

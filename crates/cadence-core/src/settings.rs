//! Runtime configuration.
//!
//! Settings are read from a JSON file. An explicitly given path must exist;
//! otherwise `$XDG_CONFIG_HOME/cadence/config.json` is used when present and
//! built-in defaults apply when it is not. Every field is optional in the
//! file.
//!
//! ```json
//! {
//!   "default_duration_minutes": 25,
//!   "generator": { "model": "llama-3.3-70b-versatile" }
//! }
//! ```

use std::{
    num::NonZeroU32,
    path::{Path, PathBuf},
    time::Duration,
};

use log::debug;
use serde::{Deserialize, Serialize};

use crate::{
    error::{CadenceError, Result},
    scheduler::DEFAULT_DURATION_MINUTES,
};

const CONFIG_FILE_NAME: &str = "config.json";

/// Top-level configuration for a planning run.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Settings {
    /// Minutes assigned to subtasks without an estimate
    pub default_duration_minutes: u32,

    /// Simulated latency of each calendar reservation, in milliseconds
    pub notification_latency_ms: u64,

    /// Chat-completions endpoint used to generate plans
    pub generator: GeneratorSettings,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            default_duration_minutes: DEFAULT_DURATION_MINUTES,
            notification_latency_ms: 10,
            generator: GeneratorSettings::default(),
        }
    }
}

/// Connection settings for an OpenAI-compatible chat-completions service.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct GeneratorSettings {
    /// Base URL, without the `/chat/completions` suffix
    pub base_url: String,

    /// Model identifier
    pub model: String,

    /// Name of the environment variable holding the API key
    pub api_key_env: String,

    /// Request timeout in milliseconds
    pub timeout_ms: u64,

    /// Upper bound on generated tokens per request
    pub max_tokens: u32,

    /// Sampling temperature
    pub temperature: f32,
}

impl Default for GeneratorSettings {
    fn default() -> Self {
        Self {
            base_url: "https://api.groq.com/openai/v1".to_string(),
            model: "llama-3.3-70b-versatile".to_string(),
            api_key_env: "GROQ_API_KEY".to_string(),
            timeout_ms: 60_000,
            max_tokens: 2048,
            temperature: 0.2,
        }
    }
}

impl GeneratorSettings {
    /// Reads the API key from the configured environment variable.
    ///
    /// # Errors
    ///
    /// Returns `CadenceError::Configuration` if the variable is unset or
    /// blank.
    pub fn api_key(&self) -> Result<String> {
        match std::env::var(&self.api_key_env) {
            Ok(key) if !key.trim().is_empty() => Ok(key),
            _ => Err(CadenceError::configuration(format!(
                "API key not found. Set the {} environment variable or pass --plan-file",
                self.api_key_env
            ))),
        }
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}

impl Settings {
    /// Loads settings from `path`, or from the XDG config file when `path` is
    /// `None`.
    ///
    /// # Errors
    ///
    /// Returns `CadenceError::FileSystem` if an explicit path cannot be read,
    /// `CadenceError::Configuration` if the file is not valid settings JSON or
    /// holds invalid values.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let path = match path {
            Some(path) => Some(path.to_path_buf()),
            None => Self::default_config_path(),
        };

        let settings = match path {
            Some(path) => Self::from_file(&path)?,
            None => {
                debug!("No configuration file found, using defaults");
                Self::default()
            }
        };

        settings.validate()?;
        Ok(settings)
    }

    /// Parses settings from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns `CadenceError::FileSystem` when the file cannot be read and
    /// `CadenceError::Configuration` when it does not parse.
    pub fn from_file(path: &Path) -> Result<Self> {
        debug!("Loading configuration from {}", path.display());
        let content = std::fs::read_to_string(path).map_err(|e| CadenceError::FileSystem {
            path: path.to_path_buf(),
            source: e,
        })?;

        serde_json::from_str(&content).map_err(|e| {
            CadenceError::configuration(format!("Invalid configuration in '{}': {e}", path.display()))
        })
    }

    /// Checks value ranges that serde cannot express.
    ///
    /// # Errors
    ///
    /// Returns `CadenceError::Configuration` for a zero default duration or a
    /// blank generator model, URL or key variable name.
    pub fn validate(&self) -> Result<()> {
        if self.default_duration_minutes == 0 {
            return Err(CadenceError::configuration(
                "default_duration_minutes must be greater than zero",
            ));
        }
        for (name, value) in [
            ("generator.base_url", &self.generator.base_url),
            ("generator.model", &self.generator.model),
            ("generator.api_key_env", &self.generator.api_key_env),
        ] {
            if value.trim().is_empty() {
                return Err(CadenceError::configuration(format!("{name} cannot be empty")));
            }
        }
        Ok(())
    }

    /// Default duration as a non-zero value.
    ///
    /// # Errors
    ///
    /// Returns `CadenceError::Configuration` when the duration is zero.
    pub fn default_duration(&self) -> Result<NonZeroU32> {
        NonZeroU32::new(self.default_duration_minutes).ok_or_else(|| {
            CadenceError::configuration("default_duration_minutes must be greater than zero")
        })
    }

    pub fn notification_latency(&self) -> Duration {
        Duration::from_millis(self.notification_latency_ms)
    }

    /// Returns the XDG config file location if the file exists.
    fn default_config_path() -> Option<PathBuf> {
        xdg::BaseDirectories::with_prefix("cadence").find_config_file(CONFIG_FILE_NAME)
    }
}

//! Application configuration model.

use std::path::PathBuf;

use serde::Deserialize;
use url::Url;

use crate::domain::AppError;

/// Directory under `$HOME/.config` holding adcraft state.
pub const CONFIG_DIR_NAME: &str = "adcraft";
/// Optional configuration file inside the config directory.
pub const CONFIG_FILE_NAME: &str = "config.toml";
/// Environment variable carrying the generation service credential.
pub const API_KEY_ENV: &str = "GEMINI_API_KEY";

/// Settings for the Gemini generation service.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GeminiConfig {
    /// Base URL of the Generative Language API.
    #[serde(default = "default_api_url")]
    pub api_url: Url,
    /// Model identifier used for `generateContent`.
    #[serde(default = "default_model")]
    pub model: String,
    /// Request timeout in seconds.
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

impl Default for GeminiConfig {
    fn default() -> Self {
        Self { api_url: default_api_url(), model: default_model(), timeout_secs: default_timeout() }
    }
}

impl GeminiConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        if self.timeout_secs == 0 {
            return Err(AppError::InvalidConfig("timeout_secs must be greater than 0".to_string()));
        }
        if self.model.trim().is_empty() {
            return Err(AppError::InvalidConfig("model must not be empty".to_string()));
        }
        Ok(())
    }
}

fn default_api_url() -> Url {
    Url::parse("https://generativelanguage.googleapis.com/v1beta")
        .expect("Default API URL must be valid")
}

fn default_model() -> String {
    "gemini-3-flash-preview".to_string()
}

fn default_timeout() -> u64 {
    60
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StorageConfig {
    /// Override for the directory holding persisted history.
    #[serde(default)]
    pub data_dir: Option<PathBuf>,
}

/// On-disk shape of `config.toml`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    #[serde(default)]
    pub gemini: GeminiConfig,
    #[serde(default)]
    pub storage: StorageConfig,
}

impl ConfigFile {
    pub fn parse(content: &str) -> Result<Self, AppError> {
        let file: ConfigFile = toml::from_str(content)?;
        file.gemini.validate()?;
        Ok(file)
    }
}

/// Resolved application configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Directory containing `config.toml`.
    pub config_dir: PathBuf,
    /// Directory holding the key-value store files.
    pub data_dir: PathBuf,
    pub gemini: GeminiConfig,
}

impl Config {
    /// Configuration rooted at `dir` with default settings.
    pub fn with_dir(dir: PathBuf) -> Self {
        Self { data_dir: dir.clone(), config_dir: dir, gemini: GeminiConfig::default() }
    }

    /// Apply a parsed config file on top of the directory defaults.
    pub fn with_file(dir: PathBuf, file: ConfigFile) -> Self {
        let data_dir = match file.storage.data_dir {
            Some(path) if path.is_absolute() => path,
            Some(path) => dir.join(path),
            None => dir.clone(),
        };
        Self { config_dir: dir, data_dir, gemini: file.gemini }
    }

    /// `$HOME/.config/adcraft`.
    pub fn default_dir() -> Result<PathBuf, AppError> {
        let home = std::env::var("HOME")
            .map_err(|_| AppError::config_error("HOME environment variable not set"))?;
        Ok(PathBuf::from(home).join(".config").join(CONFIG_DIR_NAME))
    }

    pub fn config_file(&self) -> PathBuf {
        self.config_dir.join(CONFIG_FILE_NAME)
    }
}

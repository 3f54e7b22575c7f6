//! Configuration loading from the user's config directory.

use std::fs;
use std::path::PathBuf;

use crate::domain::{AppError, CONFIG_FILE_NAME, Config, ConfigFile};

/// Load configuration from `$HOME/.config/adcraft`.
pub fn load_config() -> Result<Config, AppError> {
    load_config_from(Config::default_dir()?)
}

/// Load configuration from `dir`, falling back to defaults when no config file exists.
pub fn load_config_from(dir: PathBuf) -> Result<Config, AppError> {
    let path = dir.join(CONFIG_FILE_NAME);
    if !path.exists() {
        return Ok(Config::with_dir(dir));
    }

    let content = fs::read_to_string(&path)?;
    let file = ConfigFile::parse(&content).map_err(|err| match err {
        AppError::TomlParse(inner) => {
            AppError::config_error(format!("Failed to parse {}: {}", path.display(), inner))
        }
        other => other,
    })?;
    Ok(Config::with_file(dir, file))
}

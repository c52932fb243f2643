use crate::error::AppError;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use super::defaults::DEFAULT_CONFIG;

const APP_DIR: &str = "folio";
const CONFIG_FILE: &str = "config.toml";
const STATE_FILE: &str = "state.toml";

#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)]
pub enum SetupError {
    #[error("Failed to determine config directory: {0}")]
    ConfigDirError(String),
    #[error("Failed to create directory {path}: {source}")]
    CreateDirError {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Failed to write file {path}: {source}")]
    WriteFileError {
        path: PathBuf,
        source: std::io::Error,
    },
}

impl From<SetupError> for AppError {
    fn from(err: SetupError) -> Self {
        AppError::Config(err.to_string())
    }
}

/// Get the standard configuration directory for the current platform
pub fn get_config_dir() -> Result<PathBuf, SetupError> {
    // Prefer ~/.config/folio on Unix-like systems, fall back to platform defaults
    if cfg!(unix) {
        if let Some(mut home_path) = dirs::home_dir() {
            home_path.push(".config");
            home_path.push(APP_DIR);
            return Ok(home_path);
        }
    }

    dirs::config_dir()
        .map(|mut path| {
            path.push(APP_DIR);
            path
        })
        .ok_or_else(|| {
            SetupError::ConfigDirError("Unable to determine config directory".to_string())
        })
}

/// Get the standard configuration file path
pub fn get_config_file_path() -> Result<PathBuf, SetupError> {
    Ok(get_config_dir()?.join(CONFIG_FILE))
}

/// File the selected theme and style are persisted to
pub fn get_state_file_path() -> Result<PathBuf, SetupError> {
    Ok(get_config_dir()?.join(STATE_FILE))
}

/// Find config file using discovery priority
pub fn find_config_file() -> Option<PathBuf> {
    // Priority order:
    // 1. ./config.toml
    // 2. Standard OS config directory
    let current_dir_config = PathBuf::from(CONFIG_FILE);
    if current_dir_config.exists() {
        return Some(current_dir_config);
    }

    match get_config_file_path() {
        Ok(standard_config) if standard_config.exists() => Some(standard_config),
        _ => None,
    }
}

/// Write the default `config.toml` into `dir` unless one exists already.
/// Returns the path of the config file.
pub fn initialize_config_dir(dir: &Path) -> Result<PathBuf, SetupError> {
    if !dir.exists() {
        fs::create_dir_all(dir).map_err(|source| SetupError::CreateDirError {
            path: dir.to_path_buf(),
            source,
        })?;
    }

    let config_file = dir.join(CONFIG_FILE);
    if !config_file.exists() {
        fs::write(&config_file, DEFAULT_CONFIG).map_err(|source| {
            SetupError::WriteFileError {
                path: config_file.clone(),
                source,
            }
        })?;
        log::info!("Created default config: {}", config_file.display());
    }

    Ok(config_file)
}

#[cfg(test)]
mod tests {
    use super::*;
    use claims::*;
    use tempfile::TempDir;

    #[test]
    fn test_config_dir_determination() {
        let config_dir = assert_ok!(get_config_dir());
        assert!(config_dir.ends_with(APP_DIR));
        assert!(assert_ok!(get_state_file_path()).ends_with("folio/state.toml"));
    }

    #[test]
    fn test_initialize_keeps_existing_file() {
        let dir = TempDir::new().unwrap();
        let target = dir.path().join("folio");

        let path = assert_ok!(initialize_config_dir(&target));
        assert_eq!(fs::read_to_string(&path).unwrap(), DEFAULT_CONFIG);

        fs::write(&path, "[logging]\nlevel = \"debug\"\n").unwrap();
        assert_ok!(initialize_config_dir(&target));
        assert!(fs::read_to_string(&path).unwrap().contains("debug"));
    }
}

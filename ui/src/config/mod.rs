use config::{Config, Environment, File, FileFormat};
use serde::Deserialize;
use std::path::Path;

pub mod app;
pub mod defaults;
pub mod limits;
pub mod setup;
pub mod validation;

pub use app::{AppConfig, ContentConfig, ServerConfig, SpotifyConfig, ThemeConfig};
pub use validation::{ConfigLoadResult, ConfigValidationError};

const ENV_PREFIX: &str = "FOLIO";

/// Load configuration from, in increasing priority: the embedded defaults,
/// `config.toml` (the explicit path, or the first one discovered), and
/// `FOLIO__SECTION__KEY` environment variables. A `.env` file is read first.
pub fn load_config(explicit: Option<&Path>) -> ConfigLoadResult {
    dotenv::dotenv().ok();

    let mut builder =
        Config::builder().add_source(File::from_str(defaults::DEFAULT_CONFIG, FileFormat::Toml));

    match explicit {
        Some(path) => {
            builder = builder.add_source(File::from(path).required(true));
        }
        None => {
            if let Some(path) = setup::find_config_file() {
                log::debug!("Using config file {}", path.display());
                builder = builder.add_source(File::from(path).required(false));
            }
        }
    }

    let env_source = Environment::with_prefix(ENV_PREFIX)
        .prefix_separator("__")
        .separator("__");

    let config = match builder.add_source(env_source).build() {
        Ok(config) => config,
        Err(e) => {
            return ConfigLoadResult::LoadError(format!(
                "Configuration loading failed: {e}. Please check your config.toml file and environment variables."
            ));
        }
    };

    match config.try_deserialize::<AppConfig>() {
        Ok(app_config) => {
            if let Err(validation_errors) = app_config.validate() {
                let error_messages: Vec<String> =
                    validation_errors.iter().map(|e| e.user_message()).collect();
                return ConfigLoadResult::DeserializeError(format!(
                    "Configuration validation failed:\n{}",
                    error_messages.join("\n\n")
                ));
            }
            ConfigLoadResult::Success(Box::new(app_config))
        }
        Err(e) => ConfigLoadResult::DeserializeError(format!("Failed to deserialize config: {e}")),
    }
}

/// Logging configuration
#[derive(Debug, Deserialize, Default, Clone)]
pub struct LoggingConfig {
    level: Option<String>,
    file: Option<String>,
}

impl LoggingConfig {
    pub fn level(&self) -> &str {
        self.level.as_deref().unwrap_or("info")
    }

    pub fn file(&self) -> Option<&str> {
        self.file.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_explicit_file_overrides_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(
            &path,
            "[logging]\nlevel = \"debug\"\n\n[content]\nprojects_dir = \"site/projects\"\n",
        )
        .unwrap();

        match load_config(Some(&path)) {
            ConfigLoadResult::Success(config) => {
                assert_eq!(config.logging().level(), "debug");
                assert_eq!(
                    config.content().projects_dir(),
                    std::path::PathBuf::from("site/projects")
                );
                assert_eq!(config.spotify().poll_interval_secs(), 30);
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn test_missing_explicit_file_is_load_error() {
        let dir = TempDir::new().unwrap();
        let result = load_config(Some(&dir.path().join("absent.toml")));
        assert!(matches!(result, ConfigLoadResult::LoadError(_)));
    }

    #[test]
    fn test_out_of_range_values_fail_validation() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[spotify]\npoll_interval_secs = 2\n").unwrap();

        match load_config(Some(&path)) {
            ConfigLoadResult::DeserializeError(msg) => {
                assert!(msg.contains("poll interval out of range"));
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }
}

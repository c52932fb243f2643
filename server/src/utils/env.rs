//! Environment variable utilities for safe and validated access.
//!
//! Spotify credentials are secrets and usually arrive through the process
//! environment (or a `.env` file loaded by the binary). These helpers make
//! sure a variable is not only present but also non-empty after trimming.

use thiserror::Error;

/// Name of the variable holding the Spotify application client id.
pub const SPOTIFY_CLIENT_ID: &str = "SPOTIFY_CLIENT_ID";
/// Name of the variable holding the Spotify application client secret.
pub const SPOTIFY_CLIENT_SECRET: &str = "SPOTIFY_CLIENT_SECRET";
/// Name of the variable holding the long-lived refresh token.
pub const SPOTIFY_REFRESH_TOKEN: &str = "SPOTIFY_REFRESH_TOKEN";

/// Errors that can occur when accessing environment variables.
#[derive(Debug, Error)]
pub enum EnvVarError {
    /// Environment variable is not set
    #[error(
        "Environment variable '{name}' not found. Please set this variable in your .env file or environment."
    )]
    NotFound { name: String },

    /// Environment variable contains invalid UTF-8 characters
    #[error(
        "Environment variable '{name}' contains invalid UTF-8 characters. Please check the value."
    )]
    InvalidUtf8 { name: String },

    /// Environment variable is set but contains only whitespace or is empty
    #[error("Environment variable '{name}' is empty. Please provide a valid value.")]
    Empty { name: String },
}

/// Utility functions for safe environment variable handling.
///
/// # Examples
///
/// ```no_run
/// use server::utils::EnvUtils;
///
/// if let Some(id) = EnvUtils::get_optional_var("SPOTIFY_CLIENT_ID") {
///     println!("Client id: {}", id);
/// }
/// ```
pub struct EnvUtils;

impl EnvUtils {
    /// Gets an environment variable, trimmed, rejecting empty values.
    ///
    /// # Errors
    ///
    /// Returns [`EnvVarError`] if the variable is missing, blank or not UTF-8.
    fn get_validated_var(name: &str) -> Result<String, EnvVarError> {
        Self::validate_value(name, std::env::var(name))
    }

    /// Gets an optional environment variable.
    ///
    /// Returns `None` when the variable is missing, empty, or invalid.
    pub fn get_optional_var(name: &str) -> Option<String> {
        Self::get_validated_var(name).ok()
    }

    fn validate_value(
        name: &str,
        value: Result<String, std::env::VarError>,
    ) -> Result<String, EnvVarError> {
        match value {
            Ok(value) => {
                let trimmed = value.trim();
                if trimmed.is_empty() {
                    Err(EnvVarError::Empty {
                        name: name.to_string(),
                    })
                } else {
                    Ok(trimmed.to_string())
                }
            }
            Err(std::env::VarError::NotPresent) => Err(EnvVarError::NotFound {
                name: name.to_string(),
            }),
            Err(std::env::VarError::NotUnicode(_)) => Err(EnvVarError::InvalidUtf8 {
                name: name.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use claims::*;

    #[test]
    fn test_blank_value_is_rejected() {
        let result = EnvUtils::validate_value("SPOTIFY_CLIENT_ID", Ok("   ".to_string()));
        assert_matches!(result, Err(EnvVarError::Empty { .. }));
    }

    #[test]
    fn test_value_is_trimmed() {
        let result = EnvUtils::validate_value("SPOTIFY_CLIENT_ID", Ok("  abc \n".to_string()));
        assert_eq!(assert_ok!(result), "abc");
    }

    #[test]
    fn test_missing_value_reports_name() {
        let result = EnvUtils::validate_value(
            "SPOTIFY_REFRESH_TOKEN",
            Err(std::env::VarError::NotPresent),
        );
        let error = assert_err!(result);
        assert!(error.to_string().contains("SPOTIFY_REFRESH_TOKEN"));
    }
}

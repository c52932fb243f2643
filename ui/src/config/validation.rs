use super::app::AppConfig;

/// Configuration validation errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigValidationError {
    #[error("Invalid poll_interval_secs: {configured} (min: {min_limit}, max: {max_limit})")]
    PollInterval {
        configured: u64,
        min_limit: u64,
        max_limit: u64,
    },
    #[error("Invalid timeout_secs: {configured} (min: {min_limit}, max: {max_limit})")]
    HttpTimeout {
        configured: u64,
        min_limit: u64,
        max_limit: u64,
    },
    #[error("Invalid server bind address: {value}")]
    BindAddress { value: String },
    #[error("Invalid {field} URL: {value}")]
    EndpointUrl { field: &'static str, value: String },
}

impl ConfigValidationError {
    pub fn user_message(&self) -> String {
        match self {
            ConfigValidationError::PollInterval {
                configured,
                min_limit,
                max_limit,
            } => {
                format!(
                    "Now playing poll interval out of range!\n\n\
                    Your configured value: {configured} seconds\n\
                    Valid range: {min_limit} - {max_limit} seconds\n\n\
                    Please update poll_interval_secs in the [spotify] section of config.toml."
                )
            }
            ConfigValidationError::HttpTimeout {
                configured,
                min_limit,
                max_limit,
            } => {
                format!(
                    "Spotify request timeout out of range!\n\n\
                    Your configured value: {configured} seconds\n\
                    Valid range: {min_limit} - {max_limit} seconds\n\n\
                    Please update timeout_secs in the [spotify] section of config.toml."
                )
            }
            ConfigValidationError::BindAddress { value } => {
                format!(
                    "Server bind address is not valid!\n\n\
                    Your configured value: {value}\n\n\
                    Use an IP address and port such as 127.0.0.1:3000."
                )
            }
            ConfigValidationError::EndpointUrl { field, value } => {
                format!(
                    "Spotify endpoint is not an HTTP URL!\n\n\
                    {field} = {value}\n\n\
                    Remove the key to use the default endpoint."
                )
            }
        }
    }
}

/// Configuration loading result
#[derive(Debug)]
pub enum ConfigLoadResult {
    Success(Box<AppConfig>),
    LoadError(String),
    DeserializeError(String),
}

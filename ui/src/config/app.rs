use super::{LoggingConfig, limits::*, validation::ConfigValidationError};
use serde::Deserialize;
use server::common::NowPlayingError;
use server::spotify::types::{NOW_PLAYING_ENDPOINT, TOKEN_ENDPOINT};
use server::spotify::{SpotifyCredentials, SpotifyEndpoints};
use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

/// Main application configuration
#[derive(Debug, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    logging: LoggingConfig,
    #[serde(default)]
    theme: ThemeConfig,
    #[serde(default)]
    spotify: SpotifyConfig,
    #[serde(default)]
    content: ContentConfig,
    #[serde(default)]
    server: ServerConfig,
}

/// Where the theme selection is persisted
#[derive(Debug, Deserialize, Default, Clone)]
pub struct ThemeConfig {
    state_file: Option<String>,
}

impl ThemeConfig {
    pub fn state_file(&self) -> Option<PathBuf> {
        self.state_file.as_deref().map(PathBuf::from)
    }
}

/// Spotify credentials and endpoints
#[derive(Deserialize, Default, Clone)]
pub struct SpotifyConfig {
    client_id: Option<String>,
    client_secret: Option<String>,
    refresh_token: Option<String>,
    token_url: Option<String>,
    now_playing_url: Option<String>,
    timeout_secs: Option<u64>,
    poll_interval_secs: Option<u64>,
}

impl std::fmt::Debug for SpotifyConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SpotifyConfig")
            .field("client_id", &self.client_id)
            .field("token_url", &self.token_url())
            .field("now_playing_url", &self.now_playing_url())
            .field("timeout_secs", &self.timeout_secs())
            .field("poll_interval_secs", &self.poll_interval_secs())
            .finish_non_exhaustive()
    }
}

impl SpotifyConfig {
    pub fn token_url(&self) -> &str {
        self.token_url.as_deref().unwrap_or(TOKEN_ENDPOINT)
    }

    pub fn now_playing_url(&self) -> &str {
        self.now_playing_url.as_deref().unwrap_or(NOW_PLAYING_ENDPOINT)
    }

    pub fn timeout_secs(&self) -> u64 {
        self.timeout_secs.unwrap_or(10)
    }

    pub fn poll_interval_secs(&self) -> u64 {
        self.poll_interval_secs.unwrap_or(30)
    }

    pub fn poll_interval(&self) -> Duration {
        Duration::from_secs(self.poll_interval_secs())
    }

    pub fn endpoints(&self) -> SpotifyEndpoints {
        SpotifyEndpoints {
            token_url: self.token_url().to_string(),
            now_playing_url: self.now_playing_url().to_string(),
            timeout: Duration::from_secs(self.timeout_secs()),
        }
    }

    /// Credentials from config when all three are set there, otherwise
    /// from the `SPOTIFY_*` environment variables.
    pub fn credentials(&self) -> Result<SpotifyCredentials, NowPlayingError> {
        match (&self.client_id, &self.client_secret, &self.refresh_token) {
            (Some(id), Some(secret), Some(token)) => SpotifyCredentials::new(id, secret, token),
            _ => SpotifyCredentials::from_env(),
        }
    }
}

/// Project content location
#[derive(Debug, Deserialize, Default, Clone)]
pub struct ContentConfig {
    projects_dir: Option<String>,
}

impl ContentConfig {
    pub fn projects_dir(&self) -> PathBuf {
        PathBuf::from(self.projects_dir.as_deref().unwrap_or("content/projects"))
    }
}

/// Proxy server settings
#[derive(Debug, Deserialize, Default, Clone)]
pub struct ServerConfig {
    bind: Option<String>,
}

impl ServerConfig {
    pub fn bind(&self) -> &str {
        self.bind.as_deref().unwrap_or("127.0.0.1:3000")
    }

    pub fn bind_addr(&self) -> Result<SocketAddr, ConfigValidationError> {
        self.bind()
            .parse()
            .map_err(|_| ConfigValidationError::BindAddress {
                value: self.bind().to_string(),
            })
    }
}

impl AppConfig {
    /// Validate the configuration against defined limits
    pub fn validate(&self) -> Result<(), Vec<ConfigValidationError>> {
        let mut errors = Vec::new();

        let interval = self.spotify.poll_interval_secs();
        if !(MIN_POLL_INTERVAL_SECS..=MAX_POLL_INTERVAL_SECS).contains(&interval) {
            errors.push(ConfigValidationError::PollInterval {
                configured: interval,
                min_limit: MIN_POLL_INTERVAL_SECS,
                max_limit: MAX_POLL_INTERVAL_SECS,
            });
        }

        let timeout = self.spotify.timeout_secs();
        if !(MIN_HTTP_TIMEOUT_SECS..=MAX_HTTP_TIMEOUT_SECS).contains(&timeout) {
            errors.push(ConfigValidationError::HttpTimeout {
                configured: timeout,
                min_limit: MIN_HTTP_TIMEOUT_SECS,
                max_limit: MAX_HTTP_TIMEOUT_SECS,
            });
        }

        for (field, value) in [
            ("token_url", self.spotify.token_url()),
            ("now_playing_url", self.spotify.now_playing_url()),
        ] {
            if !(value.starts_with("https://") || value.starts_with("http://")) {
                errors.push(ConfigValidationError::EndpointUrl {
                    field,
                    value: value.to_string(),
                });
            }
        }

        if let Err(e) = self.server.bind_addr() {
            errors.push(e);
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    // Configuration section accessors
    pub fn logging(&self) -> &LoggingConfig {
        &self.logging
    }

    pub fn theme(&self) -> &ThemeConfig {
        &self.theme
    }

    pub fn spotify(&self) -> &SpotifyConfig {
        &self.spotify
    }

    pub fn content(&self) -> &ContentConfig {
        &self.content
    }

    pub fn server(&self) -> &ServerConfig {
        &self.server
    }
}

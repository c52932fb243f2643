use std::path::PathBuf;
use thiserror::Error;

/// HTTP-related errors with context for the outbound calls made to Spotify.
///
/// The now-playing proxy performs two requests per refresh: the token exchange
/// and the currently-playing lookup. Both report transport problems through
/// this enum so callers can log the failing URL without digging into
/// `reqwest` internals.
///
/// # Examples
///
/// ```no_run
/// use server::common::errors::HttpError;
///
/// fn log_http_error(error: &HttpError) {
///     match error {
///         HttpError::RequestFailed { url, reason } => {
///             log::error!("HTTP request failed: url={}, reason={}", url, reason);
///         }
///         HttpError::Timeout { url, seconds } => {
///             log::warn!("HTTP request timeout: url={}, duration={}s", url, seconds);
///         }
///         _ => {
///             log::error!("HTTP error: {}", error);
///         }
///     }
/// }
/// ```
#[derive(Debug, Error)]
pub enum HttpError {
    /// HTTP client initialization failed.
    #[error("HTTP client creation failed: {reason}")]
    ClientCreation { reason: String },

    /// The request could not be sent or the connection broke mid-way.
    #[error("Request failed: {url} - {reason}")]
    RequestFailed { url: String, reason: String },

    /// The request exceeded the configured timeout.
    #[error("Request timeout after {seconds}s: {url}")]
    Timeout { url: String, seconds: u64 },

    /// The body did not match the shape we expected.
    #[error("Invalid response: expected {expected}, got {actual}")]
    InvalidResponse { expected: String, actual: String },
}

impl HttpError {
    /// Classify a `reqwest` failure for the given URL.
    pub fn from_reqwest(url: &str, error: reqwest::Error, timeout_secs: u64) -> Self {
        if error.is_timeout() {
            HttpError::Timeout {
                url: url.to_string(),
                seconds: timeout_secs,
            }
        } else if error.is_builder() {
            HttpError::ClientCreation {
                reason: error.to_string(),
            }
        } else {
            HttpError::RequestFailed {
                url: url.to_string(),
                reason: error.to_string(),
            }
        }
    }
}

/// Errors produced while resolving the currently playing track.
///
/// None of these reach a visitor of the site: the proxy turns every variant
/// into an empty 500 response and the widget simply renders nothing.
#[derive(Debug, Error)]
pub enum NowPlayingError {
    /// One of the three Spotify credentials is not configured.
    #[error("Missing Spotify credentials: {missing}")]
    MissingCredentials { missing: String },

    /// The accounts service refused the refresh token.
    #[error("Token error: {error}")]
    Token { error: String },

    #[error(transparent)]
    Http(#[from] HttpError),
}

/// Errors raised by the project content loader.
#[derive(Debug, Error)]
pub enum ContentError {
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The file does not start with a `+++` delimited header.
    #[error("Missing front matter in {path}")]
    MissingFrontMatter { path: PathBuf },

    #[error("Invalid front matter in {path}: {reason}")]
    FrontMatter { path: PathBuf, reason: String },

    #[error("Invalid date '{value}' in {path}, expected YYYY-MM-DD")]
    InvalidDate { path: PathBuf, value: String },

    #[error("Project '{slug}' not found")]
    NotFound { slug: String },
}

use super::types::{TokenErrorResponse, TokenResponse};
use crate::common::{HttpError, NowPlayingError};
use crate::utils::env::{
    EnvUtils, SPOTIFY_CLIENT_ID, SPOTIFY_CLIENT_SECRET, SPOTIFY_REFRESH_TOKEN,
};
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::RwLock;

/// Refresh slightly before Spotify would reject the token.
const REFRESH_BUFFER: Duration = Duration::from_secs(60);
/// Lifetime assumed when the accounts service omits `expires_in`.
const DEFAULT_TOKEN_LIFETIME_SECS: u64 = 3600;

/// The three secrets needed for the refresh-token grant.
#[derive(Clone)]
pub struct SpotifyCredentials {
    client_id: String,
    client_secret: String,
    refresh_token: String,
}

impl std::fmt::Debug for SpotifyCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SpotifyCredentials")
            .field("client_id", &self.client_id)
            .finish_non_exhaustive()
    }
}

impl SpotifyCredentials {
    /// Build credentials, rejecting blank values.
    ///
    /// The error lists every missing value at once so a half-filled `.env`
    /// is fixed in one go.
    pub fn new(
        client_id: impl Into<String>,
        client_secret: impl Into<String>,
        refresh_token: impl Into<String>,
    ) -> Result<Self, NowPlayingError> {
        let client_id = client_id.into().trim().to_string();
        let client_secret = client_secret.into().trim().to_string();
        let refresh_token = refresh_token.into().trim().to_string();

        let missing: Vec<&str> = [
            (SPOTIFY_CLIENT_ID, client_id.is_empty()),
            (SPOTIFY_CLIENT_SECRET, client_secret.is_empty()),
            (SPOTIFY_REFRESH_TOKEN, refresh_token.is_empty()),
        ]
        .into_iter()
        .filter_map(|(name, is_missing)| is_missing.then_some(name))
        .collect();

        if !missing.is_empty() {
            return Err(NowPlayingError::MissingCredentials {
                missing: missing.join(", "),
            });
        }

        Ok(Self {
            client_id,
            client_secret,
            refresh_token,
        })
    }

    /// Read the credentials from `SPOTIFY_CLIENT_ID`, `SPOTIFY_CLIENT_SECRET`
    /// and `SPOTIFY_REFRESH_TOKEN`.
    pub fn from_env() -> Result<Self, NowPlayingError> {
        Self::new(
            EnvUtils::get_optional_var(SPOTIFY_CLIENT_ID).unwrap_or_default(),
            EnvUtils::get_optional_var(SPOTIFY_CLIENT_SECRET).unwrap_or_default(),
            EnvUtils::get_optional_var(SPOTIFY_REFRESH_TOKEN).unwrap_or_default(),
        )
    }

    /// Value of the `Authorization` header for the token exchange.
    pub fn basic_authorization(&self) -> String {
        let raw = format!("{}:{}", self.client_id, self.client_secret);
        format!("Basic {}", STANDARD.encode(raw))
    }
}

/// An access token together with the instant it stops being valid.
#[derive(Debug, Clone)]
pub struct CachedToken {
    pub token: String,
    pub expires_at: Instant,
}

impl CachedToken {
    pub fn new(token: String, expires_in: Duration) -> Self {
        Self {
            token,
            expires_at: Instant::now() + expires_in,
        }
    }

    /// True once the token is inside the refresh buffer.
    pub fn needs_refresh(&self) -> bool {
        Instant::now() + REFRESH_BUFFER >= self.expires_at
    }
}

/// Single-slot cache for the current access token.
#[derive(Clone, Default)]
pub struct TokenCache {
    slot: Arc<RwLock<Option<CachedToken>>>,
}

impl TokenCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// The cached token, unless it is due for refresh.
    pub async fn get(&self) -> Option<String> {
        let slot = self.slot.read().await;
        slot.as_ref()
            .filter(|token| !token.needs_refresh())
            .map(|token| token.token.clone())
    }

    pub async fn set(&self, token: CachedToken) {
        *self.slot.write().await = Some(token);
    }

    pub async fn invalidate(&self) {
        *self.slot.write().await = None;
    }
}

/// Exchanges the refresh token for short-lived access tokens.
#[derive(Clone)]
pub struct SpotifyAuth {
    credentials: SpotifyCredentials,
    http_client: reqwest::Client,
    token_url: String,
    timeout_secs: u64,
    cache: TokenCache,
}

impl SpotifyAuth {
    pub fn new(
        credentials: SpotifyCredentials,
        http_client: reqwest::Client,
        token_url: impl Into<String>,
        timeout: Duration,
    ) -> Self {
        Self {
            credentials,
            http_client,
            token_url: token_url.into(),
            timeout_secs: timeout.as_secs(),
            cache: TokenCache::new(),
        }
    }

    /// Return a valid access token, refreshing it when needed.
    pub async fn access_token(&self) -> Result<String, NowPlayingError> {
        if let Some(token) = self.cache.get().await {
            return Ok(token);
        }

        log::debug!("Requesting new Spotify access token");
        let token = self.request_token().await?;
        let access_token = token.token.clone();
        self.cache.set(token).await;
        Ok(access_token)
    }

    /// Drop the cached token, e.g. after the API answered 401.
    pub async fn invalidate(&self) {
        self.cache.invalidate().await;
    }

    async fn request_token(&self) -> Result<CachedToken, NowPlayingError> {
        let params = [
            ("grant_type", "refresh_token"),
            ("refresh_token", self.credentials.refresh_token.as_str()),
        ];

        let response = self
            .http_client
            .post(&self.token_url)
            .header(
                reqwest::header::AUTHORIZATION,
                self.credentials.basic_authorization(),
            )
            .form(&params)
            .send()
            .await
            .map_err(|e| HttpError::from_reqwest(&self.token_url, e, self.timeout_secs))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_info = response
                .json::<TokenErrorResponse>()
                .await
                .unwrap_or(TokenErrorResponse {
                    error: format!("http_{}", status.as_u16()),
                    error_description: None,
                });

            log::error!(
                "Spotify token error: {} ({})",
                error_info.error,
                error_info
                    .error_description
                    .as_deref()
                    .unwrap_or("no description")
            );
            return Err(NowPlayingError::Token {
                error: error_info.error,
            });
        }

        let token: TokenResponse =
            response
                .json()
                .await
                .map_err(|e| HttpError::InvalidResponse {
                    expected: "token response".to_string(),
                    actual: e.to_string(),
                })?;

        Ok(CachedToken::new(
            token.access_token,
            Duration::from_secs(token.expires_in.unwrap_or(DEFAULT_TOKEN_LIFETIME_SECS)),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use claims::*;

    #[test]
    fn test_missing_credentials_are_listed() {
        let result = SpotifyCredentials::new("id", " ", "");
        match assert_err!(result) {
            NowPlayingError::MissingCredentials { missing } => {
                assert_eq!(missing, "SPOTIFY_CLIENT_SECRET, SPOTIFY_REFRESH_TOKEN");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_basic_authorization_header() {
        let credentials = assert_ok!(SpotifyCredentials::new("id", "secret", "token"));
        // base64("id:secret")
        assert_eq!(credentials.basic_authorization(), "Basic aWQ6c2VjcmV0");
    }

    #[test]
    fn test_debug_hides_secrets() {
        let credentials = assert_ok!(SpotifyCredentials::new("id", "secret", "token"));
        let debug = format!("{credentials:?}");
        assert!(!debug.contains("secret\""));
        assert!(!debug.contains("token\""));
    }

    #[test]
    fn test_cached_token_refresh_window() {
        let fresh = CachedToken::new("a".to_string(), Duration::from_secs(3600));
        assert!(!fresh.needs_refresh());

        let closing = CachedToken::new("b".to_string(), Duration::from_secs(30));
        assert!(closing.needs_refresh());
    }

    #[tokio::test]
    async fn test_cache_skips_tokens_due_for_refresh() {
        let cache = TokenCache::new();
        assert_none!(cache.get().await);

        cache
            .set(CachedToken::new("short".to_string(), Duration::from_secs(5)))
            .await;
        assert_none!(cache.get().await);

        cache
            .set(CachedToken::new("long".to_string(), Duration::from_secs(600)))
            .await;
        assert_eq!(cache.get().await.as_deref(), Some("long"));

        cache.invalidate().await;
        assert_none!(cache.get().await);
    }
}

use super::auth::{SpotifyAuth, SpotifyCredentials};
use super::types::{CurrentlyPlayingResponse, NowPlaying, SpotifyEndpoints};
use crate::common::{HttpError, NowPlayingError};
use async_trait::async_trait;
use reqwest::StatusCode;

/// Anything that can answer "what is playing right now".
///
/// The proxy route and the poller depend on this trait rather than on
/// [`SpotifyClient`] so they can be driven by a canned source.
#[async_trait]
pub trait NowPlayingSource: Send + Sync {
    /// `Ok(None)` means nothing to show; it is not an error.
    async fn now_playing(&self) -> Result<Option<NowPlaying>, NowPlayingError>;
}

/// Client for the Spotify currently-playing endpoint.
#[derive(Clone)]
pub struct SpotifyClient {
    http_client: reqwest::Client,
    auth: SpotifyAuth,
    endpoints: SpotifyEndpoints,
}

impl SpotifyClient {
    pub fn new(
        credentials: SpotifyCredentials,
        endpoints: SpotifyEndpoints,
    ) -> Result<Self, NowPlayingError> {
        let http_client = reqwest::Client::builder()
            .timeout(endpoints.timeout)
            .build()
            .map_err(|e| HttpError::ClientCreation {
                reason: e.to_string(),
            })?;

        let auth = SpotifyAuth::new(
            credentials,
            http_client.clone(),
            endpoints.token_url.clone(),
            endpoints.timeout,
        );

        Ok(Self {
            http_client,
            auth,
            endpoints,
        })
    }

    pub fn endpoints(&self) -> &SpotifyEndpoints {
        &self.endpoints
    }

    async fn fetch(&self) -> Result<Option<NowPlaying>, NowPlayingError> {
        let access_token = self.auth.access_token().await?;
        let url = &self.endpoints.now_playing_url;

        let response = self
            .http_client
            .get(url)
            .bearer_auth(access_token)
            .send()
            .await
            .map_err(|e| HttpError::from_reqwest(url, e, self.endpoints.timeout.as_secs()))?;

        let status = response.status();
        log::debug!("Now playing status: {status}");

        if status == StatusCode::UNAUTHORIZED {
            self.auth.invalidate().await;
        }

        let body = response.text().await.map_err(|e| HttpError::InvalidResponse {
            expected: "currently playing body".to_string(),
            actual: e.to_string(),
        })?;

        interpret_response(status, &body)
    }
}

#[async_trait]
impl NowPlayingSource for SpotifyClient {
    async fn now_playing(&self) -> Result<Option<NowPlaying>, NowPlayingError> {
        self.fetch().await
    }
}

/// Map a currently-playing HTTP answer to the reduced summary.
///
/// 204 and every status from 400 upwards mean "nothing to show", as does a
/// body without an `item`.
pub fn interpret_response(
    status: StatusCode,
    body: &str,
) -> Result<Option<NowPlaying>, NowPlayingError> {
    if status == StatusCode::NO_CONTENT || status.as_u16() >= 400 {
        log::debug!("No song currently playing or upstream error ({status})");
        return Ok(None);
    }

    if body.trim().is_empty() {
        return Ok(None);
    }

    let response: CurrentlyPlayingResponse =
        serde_json::from_str(body).map_err(|e| HttpError::InvalidResponse {
            expected: "currently playing JSON".to_string(),
            actual: e.to_string(),
        })?;

    let track = NowPlaying::from_response(response);
    match &track {
        Some(track) => log::debug!("Now playing: {} by {}", track.title, track.artist),
        None => log::debug!("No item in currently playing response"),
    }
    Ok(track)
}

use crate::common::NowPlayingError;
use crate::spotify::{NowPlaying, NowPlayingSource};
use axum::{
    Json, Router,
    extract::State,
    http::{HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
    routing::get,
};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;

/// Path the site's widget polls.
pub const NOW_PLAYING_ROUTE: &str = "/api/spotify/now-playing";

#[derive(Clone)]
pub struct ProxyState {
    source: Arc<dyn NowPlayingSource>,
}

impl ProxyState {
    pub fn new(source: Arc<dyn NowPlayingSource>) -> Self {
        Self { source }
    }
}

pub fn router(source: Arc<dyn NowPlayingSource>) -> Router {
    Router::new()
        .route(NOW_PLAYING_ROUTE, get(now_playing_handler))
        .with_state(ProxyState::new(source))
}

pub async fn now_playing_handler(State(state): State<ProxyState>) -> Response {
    respond(state.source.now_playing().await)
}

/// 204 when nothing plays, 200 with the summary, 500 without a body on
/// failure. Responses are never cached.
pub fn respond(result: Result<Option<NowPlaying>, NowPlayingError>) -> Response {
    let mut response = match result {
        Ok(Some(track)) => {
            log::info!("Returning track: {} by {}", track.title, track.artist);
            Json(track).into_response()
        }
        Ok(None) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => {
            log::error!("Error fetching Spotify data: {e}");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    };

    response
        .headers_mut()
        .insert(header::CACHE_CONTROL, HeaderValue::from_static("no-store"));
    response
}

/// Serve the proxy route until `shutdown` is cancelled.
pub async fn serve(
    addr: SocketAddr,
    source: Arc<dyn NowPlayingSource>,
    shutdown: CancellationToken,
) -> std::io::Result<()> {
    let listener = tokio::net::TcpListener::bind(addr).await?;
    log::info!("Now playing proxy listening on http://{addr}{NOW_PLAYING_ROUTE}");

    axum::serve(listener, router(source))
        .with_graceful_shutdown(async move { shutdown.cancelled().await })
        .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::HttpError;
    use async_trait::async_trait;
    use claims::*;

    struct Fixed(Option<NowPlaying>);

    #[async_trait]
    impl NowPlayingSource for Fixed {
        async fn now_playing(&self) -> Result<Option<NowPlaying>, NowPlayingError> {
            Ok(self.0.clone())
        }
    }

    struct Failing;

    #[async_trait]
    impl NowPlayingSource for Failing {
        async fn now_playing(&self) -> Result<Option<NowPlaying>, NowPlayingError> {
            Err(HttpError::RequestFailed {
                url: "https://api.spotify.com".to_string(),
                reason: "connection reset".to_string(),
            }
            .into())
        }
    }

    fn state(source: impl NowPlayingSource + 'static) -> State<ProxyState> {
        State(ProxyState::new(Arc::new(source)))
    }

    #[tokio::test]
    async fn test_nothing_playing_is_no_content() {
        let response = now_playing_handler(state(Fixed(None))).await;
        assert_eq!(response.status(), StatusCode::NO_CONTENT);
        assert_eq!(
            response.headers().get(header::CACHE_CONTROL),
            Some(&HeaderValue::from_static("no-store"))
        );
    }

    #[tokio::test]
    async fn test_track_is_json() {
        let track = NowPlaying {
            is_playing: false,
            title: "Svefn-g-englar".to_string(),
            artist: "Sigur Rós".to_string(),
            album: "Ágætis byrjun".to_string(),
            album_image_url: Some("img".to_string()),
            song_url: "url".to_string(),
        };
        let response = now_playing_handler(state(Fixed(Some(track.clone())))).await;
        assert_eq!(response.status(), StatusCode::OK);

        let body = assert_ok!(axum::body::to_bytes(response.into_body(), usize::MAX).await);
        let decoded: NowPlaying = assert_ok!(serde_json::from_slice(&body));
        assert_eq!(decoded, track);
    }

    #[tokio::test]
    async fn test_failure_is_empty_server_error() {
        let response = now_playing_handler(state(Failing)).await;
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = assert_ok!(axum::body::to_bytes(response.into_body(), usize::MAX).await);
        assert!(body.is_empty());
    }
}

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Spotify accounts endpoint used for the refresh-token exchange.
pub const TOKEN_ENDPOINT: &str = "https://accounts.spotify.com/api/token";
/// Spotify Web API endpoint describing the user's current playback.
pub const NOW_PLAYING_ENDPOINT: &str = "https://api.spotify.com/v1/me/player/currently-playing";

/// Endpoints and timeout used by the Spotify client.
///
/// Both URLs are configurable so tests and self-hosted mocks can point the
/// client somewhere other than the public API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpotifyEndpoints {
    pub token_url: String,
    pub now_playing_url: String,
    pub timeout: Duration,
}

impl Default for SpotifyEndpoints {
    fn default() -> Self {
        Self {
            token_url: TOKEN_ENDPOINT.to_string(),
            now_playing_url: NOW_PLAYING_ENDPOINT.to_string(),
            timeout: Duration::from_secs(10),
        }
    }
}

/// Successful answer of the accounts service.
#[derive(Debug, Deserialize)]
pub(crate) struct TokenResponse {
    pub access_token: String,
    #[serde(default)]
    pub expires_in: Option<u64>,
}

/// Error answer of the accounts service (`{"error": "invalid_grant", ...}`).
#[derive(Debug, Deserialize)]
pub(crate) struct TokenErrorResponse {
    pub error: String,
    #[serde(default)]
    pub error_description: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct CurrentlyPlayingResponse {
    #[serde(default)]
    pub is_playing: bool,
    #[serde(default)]
    pub item: Option<Track>,
}

#[derive(Debug, Deserialize)]
pub struct Track {
    pub name: String,
    #[serde(default)]
    pub artists: Vec<Artist>,
    #[serde(default)]
    pub album: Album,
    #[serde(default)]
    pub external_urls: ExternalUrls,
}

#[derive(Debug, Deserialize)]
pub struct Artist {
    pub name: String,
}

#[derive(Debug, Default, Deserialize)]
pub struct Album {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub images: Vec<Image>,
}

#[derive(Debug, Deserialize)]
pub struct Image {
    pub url: String,
}

#[derive(Debug, Default, Deserialize)]
pub struct ExternalUrls {
    #[serde(default)]
    pub spotify: String,
}

/// The reduced track summary served by the proxy route.
///
/// Serialized in camelCase because the site's widget reads `isPlaying`,
/// `albumImageUrl` and `songUrl` straight from the JSON body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NowPlaying {
    pub is_playing: bool,
    pub title: String,
    pub artist: String,
    pub album: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub album_image_url: Option<String>,
    pub song_url: String,
}

impl NowPlaying {
    /// Reduce a currently-playing payload; `None` when nothing is loaded.
    pub fn from_response(response: CurrentlyPlayingResponse) -> Option<Self> {
        let item = response.item?;

        let artist = item
            .artists
            .iter()
            .map(|artist| artist.name.as_str())
            .collect::<Vec<_>>()
            .join(", ");

        Some(Self {
            is_playing: response.is_playing,
            title: item.name,
            artist,
            album: item.album.name,
            album_image_url: item.album.images.into_iter().next().map(|image| image.url),
            song_url: item.external_urls.spotify,
        })
    }
}

//! Spotify integration: refresh-token auth and the currently-playing lookup.

pub mod auth;
pub mod client;
pub mod types;

pub use auth::{SpotifyAuth, SpotifyCredentials, TokenCache};
pub use client::{NowPlayingSource, SpotifyClient, interpret_response};
pub use types::{NowPlaying, SpotifyEndpoints};

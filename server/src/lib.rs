//! # Folio Server Library
//!
//! Server-side pieces of the Folio portfolio site: the Spotify "now playing"
//! proxy and the project content loader.
//!
//! ## Modules
//!
//! - [`spotify`] - Refresh-token auth and the currently-playing client
//! - [`now_playing`] - Proxy route, 30 second poller and badge view model
//! - [`content`] - Project pages read from `.mdx` files with front matter
//! - [`utils`] - Environment variable helpers
//! - [`common`] - Error types shared by the modules above

pub mod common;
pub mod content;
pub mod now_playing;
pub mod spotify;
pub mod utils;

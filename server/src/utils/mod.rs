//! # Server Utilities Module
//!
//! Small helpers shared by the server components.
//!
//! The [`env`] module provides validated access to environment variables,
//! which is how the Spotify credentials reach the proxy:
//!
//! ```no_run
//! use server::utils::EnvUtils;
//!
//! let client_id = EnvUtils::get_optional_var("SPOTIFY_CLIENT_ID");
//! let poll_secs = EnvUtils::get_optional_var("FOLIO__SPOTIFY__POLL_INTERVAL_SECS")
//!     .unwrap_or_else(|| "30".to_string());
//! ```

pub mod env;

pub use env::{EnvUtils, EnvVarError};

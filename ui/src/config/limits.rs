//! Global limits for configurable values

/// Shortest now-playing poll interval; Spotify rate limits anything tighter
pub const MIN_POLL_INTERVAL_SECS: u64 = 5;

/// Longest now-playing poll interval (1 hour)
pub const MAX_POLL_INTERVAL_SECS: u64 = 3600;

/// Minimum HTTP timeout for Spotify requests
pub const MIN_HTTP_TIMEOUT_SECS: u64 = 1;

/// Maximum HTTP timeout for Spotify requests
pub const MAX_HTTP_TIMEOUT_SECS: u64 = 120;

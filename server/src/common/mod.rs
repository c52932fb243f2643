pub mod errors;

pub use errors::{ContentError, HttpError, NowPlayingError};

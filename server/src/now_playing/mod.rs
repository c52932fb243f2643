//! The now-playing proxy route, its 30 second poller and the badge view model.

pub mod poller;
pub mod proxy;
pub mod widget;

pub use poller::{DEFAULT_POLL_INTERVAL, NowPlayingPoller, NowPlayingSlot};
pub use proxy::{NOW_PLAYING_ROUTE, router, serve};
pub use widget::NowPlayingWidget;

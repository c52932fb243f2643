use crate::common::NowPlayingError;
use crate::spotify::{NowPlaying, NowPlayingSource};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;
use tokio::time::{MissedTickBehavior, interval};
use tokio_util::sync::CancellationToken;

/// How often the widget asks the proxy for the current track.
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(30);

/// The single display field shared between the poller and the widget.
#[derive(Clone, Default)]
pub struct NowPlayingSlot {
    inner: Arc<RwLock<Option<NowPlaying>>>,
}

impl NowPlayingSlot {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn get(&self) -> Option<NowPlaying> {
        self.inner.read().await.clone()
    }

    /// Record a resolved response. Errors and "nothing playing" both clear
    /// the slot so the widget renders nothing.
    pub async fn store(&self, result: Result<Option<NowPlaying>, NowPlayingError>) {
        let value = match result {
            Ok(track) => track,
            Err(e) => {
                log::warn!("Error fetching now playing data: {e}");
                None
            }
        };
        *self.inner.write().await = value;
    }
}

/// Periodically refreshes a [`NowPlayingSlot`] from a [`NowPlayingSource`].
///
/// Each tick fires an independent request. A request still in flight when
/// the next tick arrives is neither awaited nor cancelled; the slot holds
/// whatever response resolved last.
pub struct NowPlayingPoller {
    source: Arc<dyn NowPlayingSource>,
    poll_interval: Duration,
    slot: NowPlayingSlot,
    shutdown: CancellationToken,
}

impl NowPlayingPoller {
    pub fn new(source: Arc<dyn NowPlayingSource>, poll_interval: Duration) -> Self {
        Self {
            source,
            poll_interval,
            slot: NowPlayingSlot::new(),
            shutdown: CancellationToken::new(),
        }
    }

    pub fn slot(&self) -> NowPlayingSlot {
        self.slot.clone()
    }

    pub fn poll_interval(&self) -> Duration {
        self.poll_interval
    }

    /// Fetch once and wait for the result to land in the slot.
    pub async fn refresh_once(&self) {
        let result = self.source.now_playing().await;
        self.slot.store(result).await;
    }

    /// Start the background loop; the first request fires immediately.
    pub fn start(self: Arc<Self>) -> tokio::task::JoinHandle<()> {
        tokio::spawn(async move {
            self.run().await;
        })
    }

    /// Stop ticking and abandon requests that have not resolved yet.
    pub fn stop(&self) {
        self.shutdown.cancel();
    }

    async fn run(&self) {
        let mut ticker = interval(self.poll_interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            tokio::select! {
                () = self.shutdown.cancelled() => {
                    log::info!("Now playing poller shutting down");
                    break;
                }
                _ = ticker.tick() => self.fire(),
            }
        }
    }

    pub(crate) fn fire(&self) {
        let source = self.source.clone();
        let slot = self.slot.clone();
        let shutdown = self.shutdown.clone();
        tokio::spawn(async move {
            tokio::select! {
                () = shutdown.cancelled() => {}
                result = source.now_playing() => slot.store(result).await,
            }
        });
    }
}

use crate::config::SpotifyConfig;
use crate::error::AppResult;
use server::now_playing::{NowPlayingPoller, NowPlayingWidget, widget::render_line};
use server::spotify::{NowPlaying, NowPlayingSource, SpotifyClient};
use std::io::Write;
use std::sync::Arc;
use std::time::Duration;
use tokio_util::sync::CancellationToken;

const NOTHING_PLAYING: &str = "Nothing playing";
/// How often the watch loop re-renders the badge.
const RENDER_INTERVAL: Duration = Duration::from_secs(1);

pub fn spotify_source(config: &SpotifyConfig) -> AppResult<Arc<dyn NowPlayingSource>> {
    let credentials = config.credentials()?;
    let client = SpotifyClient::new(credentials, config.endpoints())?;
    Ok(Arc::new(client))
}

/// Ask once and print the badge line. Unlike the badge, a failure is reported.
pub async fn show_once(
    source: &dyn NowPlayingSource,
    open_song: bool,
    out: &mut dyn Write,
) -> AppResult<Option<NowPlaying>> {
    let track = source.now_playing().await?;

    match &track {
        Some(track) => {
            writeln!(out, "{}", render_line(track))?;
            writeln!(out, "{}", track.song_url)?;
            if open_song {
                open_in_browser(&track.song_url);
            }
        }
        None => writeln!(out, "{NOTHING_PLAYING}")?,
    }

    Ok(track)
}

fn open_in_browser(url: &str) {
    if let Err(e) = open::that(url) {
        log::warn!("Failed to open {url}: {e}");
    }
}

/// Poll in the background and print the badge whenever it changes, until
/// `shutdown` is cancelled.
pub async fn watch(
    source: Arc<dyn NowPlayingSource>,
    poll_interval: Duration,
    out: &mut dyn Write,
    shutdown: CancellationToken,
) -> AppResult<()> {
    let poller = Arc::new(NowPlayingPoller::new(source, poll_interval));
    let widget = NowPlayingWidget::new(poller.slot());
    let handle = poller.clone().start();

    let mut ticker = tokio::time::interval(RENDER_INTERVAL);
    let mut last_line: Option<Option<String>> = None;

    loop {
        tokio::select! {
            _ = shutdown.cancelled() => break,
            _ = ticker.tick() => {
                let line = widget.render().await;
                if last_line.as_ref() != Some(&line) {
                    writeln!(out, "{}", line.as_deref().unwrap_or(NOTHING_PLAYING))?;
                    out.flush()?;
                    last_line = Some(line);
                }
            }
        }
    }

    poller.stop();
    if let Err(e) = handle.await {
        log::warn!("Now playing poller ended abnormally: {e}");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use server::common::NowPlayingError;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn track(title: &str) -> NowPlaying {
        NowPlaying {
            is_playing: true,
            title: title.to_string(),
            artist: "Bonobo".to_string(),
            album: "Migration".to_string(),
            album_image_url: None,
            song_url: "https://open.spotify.com/track/abc".to_string(),
        }
    }

    struct Playlist {
        calls: AtomicUsize,
    }

    #[async_trait]
    impl NowPlayingSource for Playlist {
        async fn now_playing(&self) -> Result<Option<NowPlaying>, NowPlayingError> {
            match self.calls.fetch_add(1, Ordering::SeqCst) {
                0 => Ok(Some(track("Kerala"))),
                1 => Ok(Some(track("Outlier"))),
                _ => Ok(None),
            }
        }
    }

    struct Silent;

    #[async_trait]
    impl NowPlayingSource for Silent {
        async fn now_playing(&self) -> Result<Option<NowPlaying>, NowPlayingError> {
            Ok(None)
        }
    }

    #[tokio::test]
    async fn test_show_once_nothing_playing() {
        let mut out = Vec::new();
        let track = show_once(&Silent, false, &mut out).await.unwrap();
        assert!(track.is_none());
        assert_eq!(String::from_utf8(out).unwrap(), "Nothing playing\n");
    }

    #[tokio::test]
    async fn test_show_once_prints_badge_and_link() {
        let source = Playlist {
            calls: AtomicUsize::new(0),
        };
        let mut out = Vec::new();
        show_once(&source, false, &mut out).await.unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with("▶ Kerala · Bonobo\n"));
        assert!(text.contains("https://open.spotify.com/track/abc"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_watch_prints_each_change_once() {
        let source = Arc::new(Playlist {
            calls: AtomicUsize::new(0),
        });
        let shutdown = CancellationToken::new();

        let stopper = shutdown.clone();
        tokio::spawn(async move {
            tokio::time::sleep(Duration::from_secs(75)).await;
            stopper.cancel();
        });

        let mut out = Vec::new();
        watch(source, Duration::from_secs(30), &mut out, shutdown)
            .await
            .unwrap();

        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        let tracks: Vec<&str> = lines
            .iter()
            .copied()
            .filter(|line| *line != NOTHING_PLAYING)
            .collect();
        assert_eq!(tracks, vec!["▶ Kerala · Bonobo", "▶ Outlier · Bonobo"]);
        assert_eq!(lines.last(), Some(&NOTHING_PLAYING));
        assert!(lines.windows(2).all(|pair| pair[0] != pair[1]));
    }
}

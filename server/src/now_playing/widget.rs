use super::poller::NowPlayingSlot;
use crate::spotify::NowPlaying;

/// View model of the small "now playing" badge.
///
/// Mirrors the site's behaviour: when the slot is empty the badge is not
/// rendered at all.
pub struct NowPlayingWidget {
    slot: NowPlayingSlot,
}

impl NowPlayingWidget {
    pub fn new(slot: NowPlayingSlot) -> Self {
        Self { slot }
    }

    pub async fn render(&self) -> Option<String> {
        self.slot.get().await.as_ref().map(render_line)
    }

    /// Link the badge points at.
    pub async fn link(&self) -> Option<String> {
        self.slot.get().await.map(|track| track.song_url)
    }
}

pub fn render_line(track: &NowPlaying) -> String {
    let marker = if track.is_playing { "▶" } else { "❚❚" };
    if track.artist.is_empty() {
        format!("{marker} {}", track.title)
    } else {
        format!("{marker} {} · {}", track.title, track.artist)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use claims::*;

    fn track(is_playing: bool, artist: &str) -> NowPlaying {
        NowPlaying {
            is_playing,
            title: "Avril 14th".to_string(),
            artist: artist.to_string(),
            album: "Drukqs".to_string(),
            album_image_url: None,
            song_url: "https://open.spotify.com/track/3".to_string(),
        }
    }

    #[test]
    fn test_render_line_markers() {
        assert_eq!(render_line(&track(true, "Aphex Twin")), "▶ Avril 14th · Aphex Twin");
        assert_eq!(render_line(&track(false, "")), "❚❚ Avril 14th");
    }

    #[tokio::test]
    async fn test_empty_slot_renders_nothing() {
        let slot = NowPlayingSlot::new();
        let widget = NowPlayingWidget::new(slot.clone());
        assert_none!(widget.render().await);
        assert_none!(widget.link().await);

        slot.store(Ok(Some(track(true, "Aphex Twin")))).await;
        assert_some!(widget.render().await);
        assert_eq!(
            widget.link().await.as_deref(),
            Some("https://open.spotify.com/track/3")
        );
    }
}

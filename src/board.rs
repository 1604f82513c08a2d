use colored::Colorize;
use tabled::Table;

use crate::{
    preview::{
        ButtonClass, ButtonId, PreviewAudio, PreviewButton, PreviewPage, PreviewRequest,
        is_preview_available,
    },
    types::{Playlist, Track, TrackTableRow},
};

pub struct TrackRow<A> {
    pub track: Track,
    button: PreviewButton,
    audio: Option<A>,
    rendered: PreviewButton,
}

/// The page of a generated playlist: one row per track, each row holding a
/// preview button and, when the track has a preview clip, its audio resource.
pub struct TrackBoard<A> {
    title: Option<String>,
    rows: Vec<TrackRow<A>>,
}

impl<A: PreviewAudio> TrackBoard<A> {
    /// Builds the board. `make_audio` is asked for a resource for every track
    /// that has a preview URL; returning `None` leaves that row without one.
    pub fn new(playlist: Playlist, mut make_audio: impl FnMut(&str) -> Option<A>) -> Self {
        let rows = playlist
            .tracks
            .into_iter()
            .map(|track| {
                let audio = match track.preview_url.as_deref() {
                    Some(url) if is_preview_available(Some(url)) => make_audio(url),
                    _ => None,
                };
                TrackRow {
                    track,
                    button: PreviewButton::new(),
                    audio,
                    rendered: PreviewButton::new(),
                }
            })
            .collect();

        Self {
            title: playlist.playlist_name,
            rows,
        }
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn button(&self, button: ButtonId) -> Option<&PreviewButton> {
        self.rows.get(button.0).map(|r| &r.button)
    }

    /// The click a user makes on the row's preview button.
    pub fn request(&self, button: ButtonId) -> Option<PreviewRequest> {
        self.rows
            .get(button.0)
            .map(|r| PreviewRequest::new(button, r.track.preview_url.clone()))
    }

    pub fn playing_count(&self) -> usize {
        self.rows
            .iter()
            .filter(|r| r.button.has_class(ButtonClass::Playing))
            .count()
    }

    pub fn table(&self) -> Table {
        let rows: Vec<TrackTableRow> = self
            .rows
            .iter()
            .enumerate()
            .map(|(i, r)| TrackTableRow {
                position: i + 1,
                glyph: if is_preview_available(r.track.preview_url.as_deref()) {
                    r.button.glyph().to_string()
                } else {
                    "-".to_string()
                },
                name: r.track.name.clone(),
                artists: r.track.artists.clone(),
                album: r.track.album_name.clone(),
            })
            .collect();

        Table::new(rows)
    }

    /// Returns the buttons whose look changed since the last call.
    pub fn take_changes(&mut self) -> Vec<ButtonId> {
        self.rows
            .iter_mut()
            .enumerate()
            .filter_map(|(i, r)| {
                if r.rendered == r.button {
                    return None;
                }
                r.rendered = r.button;
                Some(ButtonId(i))
            })
            .collect()
    }

    pub fn status_line(&self, button: ButtonId) -> Option<String> {
        let row = self.rows.get(button.0)?;
        let glyph = row.button.glyph().to_string();
        let glyph = if row.button.is_playing() {
            glyph.green().bold()
        } else if row.button.is_loading() {
            glyph.yellow()
        } else {
            glyph.normal()
        };

        Some(format!(
            "{} {:>3}  {} - {}",
            glyph,
            button.0 + 1,
            row.track.name,
            row.track.artists
        ))
    }
}

impl<A: PreviewAudio> PreviewPage for TrackBoard<A> {
    type Audio = A;

    fn resolve_audio(&self, button: ButtonId) -> Option<A> {
        self.rows.get(button.0).and_then(|r| r.audio.clone())
    }

    fn button_mut(&mut self, button: ButtonId) -> Option<&mut PreviewButton> {
        self.rows.get_mut(button.0).map(|r| &mut r.button)
    }
}

//! # Preview Module
//!
//! Exclusive single-track preview playback. A page holds many preview
//! buttons, each bound to a short audio clip; the [`PreviewPlayer`] makes sure
//! at most one of them plays at a time and keeps every button's glyph and
//! classes in step with the playback lifecycle of its clip.
//!
//! ## Seams
//!
//! The player knows nothing about terminals, HTTP or audio devices. It talks
//! to two capabilities:
//!
//! - [`PreviewPage`] resolves the audio resource that belongs to a button and
//!   hands out mutable access to the button's visual state.
//! - [`PreviewAudio`] is the playable resource: pause, rewind and an
//!   asynchronous play whose progress is reported through a
//!   [`PlaybackObserver`].
//!
//! ## Event model
//!
//! All mutations happen on the task that owns the player. Clicks, page
//! visibility changes, resource callbacks and the error-glyph timer are all
//! [`PreviewEvent`]s delivered over one unbounded channel and applied with
//! [`PreviewPlayer::dispatch`]. No locks guard the session.
//!
//! ## Usage Example
//!
//! ```rust,ignore
//! let (mut player, mut events) = PreviewPlayer::new(board, Duration::from_secs(2));
//! player.dispatch(PreviewEvent::Toggle(PreviewRequest::new(ButtonId(0), Some(url))));
//! while let Some(event) = events.recv().await {
//!     player.dispatch(event);
//! }
//! ```

mod button;
mod player;
mod session;
mod state;

use tokio::sync::mpsc::UnboundedSender;

pub use button::{ButtonClass, ButtonId, Glyph, PreviewButton};
pub use player::{DEFAULT_ERROR_REVERT, PreviewPlayer};
pub use session::{ActivePreview, PlaybackTicket, Session};
pub use state::{MediaEvent, PlaybackState};

use crate::error::PreviewError;

/// Marker the backend renders for tracks that have no preview clip.
pub const UNAVAILABLE_PREVIEW: &str = "null";

/// A playable preview clip.
///
/// Handles are cheap to clone and all clones refer to the same clip.
pub trait PreviewAudio: Clone {
    /// `true` unless a play invocation is in progress or the clip is audible.
    fn is_paused(&self) -> bool;

    fn pause(&self);

    /// Moves the playback position back to the start.
    fn rewind(&self);

    /// Starts playback asynchronously. Progress and failures are reported to
    /// `observer`; an `Err` here means the invocation itself was refused.
    fn play(&self, observer: PlaybackObserver) -> Result<(), PreviewError>;
}

/// The UI structure the player operates on.
pub trait PreviewPage {
    type Audio: PreviewAudio;

    /// Returns the one audio resource in the same row as `button`.
    fn resolve_audio(&self, button: ButtonId) -> Option<Self::Audio>;

    fn button_mut(&mut self, button: ButtonId) -> Option<&mut PreviewButton>;
}

/// One click on a preview button.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewRequest {
    pub button: ButtonId,
    pub preview_url: Option<String>,
}

impl PreviewRequest {
    pub fn new(button: ButtonId, preview_url: Option<impl Into<String>>) -> Self {
        Self {
            button,
            preview_url: preview_url.map(Into::into),
        }
    }

    /// `false` for an absent or empty URL and for the [`UNAVAILABLE_PREVIEW`]
    /// marker.
    pub fn has_preview(&self) -> bool {
        is_preview_available(self.preview_url.as_deref())
    }
}

pub fn is_preview_available(url: Option<&str>) -> bool {
    match url.map(str::trim) {
        Some(u) => !u.is_empty() && u != UNAVAILABLE_PREVIEW,
        None => false,
    }
}

/// Everything that can change the player's state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PreviewEvent {
    Toggle(PreviewRequest),
    PageHidden,
    Media {
        ticket: PlaybackTicket,
        event: MediaEvent,
    },
    RevertGlyph(ButtonId),
}

/// Registered on a resource for the duration of one play invocation.
#[derive(Debug, Clone)]
pub struct PlaybackObserver {
    ticket: PlaybackTicket,
    events: UnboundedSender<PreviewEvent>,
}

impl PlaybackObserver {
    pub fn new(ticket: PlaybackTicket, events: UnboundedSender<PreviewEvent>) -> Self {
        Self { ticket, events }
    }

    /// Delivers `event` to the owning player. Returns `false` once the player
    /// is gone.
    pub fn emit(&self, event: MediaEvent) -> bool {
        self.events
            .send(PreviewEvent::Media {
                ticket: self.ticket,
                event,
            })
            .is_ok()
    }
}

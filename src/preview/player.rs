use std::time::Duration;

use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

use super::{
    ButtonClass, ButtonId, Glyph, MediaEvent, PlaybackObserver, PlaybackState, PlaybackTicket,
    PreviewAudio, PreviewButton, PreviewEvent, PreviewPage, PreviewRequest, Session,
};
use crate::{debug, error::PreviewError, warning};

/// How long the error glyph stays on a button before it reverts to play.
pub const DEFAULT_ERROR_REVERT: Duration = Duration::from_millis(2000);

/// Owns the session and the page, and applies every [`PreviewEvent`].
///
/// The player must be driven from within a tokio runtime: the error-glyph
/// revert is a spawned timer task.
pub struct PreviewPlayer<P: PreviewPage> {
    page: P,
    session: Session<P::Audio>,
    events: UnboundedSender<PreviewEvent>,
    revert_delay: Duration,
    next_ticket: u64,
}

impl<P: PreviewPage> PreviewPlayer<P> {
    /// Creates a player over `page` together with the receiving end of its
    /// event channel. The caller drives the player by feeding every received
    /// event back into [`PreviewPlayer::dispatch`].
    pub fn new(page: P, revert_delay: Duration) -> (Self, UnboundedReceiver<PreviewEvent>) {
        let (events, rx) = mpsc::unbounded_channel();
        let player = Self {
            page,
            session: Session::new(),
            events,
            revert_delay,
            next_ticket: 0,
        };
        (player, rx)
    }

    pub fn page(&self) -> &P {
        &self.page
    }

    pub fn page_mut(&mut self) -> &mut P {
        &mut self.page
    }

    pub fn session(&self) -> &Session<P::Audio> {
        &self.session
    }

    pub fn dispatch(&mut self, event: PreviewEvent) {
        match event {
            PreviewEvent::Toggle(request) => {
                // failures are already reported by toggle
                let _ = self.toggle(request);
            }
            PreviewEvent::PageHidden => self.on_page_hidden(),
            PreviewEvent::Media { ticket, event } => self.on_media_event(ticket, event),
            PreviewEvent::RevertGlyph(button) => self.revert_glyph(button),
        }
    }

    /// Handles a click on a preview button.
    ///
    /// A playing preview is always stopped first. A click on the button that
    /// owns the session only stops; any other button starts its own clip.
    ///
    /// Errors are logged before they are returned. A missing resource leaves
    /// the session as it was; a refused play has already shown the error
    /// glyph and scheduled its revert.
    pub fn toggle(&mut self, request: PreviewRequest) -> Result<(), PreviewError> {
        if !request.has_preview() {
            debug!("{} has no preview, ignoring click", request.button);
            return Ok(());
        }

        self.stop_current();

        if self.session.active_button() == Some(request.button) {
            self.session.clear();
            return Ok(());
        }

        self.start(request.button).inspect_err(|e| match e {
            PreviewError::ResourceMissing(button) => {
                warning!("No audio element found for track {}", button)
            }
            e => warning!("Error playing preview {}: {}", request.button, e),
        })
    }

    /// Pauses the active preview when the page stops being visible.
    ///
    /// The session keeps its resource and button, so the next click on the
    /// same button stops instead of restarting.
    pub fn on_page_hidden(&mut self) {
        let Some(active) = self.session.active() else {
            return;
        };
        if active.audio.is_paused() {
            return;
        }

        active.audio.pause();
        let button = active.button;
        debug!("page hidden, paused {}", button);
        self.with_button(button, PreviewButton::show_stopped);
    }

    /// Applies a resource callback to the active preview.
    pub fn on_media_event(&mut self, ticket: PlaybackTicket, event: MediaEvent) {
        let (button, next, paused) = {
            let Some(active) = self.session.active_mut() else {
                debug!("dropping {:?}, no active preview", event);
                return;
            };
            if active.ticket != ticket {
                debug!("dropping {:?} from replaced playback {:?}", event, ticket);
                return;
            }
            let Some(next) = active.state.next(&event) else {
                debug!("no transition from {:?} on {:?}", active.state, event);
                return;
            };
            active.state = next;
            (active.button, next, active.audio.is_paused())
        };

        match next {
            PlaybackState::Idle => {}
            PlaybackState::Loading => self.with_button(button, PreviewButton::show_loading),
            PlaybackState::Playing if paused => self.with_button(button, |b| {
                b.remove_class(ButtonClass::Loading);
                b.show_stopped();
            }),
            PlaybackState::Playing => self.with_button(button, PreviewButton::show_playing),
            PlaybackState::Ended => {
                self.with_button(button, PreviewButton::show_stopped);
                self.session.clear();
            }
            PlaybackState::Error => {
                if let MediaEvent::LoadFailed(reason) | MediaEvent::PlayRejected(reason) = &event {
                    warning!("Error playing preview {}: {}", button, reason);
                }
                self.fail(button);
            }
        }
    }

    /// Timer callback of the error path. Only the glyph is reset; the classes
    /// belong to whatever playback owns the button by now.
    pub fn revert_glyph(&mut self, button: ButtonId) {
        self.with_button(button, |b| b.set_glyph(Glyph::Play));
    }

    fn stop_current(&mut self) {
        let Some(active) = self.session.active() else {
            return;
        };
        if active.audio.is_paused() {
            return;
        }

        active.audio.pause();
        active.audio.rewind();
        let button = active.button;
        self.with_button(button, |b| {
            b.remove_class(ButtonClass::Loading);
            b.show_stopped();
        });
    }

    fn start(&mut self, button: ButtonId) -> Result<(), PreviewError> {
        let audio = self
            .page
            .resolve_audio(button)
            .ok_or(PreviewError::ResourceMissing(button))?;

        self.with_button(button, PreviewButton::show_loading);

        let ticket = self.issue_ticket();
        let observer = PlaybackObserver::new(ticket, self.events.clone());
        if let Err(e) = audio.play(observer) {
            self.session.clear();
            self.fail(button);
            return Err(e);
        }

        debug!("started {} with {:?}", button, ticket);
        self.session.activate(audio, button, ticket);
        Ok(())
    }

    fn fail(&mut self, button: ButtonId) {
        self.with_button(button, PreviewButton::show_error);
        self.schedule_revert(button);
    }

    fn schedule_revert(&self, button: ButtonId) {
        let events = self.events.clone();
        let delay = self.revert_delay;

        tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            let _ = events.send(PreviewEvent::RevertGlyph(button));
        });
    }

    fn issue_ticket(&mut self) -> PlaybackTicket {
        self.next_ticket += 1;
        PlaybackTicket(self.next_ticket)
    }

    fn with_button(&mut self, button: ButtonId, update: impl FnOnce(&mut PreviewButton)) {
        match self.page.button_mut(button) {
            Some(b) => update(b),
            None => debug!("button {} is not on the page", button),
        }
    }
}

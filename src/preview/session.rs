use super::{ButtonId, PlaybackState};

/// Issued once per play invocation. The observer registered on a resource
/// carries it, so callbacks from a playback that has since been replaced can
/// be told apart from the live one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PlaybackTicket(pub u64);

/// The resource and button of the preview currently owning the session.
#[derive(Debug, Clone)]
pub struct ActivePreview<A> {
    pub audio: A,
    pub button: ButtonId,
    pub ticket: PlaybackTicket,
    pub state: PlaybackState,
}

/// Page-lifetime record of which preview, if any, is active.
///
/// Track and button are stored as one pair, so one can never be present
/// without the other.
#[derive(Debug)]
pub struct Session<A> {
    active: Option<ActivePreview<A>>,
}

impl<A> Default for Session<A> {
    fn default() -> Self {
        Self { active: None }
    }
}

impl<A> Session<A> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.active.is_none()
    }

    pub fn active(&self) -> Option<&ActivePreview<A>> {
        self.active.as_ref()
    }

    pub(crate) fn active_mut(&mut self) -> Option<&mut ActivePreview<A>> {
        self.active.as_mut()
    }

    pub fn active_button(&self) -> Option<ButtonId> {
        self.active.as_ref().map(|a| a.button)
    }

    pub fn active_ticket(&self) -> Option<PlaybackTicket> {
        self.active.as_ref().map(|a| a.ticket)
    }

    pub(crate) fn activate(&mut self, audio: A, button: ButtonId, ticket: PlaybackTicket) {
        self.active = Some(ActivePreview {
            audio,
            button,
            ticket,
            state: PlaybackState::Idle,
        });
    }

    pub(crate) fn clear(&mut self) {
        self.active = None;
    }
}

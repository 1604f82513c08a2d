/// Lifecycle of one preview resource between a play invocation and its end.
///
/// ```text
/// Idle --load-start--> Loading --can-play--> Playing --ended--> Ended
///   \___________________\______________________\____ failure --> Error
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlaybackState {
    #[default]
    Idle,
    Loading,
    Playing,
    Ended,
    Error,
}

/// Lifecycle notification sent by a preview resource to its observer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MediaEvent {
    LoadStart,
    CanPlay,
    Ended,
    /// The clip could not be fetched or decoded.
    LoadFailed(String),
    /// The clip loaded but the output refused to start it.
    PlayRejected(String),
}

impl MediaEvent {
    pub fn is_failure(&self) -> bool {
        matches!(self, MediaEvent::LoadFailed(_) | MediaEvent::PlayRejected(_))
    }
}

impl PlaybackState {
    /// Returns the state reached by applying `event`, or `None` when the event
    /// has no transition from the current state.
    pub fn next(self, event: &MediaEvent) -> Option<PlaybackState> {
        use PlaybackState::*;

        match (self, event) {
            (_, e) if e.is_failure() => Some(Error),
            (Idle, MediaEvent::LoadStart) => Some(Loading),
            (Loading, MediaEvent::CanPlay) => Some(Playing),
            (Playing, MediaEvent::Ended) => Some(Ended),
            _ => None,
        }
    }
}

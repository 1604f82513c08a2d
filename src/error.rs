use thiserror::Error;

use crate::preview::ButtonId;

#[derive(Debug, Error)]
pub enum PreviewError {
    #[error("no audio resource found for preview button {0}")]
    ResourceMissing(ButtonId),

    #[error("preview playback failed: {0}")]
    Playback(String),

    #[error("network request failed: {0}")]
    Network(String),
}

impl From<reqwest::Error> for PreviewError {
    fn from(e: reqwest::Error) -> Self {
        PreviewError::Network(e.to_string())
    }
}

use reqwest::StatusCode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("reservation endpoint answered with status {0}")]
    Rejected(StatusCode),

    #[error("failed to reach the reservation endpoint: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("failed to decode reservations: {0}")]
    Decode(#[from] serde_json::Error),
}

impl FetchError {
    /// Non-OK status from the server, as opposed to a transport or decode failure.
    pub fn is_rejection(&self) -> bool {
        matches!(self, FetchError::Rejected(_))
    }
}

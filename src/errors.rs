use reqwest::Error as ReqwestError;
use thiserror::Error;

/// Everything that can go wrong between clicking Search and getting a page.
#[derive(Error, Debug)]
pub enum SearchError {
    #[error("network error: {0}")]
    Transport(#[from] ReqwestError),

    /// Non-2xx status; `message` is the `message` field of the error body.
    #[error("{message}")]
    Api { status: u16, message: String },

    #[error("invalid response body: {0}")]
    Decode(#[from] serde_json::Error),
}

impl SearchError {
    /// Text shown in the notification banner.
    pub fn notification_message(&self) -> String {
        match self {
            SearchError::Api { message, .. } => message.clone(),
            other => other.to_string(),
        }
    }
}

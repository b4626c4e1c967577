use reqwest::StatusCode;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScrapeError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Scraper responded with {status}: {message}")]
    Remote { status: StatusCode, message: String },

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}

impl ScrapeError {
    /// Text shown to the user in the error alert.
    pub fn user_message(&self) -> String {
        match self {
            ScrapeError::Validation(message) => message.clone(),
            ScrapeError::Remote { message, .. } => message.clone(),
            ScrapeError::Network(e) => e.to_string(),
        }
    }
}

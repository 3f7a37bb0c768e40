use thiserror::Error;

pub const INPUT_MISSING_MESSAGE: &str = "Please enter a city name.";
pub const LOOKUP_FAILED_MESSAGE: &str = "City not found or API not active yet.";

#[derive(Error, Debug)]
pub enum ClientError {
    #[error("City name is empty")]
    InputMissing,

    #[error("Proxy error: {status} - {message}")]
    Service { status: u16, message: String },

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("JSON parse error: {0}")]
    Decode(#[from] serde_json::Error),
}

impl ClientError {
    /// What the user is shown. Every proxy failure reads the same.
    pub fn user_message(&self) -> &'static str {
        match self {
            ClientError::InputMissing => INPUT_MISSING_MESSAGE,
            _ => LOOKUP_FAILED_MESSAGE,
        }
    }
}

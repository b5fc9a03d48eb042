use thiserror::Error;

#[derive(Error, Debug)]
pub enum NetworkError {
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    #[error("Invalid server response: {0}")]
    InvalidResponse(String),

    #[error("Server error (code: {0})")]
    ServerError(u16),

    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Decoding error: {0}")]
    Decode(#[from] serde_json::Error),
}

impl NetworkError {
    /// Any status other than 200 is a server error, carrying the code as-is.
    pub fn from_status(status: u16) -> Self {
        NetworkError::ServerError(status)
    }

    pub fn status_code(&self) -> Option<u16> {
        match self {
            NetworkError::ServerError(code) => Some(*code),
            NetworkError::Transport(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}

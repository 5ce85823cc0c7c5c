use thiserror::Error;

#[derive(Error, Debug)]
pub enum StudyScopeError {
    #[error("I/O error: {0}")]
    Io(Box<std::io::Error>),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Request error: {0}")]
    Reqwest(Box<reqwest::Error>),

    #[error("Portal response missing expected data: {0}")]
    BadResponse(String),

    #[error("Invalid page link: {0}")]
    InvalidDeepLink(String),

    #[error("StudyScopeError: {0}")]
    Custom(String),
}

impl From<std::io::Error> for StudyScopeError {
    fn from(error: std::io::Error) -> Self {
        StudyScopeError::Io(Box::new(error))
    }
}

impl From<reqwest::Error> for StudyScopeError {
    fn from(error: reqwest::Error) -> Self {
        StudyScopeError::Reqwest(Box::new(error))
    }
}

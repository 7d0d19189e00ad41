use thiserror::Error;

#[derive(Error, Debug)]
pub enum LexError {
    #[error("I/O error: {0}")]
    Io(Box<std::io::Error>),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(Box<csv::Error>),

    #[error("Regex error: {0}")]
    Regex(#[from] regex::Error),

    #[error("Reqwest error: {0}")]
    Reqwest(Box<reqwest::Error>),

    #[error("Flashcard provider unavailable: {0}")]
    ProviderUnavailable(String),

    #[error("Classification failed: {0}")]
    Classification(String),

    #[error("Unrecognized category: {0}")]
    InvalidCategory(String),

    #[error("LexError: {0}")]
    Custom(String),
}

impl From<std::io::Error> for LexError {
    fn from(error: std::io::Error) -> Self {
        LexError::Io(Box::new(error))
    }
}

impl From<csv::Error> for LexError {
    fn from(error: csv::Error) -> Self {
        LexError::Csv(Box::new(error))
    }
}

impl From<reqwest::Error> for LexError {
    fn from(error: reqwest::Error) -> Self {
        LexError::Reqwest(Box::new(error))
    }
}

use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    /// Invalid user input (pin code, date, concurrency)
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    /// The API answered with a non-success HTTP status
    #[error("Request failed with HTTP status {status}")]
    RequestFailed { status: u16 },
    /// Transport-level failure before any status was received
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
    /// Response body did not match the expected centers/sessions shape
    #[error("Malformed response: {0}")]
    MalformedResponse(String),
    /// Invalid URL format
    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),
    /// Runtime or task plumbing failed
    #[error("Runtime error: {0}")]
    Runtime(String),
}

// Custom type alias for Results in this application
pub type AppResult<T> = Result<T, AppError>;

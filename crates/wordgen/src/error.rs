use http::StatusCode;
use thiserror::Error;

/// Errors generated when regenerating a word pool.
#[derive(Debug, Error)]
pub enum Error {
    /// Error generated when the theme is blank.
    #[error("please enter a theme")]
    EmptyTheme,

    /// Error generated when a regeneration is already running.
    #[error("word generation is already in progress")]
    InProgress,

    /// Error generated by the text generation service.
    #[error(transparent)]
    Generation(#[from] GenerationError),
}

impl Error {
    /// Determine if this error was caused by the input
    /// rather than the text generation service.
    pub fn is_input_error(&self) -> bool {
        matches!(self, Self::EmptyTheme)
    }
}

/// Failure to obtain words from the text generation service.
#[derive(Debug, Error)]
pub enum GenerationError {
    /// Error generated when the service does not respond
    /// with a success status code.
    #[error("text generation failed, got status code {0}")]
    ResponseCode(StatusCode),

    /// Error generated when the response does not contain
    /// any candidate text.
    #[error("text generation response did not contain any text")]
    MissingText,

    /// Error generated when the response text does not
    /// contain any words.
    #[error("text generation response did not contain any words")]
    NoWords,

    /// Error generated by the HTTP client.
    #[error(transparent)]
    Http(#[from] reqwest::Error),
}


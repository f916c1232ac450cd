use thiserror::Error;

/// Errors generated by the password library.
#[derive(Debug, Error)]
pub enum Error {
    /// Error generated when a maximum length is outside
    /// of the accepted range.
    #[error("maximum length {length} is out of range, must be between {min} and {max}")]
    MaxLengthRange {
        /// Requested maximum length.
        length: usize,
        /// Smallest accepted maximum length.
        min: usize,
        /// Largest accepted maximum length.
        max: usize,
    },

    /// Error generated when a separator name is not recognized.
    #[error(r#"unknown separator "{0}", expected one of hyphen, underscore, period, space or none"#)]
    UnknownSeparator(String),
}

//! Memorable passphrases assembled from themed word lists.

/// Target for tracing macros.
///
/// Used so that error messages are succinct rather than
/// including the full module path.
pub const TARGET: &str = "themepass";

pub mod app;
pub mod cli;
pub mod commands;
pub mod config;
mod error;
pub(crate) mod helpers;
pub mod notice;

pub use error::Error;

/// Result type for the executable.
pub type Result<T> = std::result::Result<T, error::Error>;

#![deny(missing_docs)]
#![forbid(unsafe_code)]
#![cfg_attr(all(doc, CHANNEL_NIGHTLY), feature(doc_auto_cfg))]
//! Replace a word pool with words generated from a theme.
//!
//! The text generation service is reached through the
//! [WordSource] trait; [GenerativeClient] implements it for
//! services speaking the `generateContent` JSON protocol.

mod client;
mod error;
mod provider;
mod source;

pub use client::{GenerativeClient, ProviderConfig};
pub use error::{Error, GenerationError};
pub use provider::WordPoolProvider;
pub use source::{regenerate, theme_prompt, WordSource};

pub use themepass_password::WordPool;

/// Result type for the library.
pub type Result<T> = std::result::Result<T, Error>;

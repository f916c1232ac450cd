#![deny(missing_docs)]
#![forbid(unsafe_code)]
#![cfg_attr(all(doc, CHANNEL_NIGHTLY), feature(doc_auto_cfg))]
//! Native system clipboard that can clear copied
//! text after a timeout.

mod error;
mod native;

pub use error::Error;
pub use native::Clipboard;

/// Result type for the clipboard library.
pub type Result<T> = std::result::Result<T, Error>;

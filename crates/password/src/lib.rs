#![deny(missing_docs)]
#![forbid(unsafe_code)]
#![cfg_attr(all(doc, CHANNEL_NIGHTLY), feature(doc_auto_cfg))]
//! Passphrase assembly from a pool of memorable words.
//!
//! Words are drawn from a [WordPool] in a uniformly shuffled order
//! and packed greedily until the length budget of the
//! [GenerationConfig] is exhausted; the result is then decorated
//! with optional random casing, a number and a symbol.

mod assemble;
mod config;
mod error;
pub mod generator;
mod pool;

pub use assemble::assemble;
pub use config::{GenerationConfig, Separator};
pub use error::Error;
pub use pool::WordPool;

pub use zxcvbn;

/// Default cryptographically secure RNG.
pub(crate) fn csprng() -> impl rand::CryptoRng + rand::Rng {
    rand::rngs::OsRng
}

/// Result type for the library.
pub type Result<T> = std::result::Result<T, Error>;

/// Punctuation characters available for the trailing symbol.
pub const SYMBOLS: &str = "!@#$%^&*()_+~`|}{[]:;?><,./-=";

/// Exclusive upper bound for the trailing number.
pub const NUMBER_BOUND: u32 = 99;

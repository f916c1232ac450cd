use clap::Args;
use themepass_password::{GenerationConfig, Separator};

use crate::Result;

pub mod config;
pub mod generate;
pub mod shell;
pub mod words;

pub use config::Command as ConfigCommand;

/// Options that override the configured generator settings.
#[derive(Args, Debug, Default, Clone)]
pub struct GeneratorOptions {
    /// Maximum password length.
    #[clap(short, long)]
    pub length: Option<usize>,

    /// Separator between words (hyphen, underscore, period, space or none).
    #[clap(short, long)]
    pub separator: Option<Separator>,

    /// Append a random number.
    #[clap(long, overrides_with = "no_numbers")]
    pub numbers: bool,

    /// Do not append a number.
    #[clap(long)]
    pub no_numbers: bool,

    /// Append a random symbol.
    #[clap(long, overrides_with = "no_symbols")]
    pub symbols: bool,

    /// Do not append a symbol.
    #[clap(long)]
    pub no_symbols: bool,

    /// Randomize the case of every letter.
    #[clap(long, overrides_with = "no_random_case")]
    pub random_case: bool,

    /// Keep the case of every letter.
    #[clap(long)]
    pub no_random_case: bool,
}

impl GeneratorOptions {
    /// Apply the options to a config.
    pub fn apply(&self, mut config: GenerationConfig) -> Result<GenerationConfig> {
        if let Some(length) = self.length {
            config.max_length = length;
        }
        if let Some(separator) = self.separator {
            config.separator = separator;
        }
        if let Some(value) = flag(self.numbers, self.no_numbers) {
            config.include_numbers = value;
        }
        if let Some(value) = flag(self.symbols, self.no_symbols) {
            config.include_symbols = value;
        }
        if let Some(value) = flag(self.random_case, self.no_random_case) {
            config.randomize_case = value;
        }
        config.validate()?;
        Ok(config)
    }
}

fn flag(on: bool, off: bool) -> Option<bool> {
    match (on, off) {
        (true, _) => Some(true),
        (false, true) => Some(false),
        _ => None,
    }
}

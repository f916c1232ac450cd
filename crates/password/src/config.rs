//! Options for password assembly.
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::{fmt, ops::RangeInclusive, str::FromStr};

/// Separator inserted between consecutive words.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Separator {
    /// Hyphen `-`.
    #[default]
    Hyphen,
    /// Underscore `_`.
    Underscore,
    /// Period `.`.
    Period,
    /// Single space.
    Space,
    /// Words are concatenated directly.
    None,
}

impl Separator {
    /// All the separator choices.
    pub const ALL: [Separator; 5] = [
        Separator::Hyphen,
        Separator::Underscore,
        Separator::Period,
        Separator::Space,
        Separator::None,
    ];

    /// Text inserted between words.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Hyphen => "-",
            Self::Underscore => "_",
            Self::Period => ".",
            Self::Space => " ",
            Self::None => "",
        }
    }

    /// Name of the separator.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Hyphen => "hyphen",
            Self::Underscore => "underscore",
            Self::Period => "period",
            Self::Space => "space",
            Self::None => "none",
        }
    }
}

impl fmt::Display for Separator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Separator {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        // Accept the literal separator as well as the name
        match s {
            "hyphen" | "-" => Ok(Self::Hyphen),
            "underscore" | "_" => Ok(Self::Underscore),
            "period" | "." => Ok(Self::Period),
            "space" | " " => Ok(Self::Space),
            "none" | "" => Ok(Self::None),
            _ => Err(Error::UnknownSeparator(s.to_owned())),
        }
    }
}

/// Configuration for password assembly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerationConfig {
    /// Ceiling on the length of generated passwords.
    pub max_length: usize,
    /// Separator between words.
    pub separator: Separator,
    /// Append a random number.
    pub include_numbers: bool,
    /// Append a random symbol.
    pub include_symbols: bool,
    /// Randomize the case of every letter.
    pub randomize_case: bool,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            max_length: Self::DEFAULT_MAX_LENGTH,
            separator: Default::default(),
            include_numbers: true,
            include_symbols: true,
            randomize_case: false,
        }
    }
}

impl GenerationConfig {
    /// Range accepted for the maximum length.
    pub const MAX_LENGTH_RANGE: RangeInclusive<usize> = 4..=64;

    /// Default maximum length.
    pub const DEFAULT_MAX_LENGTH: usize = 20;

    /// Create a config with the given maximum length and
    /// no decoration.
    pub fn new(max_length: usize) -> Self {
        Self {
            max_length,
            separator: Default::default(),
            include_numbers: false,
            include_symbols: false,
            randomize_case: false,
        }
    }

    /// Use a separator between words.
    pub fn with_separator(mut self, separator: Separator) -> Self {
        self.separator = separator;
        self
    }

    /// Append a random number.
    pub fn numbers(mut self) -> Self {
        self.include_numbers = true;
        self
    }

    /// Append a random symbol.
    pub fn symbols(mut self) -> Self {
        self.include_symbols = true;
        self
    }

    /// Randomize letter casing.
    pub fn random_case(mut self) -> Self {
        self.randomize_case = true;
        self
    }

    /// Ensure the maximum length is within the accepted range.
    ///
    /// Assembly itself accepts any length, this check is for
    /// values coming from user input.
    pub fn validate(&self) -> Result<()> {
        if !Self::MAX_LENGTH_RANGE.contains(&self.max_length) {
            return Err(Error::MaxLengthRange {
                length: self.max_length,
                min: *Self::MAX_LENGTH_RANGE.start(),
                max: *Self::MAX_LENGTH_RANGE.end(),
            });
        }
        Ok(())
    }
}

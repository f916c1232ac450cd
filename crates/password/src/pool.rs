//! Candidate words for password assembly.
use std::slice::Iter;

/// Words used until a pool is generated from a theme.
const DEFAULT_WORDS: &[&str] = &[
    "apple", "banana", "galaxy", "ocean", "river", "mountain", "forest",
    "firefly", "dragon", "penguin", "keyboard", "guitar", "sunshine",
    "blossom", "waterfall", "breeze", "whisper", "shadow", "journey",
    "adventure", "wonder", "unicorn", "wizard", "castle", "treasure",
    "diamond", "emerald", "sapphire", "robot", "spaceship", "planet",
    "comet", "meteor", "nebula", "constellation", "sunrise", "sunset",
    "meadow", "crystal", "volcano", "tsunami", "hurricane", "tornado",
    "earthquake", "lightning", "thunder", "snowflake", "icicle", "avalanche",
    "tornado", "canyon", "desert", "jungle", "swamp", "glacier", "island",
];

/// Ordered sequence of candidate words.
///
/// Duplicates are allowed; a duplicated word is simply
/// more likely to be drawn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordPool {
    words: Vec<String>,
}

impl Default for WordPool {
    fn default() -> Self {
        Self::new(DEFAULT_WORDS.iter().map(|w| w.to_string()).collect())
    }
}

impl WordPool {
    /// Create a pool from a list of words.
    pub fn new(words: Vec<String>) -> Self {
        Self { words }
    }

    /// Parse a comma-separated list of words.
    ///
    /// Each segment is trimmed and empty segments are
    /// discarded. Segments are also lowercased so a pool
    /// parsed from generated text holds only lowercase
    /// words, like the default list.
    pub fn parse(text: &str) -> Self {
        text.split(',')
            .map(|word| word.trim())
            .filter(|word| !word.is_empty())
            .map(|word| word.to_lowercase())
            .collect()
    }

    /// Words in the pool.
    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// Iterate the words in the pool.
    pub fn iter(&self) -> Iter<'_, String> {
        self.words.iter()
    }

    /// Number of words in the pool.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Determine if the pool is empty.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl From<Vec<String>> for WordPool {
    fn from(value: Vec<String>) -> Self {
        Self::new(value)
    }
}

impl FromIterator<String> for WordPool {
    fn from_iter<T: IntoIterator<Item = String>>(iter: T) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a WordPool {
    type Item = &'a String;
    type IntoIter = Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

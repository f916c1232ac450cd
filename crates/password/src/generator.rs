//! Utility for generating passwords with a strength estimate.
use secrecy::{ExposeSecret, SecretString};
use zxcvbn::{zxcvbn, Entropy};

use crate::{assemble, csprng, GenerationConfig, WordPool};

/// Measure the entropy in a password.
pub fn measure_entropy(password: &str, user_inputs: &[&str]) -> Entropy {
    zxcvbn(password, user_inputs)
}

/// Generated password result.
#[derive(Debug, Clone)]
pub struct PasswordResult {
    /// The generated password.
    pub password: SecretString,
    /// The computed entropy for the password.
    ///
    /// Not available when the password is empty.
    pub entropy: Option<Entropy>,
}

impl PasswordResult {
    /// Strength score between zero and four.
    pub fn score(&self) -> u8 {
        self.entropy
            .as_ref()
            .map(|entropy| u8::from(entropy.score()))
            .unwrap_or_default()
    }

    /// Determine if the generated password is empty.
    pub fn is_empty(&self) -> bool {
        self.password.expose_secret().is_empty()
    }
}

/// Password generator using the operating system RNG.
#[derive(Debug, Clone, Default)]
pub struct PasswordGen {
    config: GenerationConfig,
}

impl PasswordGen {
    /// Create a new password generator.
    pub fn new(config: GenerationConfig) -> Self {
        Self { config }
    }

    /// Configuration for the generator.
    pub fn config(&self) -> &GenerationConfig {
        &self.config
    }

    /// Maximum length of generated passwords.
    pub fn len(&self) -> usize {
        self.config.max_length
    }

    /// Determine if this generator is zero length.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Generate a password from words in the pool.
    pub fn one(&self, pool: &WordPool) -> PasswordResult {
        let rng = &mut csprng();
        let password = assemble(pool, &self.config, rng);
        // Pool words are known to the generator so they are
        // hints for the strength estimate
        let entropy = if password.is_empty() {
            None
        } else {
            let inputs: Vec<&str> = pool.iter().map(|w| w.as_str()).collect();
            Some(measure_entropy(&password, &inputs))
        };
        PasswordResult {
            password: SecretString::new(password.into()),
            entropy,
        }
    }

    /// Generate multiple passwords.
    pub fn many(&self, pool: &WordPool, count: usize) -> Vec<PasswordResult> {
        let mut results = Vec::with_capacity(count);
        for _ in 0..count {
            results.push(self.one(pool));
        }
        results
    }
}

use crate::{GenerationConfig, WordPool, NUMBER_BOUND, SYMBOLS};
use rand::{seq::SliceRandom, Rng};

/// Assemble a password from words in the pool.
///
/// Words are taken from a uniformly shuffled copy of the pool
/// until the next word would exceed the maximum length; space
/// for the optional number and symbol is reserved while packing
/// so that the decoration usually fits.
///
/// The maximum length is a ceiling, not a target; when the
/// pool is empty or the first word does not fit the words
/// part is empty and only the decoration may be returned.
pub fn assemble<R: Rng + ?Sized>(
    pool: &WordPool,
    config: &GenerationConfig,
    rng: &mut R,
) -> String {
    let separator = config.separator.as_str();
    let separator_len = separator.chars().count();

    let mut shuffled: Vec<&str> = pool.iter().map(|w| w.as_str()).collect();
    shuffled.shuffle(rng);

    let mut accepted: Vec<&str> = Vec::new();
    let mut length = 0;
    for word in shuffled {
        let word_len = word.chars().count();
        let joined = if accepted.is_empty() {
            word_len
        } else {
            length + separator_len + word_len
        };

        let mut projected = joined;
        if config.include_numbers {
            projected += rng.gen_range(1..=2);
        }
        if config.include_symbols {
            projected += 1;
        }

        if projected > config.max_length {
            break;
        }

        accepted.push(word);
        length = joined;
    }

    tracing::debug!(
        pool = pool.len(),
        words = accepted.len(),
        "assemble::words"
    );

    let mut words = Vec::with_capacity(accepted.len());
    for word in accepted {
        if config.randomize_case {
            words.push(random_case(word, rng));
        } else {
            words.push(word.to_owned());
        }
    }
    let mut password = words.join(separator);

    if config.include_numbers {
        let number = rng.gen_range(0..NUMBER_BOUND).to_string();
        if length + number.len() <= config.max_length {
            password.push_str(&number);
            length += number.len();
        }
    }

    if config.include_symbols && length < config.max_length {
        let symbols = SYMBOLS.as_bytes();
        password.push(symbols[rng.gen_range(0..symbols.len())] as char);
    }

    password
}

/// Flip a coin for the case of every character.
///
/// Characters whose case mapping expands to several
/// characters (`ß` to `SS`) are kept as is so the
/// character count is preserved.
fn random_case<R: Rng + ?Sized>(word: &str, rng: &mut R) -> String {
    word.chars()
        .map(|c| {
            let mapped = if rng.gen_bool(0.5) {
                single_char(c.to_lowercase())
            } else {
                single_char(c.to_uppercase())
            };
            mapped.unwrap_or(c)
        })
        .collect()
}

fn single_char(mut chars: impl Iterator<Item = char>) -> Option<char> {
    let c = chars.next()?;
    chars.next().is_none().then_some(c)
}

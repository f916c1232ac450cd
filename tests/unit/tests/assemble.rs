use anyhow::Result;
use rand::{rngs::StdRng, SeedableRng};
use themepass_password::{
    assemble, GenerationConfig, Separator, WordPool, SYMBOLS,
};
use themepass_unit_tests::well_separated;

fn configs() -> Vec<GenerationConfig> {
    let mut configs = Vec::new();
    for max_length in [4, 7, 12, 20, 33, 64] {
        for separator in Separator::ALL {
            for (numbers, symbols, case) in [
                (false, false, false),
                (true, false, false),
                (false, true, true),
                (true, true, true),
            ] {
                configs.push(GenerationConfig {
                    max_length,
                    separator,
                    include_numbers: numbers,
                    include_symbols: symbols,
                    randomize_case: case,
                });
            }
        }
    }
    configs
}

#[test]
fn assemble_never_exceeds_max_length() {
    let pool = WordPool::default();
    let mut rng = StdRng::seed_from_u64(7);
    for config in configs() {
        for _ in 0..25 {
            let password = assemble(&pool, &config, &mut rng);
            assert!(
                password.chars().count() <= config.max_length,
                "{password} exceeds {}",
                config.max_length
            );
        }
    }
}

#[test]
fn assemble_separators_between_words() {
    let pool = WordPool::default();
    let mut rng = StdRng::seed_from_u64(11);
    for config in configs() {
        // A trailing symbol may equal the separator
        let config = GenerationConfig {
            include_symbols: false,
            ..config
        };
        for _ in 0..25 {
            let password = assemble(&pool, &config, &mut rng);
            assert!(well_separated(&password, config.separator.as_str()));
        }
    }
}

#[test]
fn assemble_preserves_case() {
    let pool = WordPool::new(vec![
        "Alpha".to_owned(),
        "BETA".to_owned(),
        "gamma".to_owned(),
    ]);
    let config = GenerationConfig::new(64);
    let mut rng = StdRng::seed_from_u64(3);
    for _ in 0..25 {
        let password = assemble(&pool, &config, &mut rng);
        for word in password.split('-') {
            assert!(pool.iter().any(|w| w == word), "{word} was altered");
        }
    }
}

#[test]
fn assemble_single_word() {
    let pool = WordPool::new(vec!["ok".to_owned()]);
    let config = GenerationConfig::new(10).with_separator(Separator::Hyphen);
    let mut rng = StdRng::seed_from_u64(1);
    for _ in 0..10 {
        let password = assemble(&pool, &config, &mut rng);
        assert_eq!("ok", password.to_lowercase());
        assert_eq!(2, password.len());
    }
}

#[test]
fn assemble_empty_pool() -> Result<()> {
    let pool = WordPool::new(Vec::new());
    let mut rng = StdRng::seed_from_u64(5);

    let config = GenerationConfig::new(10);
    assert_eq!("", assemble(&pool, &config, &mut rng));

    let config = GenerationConfig::new(10).numbers().symbols();
    for _ in 0..25 {
        let password = assemble(&pool, &config, &mut rng);
        let (number, symbol) = password.split_at(password.len() - 1);
        assert!(!number.is_empty() && number.len() <= 2);
        assert!(number.parse::<u32>()? < 99);
        assert!(SYMBOLS.contains(symbol));
    }
    Ok(())
}

#[test]
fn assemble_max_below_shortest_word() {
    let pool = WordPool::new(vec!["mountain".to_owned(), "valley".to_owned()]);
    let mut rng = StdRng::seed_from_u64(9);

    let config = GenerationConfig::new(4);
    assert_eq!("", assemble(&pool, &config, &mut rng));

    let config = GenerationConfig::new(4).symbols();
    let password = assemble(&pool, &config, &mut rng);
    assert_eq!(1, password.len());
    assert!(SYMBOLS.contains(password.as_str()));
}

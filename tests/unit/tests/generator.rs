use anyhow::Result;
use secrecy::ExposeSecret;
use themepass_password::{generator::PasswordGen, GenerationConfig, WordPool};

#[test]
fn passgen_default_pool() -> Result<()> {
    let generator = PasswordGen::default();
    let pool = WordPool::default();
    let result = generator.one(&pool);
    assert!(!result.is_empty());
    assert!(result.password.expose_secret().len() <= generator.len());
    assert!(result.entropy.is_some());
    assert!(result.score() <= 4);
    Ok(())
}

#[test]
fn passgen_many() -> Result<()> {
    let generator = PasswordGen::new(GenerationConfig::new(30).random_case());
    let pool = WordPool::default();
    let results = generator.many(&pool, 5);
    assert_eq!(5, results.len());
    for result in results {
        assert!(result.password.expose_secret().len() <= 30);
    }
    Ok(())
}

#[test]
fn passgen_empty_result() -> Result<()> {
    let generator = PasswordGen::new(GenerationConfig::new(4));
    let pool = WordPool::new(vec!["lengthy".to_owned()]);
    let result = generator.one(&pool);
    assert!(result.is_empty());
    assert!(result.entropy.is_none());
    assert_eq!(0, result.score());
    Ok(())
}

use anyhow::Result;
use rand::{rngs::StdRng, SeedableRng};
use themepass_password::{assemble, GenerationConfig, WordPool};
use themepass_unit_tests::{generated_text, mock_client};
use themepass_wordgen::{
    regenerate, Error, GenerationError, WordPoolProvider,
};
use wiremock::{
    matchers::{body_string_contains, method},
    Mock, MockServer, ResponseTemplate,
};

#[tokio::test]
async fn regenerate_space_theme() -> Result<()> {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(body_string_contains("space"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(generated_text("star, planet, comet, nebula")),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = mock_client(&server)?;
    let pool = regenerate(&client, "space").await?;
    assert_eq!(&["star", "planet", "comet", "nebula"], pool.words());

    // Passwords are assembled from the new words
    let config = GenerationConfig::new(64);
    let mut rng = StdRng::seed_from_u64(42);
    let password = assemble(&pool, &config, &mut rng);
    assert!(!password.is_empty());
    assert!(password.split('-').all(|word| pool.iter().any(|w| w == word)));
    Ok(())
}

#[tokio::test]
async fn regenerate_blank_theme_skips_network() -> Result<()> {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(generated_text("x")),
        )
        .expect(0)
        .mount(&server)
        .await;

    let client = mock_client(&server)?;
    for theme in ["", "   ", "\t\n"] {
        let result = regenerate(&client, theme).await;
        assert!(matches!(&result, Err(Error::EmptyTheme)));
        assert!(result.is_err_and(|e| e.is_input_error()));
    }
    Ok(())
}

#[tokio::test]
async fn provider_keeps_pool_on_failure() -> Result<()> {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&server)
        .await;

    let provider = WordPoolProvider::new(mock_client(&server)?);
    let result = provider.regenerate("volcanoes").await;
    assert!(matches!(
        &result,
        Err(Error::Generation(GenerationError::ResponseCode(_)))
    ));
    assert!(!result.is_err_and(|e| e.is_input_error()));
    assert_eq!(WordPool::default(), provider.pool().await);
    assert!(!provider.is_busy());
    Ok(())
}

#[tokio::test]
async fn provider_response_without_words() -> Result<()> {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(generated_text(" , ,")),
        )
        .mount(&server)
        .await;

    let provider = WordPoolProvider::new(mock_client(&server)?);
    let result = provider.regenerate("nothing").await;
    assert!(matches!(
        result,
        Err(Error::Generation(GenerationError::NoWords))
    ));
    assert_eq!(WordPool::default(), provider.pool().await);
    Ok(())
}

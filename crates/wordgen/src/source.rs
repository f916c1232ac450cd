use async_trait::async_trait;

use crate::{Error, GenerationError, Result, WordPool};

/// Service that produces free text for a prompt.
#[async_trait]
pub trait WordSource {
    /// Send a prompt and return the generated text.
    async fn generate_text(
        &self,
        prompt: &str,
    ) -> std::result::Result<String, GenerationError>;
}

/// Prompt asking for words related to a theme.
pub fn theme_prompt(theme: &str) -> String {
    format!(
        r#"Generate a comma-separated list of 10-15 single words related to the theme: "{}". The words should be lowercase. Do not include any other text or punctuation."#,
        theme
    )
}

/// Generate a new word pool for a theme.
///
/// Blank themes are rejected without contacting the service.
pub async fn regenerate<S>(source: &S, theme: &str) -> Result<WordPool>
where
    S: WordSource + ?Sized,
{
    let theme = theme.trim();
    if theme.is_empty() {
        return Err(Error::EmptyTheme);
    }

    let text = source.generate_text(&theme_prompt(theme)).await?;
    let pool = WordPool::parse(&text);
    if pool.is_empty() {
        return Err(GenerationError::NoWords.into());
    }

    tracing::debug!(theme = %theme, words = pool.len(), "regenerate");
    Ok(pool)
}

//! Application state shared by the triggers.
use secrecy::ExposeSecret;
use themepass_clipboard::Clipboard;
use themepass_password::{
    generator::{PasswordGen, PasswordResult},
    GenerationConfig, WordPool,
};
use themepass_wordgen::{
    Error as WordGenError, GenerativeClient, WordPoolProvider, WordSource,
};
use tokio::task::JoinHandle;

use crate::{
    config::{AppConfig, ClipboardConfig},
    notice::{Notice, NoticeKind, COPIED_TTL, STATUS_TTL},
    Result,
};

/// Word pool, options and the current password.
///
/// Each trigger (generate, regenerate words, copy) is a
/// method; the caller decides how to present the outcome.
pub struct App<S = GenerativeClient> {
    provider: WordPoolProvider<S>,
    generator: PasswordGen,
    clipboard_config: ClipboardConfig,
    clipboard: Option<Clipboard>,
    pending_clear: Option<JoinHandle<()>>,
    current: Option<PasswordResult>,
    status: Notice,
    copied: Notice,
}

impl App<GenerativeClient> {
    /// Create an application using the service in the config.
    pub fn new(config: AppConfig) -> Result<Self> {
        let client = GenerativeClient::new(config.provider)?;
        Ok(Self::with_source(client, config.generator, config.clipboard))
    }
}

impl<S> App<S>
where
    S: WordSource + Send + Sync,
{
    /// Create an application with a word source.
    pub fn with_source(
        source: S,
        generator: GenerationConfig,
        clipboard_config: ClipboardConfig,
    ) -> Self {
        Self {
            provider: WordPoolProvider::new(source),
            generator: PasswordGen::new(generator),
            clipboard_config,
            clipboard: None,
            pending_clear: None,
            current: None,
            status: Notice::new(STATUS_TTL),
            copied: Notice::new(COPIED_TTL),
        }
    }

    /// Generation options.
    pub fn config(&self) -> &GenerationConfig {
        self.generator.config()
    }

    /// Replace the generation options.
    pub fn set_config(&mut self, config: GenerationConfig) -> Result<()> {
        config.validate()?;
        self.generator = PasswordGen::new(config);
        Ok(())
    }

    /// Copy of the current word pool.
    pub async fn pool(&self) -> WordPool {
        self.provider.pool().await
    }

    /// Restore the default word pool.
    pub async fn reset_pool(&self) {
        self.provider.reset().await;
    }

    /// Most recently generated password.
    pub fn current(&self) -> Option<&PasswordResult> {
        self.current.as_ref()
    }

    /// Word generation status message, if any.
    pub fn status(&self) -> Option<(NoticeKind, &str)> {
        self.status.current()
    }

    /// Determine if the copied indicator is visible.
    pub fn copied(&self) -> bool {
        self.copied.current().is_some()
    }

    /// Generate a password from the current pool.
    pub async fn generate(&mut self) -> &PasswordResult {
        let pool = self.provider.pool().await;
        self.current.insert(self.generator.one(&pool))
    }

    /// Generate passwords from the current pool, the last
    /// one becomes the current password.
    pub async fn generate_many(&mut self, count: usize) -> Vec<PasswordResult> {
        let pool = self.provider.pool().await;
        let results = self.generator.many(&pool, count);
        self.current = results.last().cloned();
        results
    }

    /// Replace the pool with words for a theme and generate
    /// a password with the new pool.
    ///
    /// The outcome is recorded as a status message on both
    /// the success and failure paths.
    pub async fn regenerate_words(
        &mut self,
        theme: &str,
    ) -> themepass_wordgen::Result<WordPool> {
        match self.provider.regenerate(theme).await {
            Ok(pool) => {
                self.status.set(
                    NoticeKind::Success,
                    format!(
                        r#"Word list updated with words from theme: "{}"!"#,
                        theme.trim()
                    ),
                );
                self.generate().await;
                Ok(pool)
            }
            Err(e) => {
                match &e {
                    WordGenError::EmptyTheme => {
                        self.status.set(NoticeKind::Info, "Please enter a theme.")
                    }
                    WordGenError::InProgress => self.status.set(
                        NoticeKind::Info,
                        "Words are already being generated.",
                    ),
                    WordGenError::Generation(_) => self.status.set(
                        NoticeKind::Failure,
                        "Failed to generate words. Please try again.",
                    ),
                }
                Err(e)
            }
        }
    }

    /// Copy the current password to the clipboard.
    ///
    /// Returns `false` without touching the clipboard when no
    /// password has been generated or the password is empty.
    pub async fn copy(&mut self) -> Result<bool> {
        let password = match &self.current {
            Some(result) if !result.is_empty() => result.password.clone(),
            _ => return Ok(false),
        };

        if self.clipboard.is_none() {
            let clipboard = match self.clipboard_config.clear_after {
                Some(seconds) => Clipboard::new_timeout(seconds)?,
                None => Clipboard::new()?,
            };
            self.clipboard = Some(clipboard);
        }

        if let Some(clipboard) = &self.clipboard {
            if self.clipboard_config.clear_after.is_some() {
                let handle = clipboard
                    .set_text_timeout(password.expose_secret())
                    .await?;
                self.pending_clear = Some(handle);
            } else {
                clipboard.set_text(password.expose_secret()).await?;
            }
        }

        self.copied.set(NoticeKind::Success, "Copied to clipboard!");
        Ok(true)
    }

    /// Seconds until a copied password is cleared, when a
    /// clear is scheduled and has not yet run.
    pub fn pending_clear(&self) -> Option<u16> {
        match &self.pending_clear {
            Some(handle) if !handle.is_finished() => {
                self.clipboard_config.clear_after
            }
            _ => None,
        }
    }

    /// Wait for a scheduled clipboard clear to run.
    ///
    /// The clear task is dropped with the runtime so this
    /// must be awaited before the process exits.
    pub async fn wait_for_clear(&mut self) {
        if let Some(handle) = self.pending_clear.take() {
            if let Err(error) = handle.await {
                tracing::warn!(error = %error, "clipboard::clear_task");
            }
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use anyhow::Result;
    use async_trait::async_trait;
    use themepass_wordgen::GenerationError;

    struct ThemeSource;

    #[async_trait]
    impl WordSource for ThemeSource {
        async fn generate_text(
            &self,
            prompt: &str,
        ) -> std::result::Result<String, GenerationError> {
            if prompt.contains("broken") {
                Err(GenerationError::MissingText)
            } else {
                Ok("star, planet, comet, nebula".to_owned())
            }
        }
    }

    fn app() -> App<ThemeSource> {
        App::with_source(
            ThemeSource,
            GenerationConfig::new(24),
            Default::default(),
        )
    }

    #[tokio::test]
    async fn app_generate() -> Result<()> {
        let mut app = app();
        assert!(app.current().is_none());
        let result = app.generate().await;
        assert!(!result.is_empty());
        assert!(app.current().is_some());

        let results = app.generate_many(3).await;
        assert_eq!(3, results.len());
        assert_eq!(
            results[2].password.expose_secret(),
            app.current().unwrap().password.expose_secret()
        );
        Ok(())
    }

    #[tokio::test]
    async fn app_regenerate_words() -> Result<()> {
        let mut app = app();
        let pool = app.regenerate_words("space").await?;
        assert_eq!(&["star", "planet", "comet", "nebula"], pool.words());
        assert_eq!(pool, app.pool().await);

        let (kind, message) = app.status().unwrap();
        assert_eq!(NoticeKind::Success, kind);
        assert!(message.contains(r#""space""#));

        // Fresh password assembled from the new pool
        let password = app.current().unwrap().password.expose_secret().to_owned();
        assert!(password
            .split('-')
            .all(|word| pool.iter().any(|w| w == word)));

        app.reset_pool().await;
        assert_eq!(WordPool::default(), app.pool().await);
        Ok(())
    }

    #[tokio::test]
    async fn app_regenerate_failures() -> Result<()> {
        let mut app = app();
        assert!(app.regenerate_words("  ").await.is_err());
        assert_eq!(
            Some((NoticeKind::Info, "Please enter a theme.")),
            app.status()
        );

        assert!(app.regenerate_words("broken").await.is_err());
        assert_eq!(NoticeKind::Failure, app.status().unwrap().0);
        assert_eq!(WordPool::default(), app.pool().await);
        assert!(app.current().is_none());
        Ok(())
    }

    #[tokio::test]
    async fn app_copy_without_password() -> Result<()> {
        let mut app = app();
        assert!(!app.copy().await?);
        assert!(!app.copied());
        Ok(())
    }

    #[test]
    fn app_set_config() {
        let mut app = app();
        assert!(app.set_config(GenerationConfig::new(2)).is_err());
        assert_eq!(24, app.config().max_length);
        assert!(app.set_config(GenerationConfig::new(40).numbers()).is_ok());
        assert!(app.config().include_numbers);
    }

    #[tokio::test]
    async fn app_waits_for_clear() -> Result<()> {
        use std::sync::{
            atomic::{AtomicBool, Ordering},
            Arc,
        };

        let mut app = App::with_source(
            ThemeSource,
            GenerationConfig::new(24),
            ClipboardConfig {
                clear_after: Some(1),
            },
        );
        assert!(app.pending_clear().is_none());

        let cleared = Arc::new(AtomicBool::new(false));
        let flag = Arc::clone(&cleared);
        app.pending_clear = Some(tokio::spawn(async move {
            tokio::time::sleep(std::time::Duration::from_millis(50)).await;
            flag.store(true, Ordering::SeqCst);
        }));
        assert_eq!(Some(1), app.pending_clear());

        app.wait_for_clear().await;
        assert!(cleared.load(Ordering::SeqCst));
        assert!(app.pending_clear().is_none());
        Ok(())
    }
}

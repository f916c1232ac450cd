//! Owner of the current word pool.
use std::sync::atomic::{AtomicBool, Ordering};
use tokio::sync::RwLock;

use crate::{regenerate, Error, Result, WordPool, WordSource};

/// Owns the word pool and replaces it with words
/// generated from a theme.
///
/// Only one regeneration may run at a time; a second
/// request while one is in flight is refused rather
/// than racing to replace the pool.
pub struct WordPoolProvider<S> {
    source: S,
    pool: RwLock<WordPool>,
    busy: AtomicBool,
}

impl<S> WordPoolProvider<S>
where
    S: WordSource + Send + Sync,
{
    /// Create a provider using the default word list.
    pub fn new(source: S) -> Self {
        Self::with_pool(source, WordPool::default())
    }

    /// Create a provider with an initial pool.
    pub fn with_pool(source: S, pool: WordPool) -> Self {
        Self {
            source,
            pool: RwLock::new(pool),
            busy: AtomicBool::new(false),
        }
    }

    /// Text generation source.
    pub fn source(&self) -> &S {
        &self.source
    }

    /// Copy of the current pool.
    pub async fn pool(&self) -> WordPool {
        self.pool.read().await.clone()
    }

    /// Restore the default word list.
    pub async fn reset(&self) {
        *self.pool.write().await = WordPool::default();
    }

    /// Determine if a regeneration is in flight.
    pub fn is_busy(&self) -> bool {
        self.busy.load(Ordering::SeqCst)
    }

    /// Replace the pool with words generated for a theme.
    ///
    /// On failure the current pool is left unchanged.
    pub async fn regenerate(&self, theme: &str) -> Result<WordPool> {
        if theme.trim().is_empty() {
            return Err(Error::EmptyTheme);
        }

        let _guard = BusyGuard::acquire(&self.busy)?;
        match regenerate(&self.source, theme).await {
            Ok(pool) => {
                *self.pool.write().await = pool.clone();
                Ok(pool)
            }
            Err(e) => {
                tracing::warn!(error = %e, "regenerate::failed");
                Err(e)
            }
        }
    }
}

/// Clears the busy flag when dropped.
struct BusyGuard<'a>(&'a AtomicBool);

impl<'a> BusyGuard<'a> {
    fn acquire(flag: &'a AtomicBool) -> Result<Self> {
        flag.compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
            .map_err(|_| Error::InProgress)?;
        Ok(Self(flag))
    }
}

impl Drop for BusyGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::SeqCst);
    }
}

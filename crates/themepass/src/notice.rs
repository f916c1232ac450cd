//! Transient status messages.
use std::time::{Duration, Instant};

/// Lifetime of word generation status messages.
pub const STATUS_TTL: Duration = Duration::from_secs(5);

/// Lifetime of the copied to clipboard indicator.
pub const COPIED_TTL: Duration = Duration::from_millis(1500);

/// Kind of status message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    /// Operation succeeded.
    Success,
    /// Operation failed.
    Failure,
    /// Informational message.
    Info,
}

/// Message that expires after a fixed duration.
///
/// Expiry is checked when the message is read so no
/// background task is required to clear it.
#[derive(Debug)]
pub struct Notice {
    ttl: Duration,
    message: Option<(NoticeKind, String, Instant)>,
}

impl Notice {
    /// Create an empty notice with a lifetime.
    pub fn new(ttl: Duration) -> Self {
        Self { ttl, message: None }
    }

    /// Replace the message.
    pub fn set(&mut self, kind: NoticeKind, message: impl Into<String>) {
        self.message = Some((kind, message.into(), Instant::now()));
    }

    /// Remove the message.
    pub fn clear(&mut self) {
        self.message = None;
    }

    /// Message when it has not yet expired.
    pub fn current(&self) -> Option<(NoticeKind, &str)> {
        match &self.message {
            Some((kind, message, created)) if created.elapsed() < self.ttl => {
                Some((*kind, message.as_str()))
            }
            _ => None,
        }
    }
}

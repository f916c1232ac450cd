//! Access to the native system clipboard.
use crate::Result;
use std::{borrow::Cow, sync::Arc};
use tokio::{
    sync::Mutex,
    task::JoinHandle,
    time::{sleep, Duration},
};
use zeroize::Zeroize;

/// Native system clipboard.
#[derive(Clone)]
pub struct Clipboard {
    clipboard: Arc<Mutex<arboard::Clipboard>>,
    timeout_seconds: u16,
}

impl Clipboard {
    /// Create a native clipboard using the default
    /// timeout of 90 seconds.
    pub fn new() -> Result<Self> {
        Self::new_timeout(90)
    }

    /// Create a native clipboard with a timeout.
    pub fn new_timeout(timeout_seconds: u16) -> Result<Self> {
        Ok(Self {
            clipboard: Arc::new(Mutex::new(arboard::Clipboard::new()?)),
            timeout_seconds,
        })
    }

    /// Seconds before text placed with a timeout is cleared.
    pub fn timeout_seconds(&self) -> u16 {
        self.timeout_seconds
    }

    /// Fetches UTF-8 text from the clipboard and returns it.
    ///
    /// # Errors
    ///
    /// Returns error if clipboard is empty or contents are not UTF-8 text.
    pub async fn get_text(&self) -> Result<String> {
        let mut clipboard = self.clipboard.lock().await;
        Ok(clipboard.get_text()?)
    }

    /// Places the text onto the clipboard. Any valid UTF-8
    /// string is accepted.
    ///
    /// # Errors
    ///
    /// Returns error if text failed to be stored on the clipboard.
    pub async fn set_text<'a, T: Into<Cow<'a, str>>>(
        &self,
        text: T,
    ) -> Result<()> {
        let mut clipboard = self.clipboard.lock().await;
        Ok(clipboard.set_text(text)?)
    }

    /// Clears any contents that may be present from the
    /// platform's default clipboard, regardless of the format of the data.
    ///
    /// # Errors
    ///
    /// Returns error on Windows or Linux if clipboard cannot be cleared.
    pub async fn clear(&self) -> Result<()> {
        let mut clipboard = self.clipboard.lock().await;
        Ok(clipboard.clear()?)
    }

    /// Places text on to the clipboard and sets a timeout to clear
    /// the text from the clipboard.
    ///
    /// The text is only cleared if the clipboard contents match the
    /// initial value to allow for the user changing the clipboard
    /// content elsewhere whilst the the timeout is active.
    ///
    /// The clear runs on a spawned task; callers that exit
    /// before the timeout must await the returned handle.
    pub async fn set_text_timeout<'a, T: Into<Cow<'a, str>>>(
        &self,
        text: T,
    ) -> Result<JoinHandle<()>> {
        let mut text = text.into().into_owned();
        self.set_text(text.as_str()).await?;

        let clipboard = Arc::clone(&self.clipboard);
        let timeout = Duration::from_secs(self.timeout_seconds as u64);
        let handle = tokio::spawn(async move {
            sleep(timeout).await;
            let mut clipboard = clipboard.lock().await;
            let matches = clipboard
                .get_text()
                .map(|mut current| {
                    let matches = current == text;
                    current.zeroize();
                    matches
                })
                .unwrap_or(false);
            text.zeroize();
            if matches {
                if let Err(error) = clipboard.clear() {
                    tracing::warn!(error = %error, "clipboard::clear");
                }
            }
        });

        Ok(handle)
    }
}

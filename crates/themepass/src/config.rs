//! Configuration file.
use etcetera::{
    app_strategy::choose_native_strategy, AppStrategy, AppStrategyArgs,
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use themepass_password::GenerationConfig;
use themepass_wordgen::ProviderConfig;

use crate::{Error, Result};

const APP_AUTHOR: &str = "themepass";
const APP_NAME: &str = "themepass";
const CONFIG_FILE: &str = "config.toml";

/// Configuration for the executable.
#[derive(Default, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Password generation options.
    pub generator: GenerationConfig,

    /// Text generation service.
    pub provider: ProviderConfig,

    /// Clipboard options.
    pub clipboard: ClipboardConfig,

    /// Path the file was loaded from.
    #[serde(skip)]
    file: Option<PathBuf>,
}

/// Clipboard configuration.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct ClipboardConfig {
    /// Clear copied passwords after this many seconds.
    pub clear_after: Option<u16>,
}

impl AppConfig {
    /// Default location of the config file.
    pub fn default_path() -> Result<PathBuf> {
        let strategy = choose_native_strategy(AppStrategyArgs {
            top_level_domain: "com".to_string(),
            author: APP_AUTHOR.to_string(),
            app_name: APP_NAME.to_string(),
        })
        .map_err(|_| Error::NoConfigDir)?;
        Ok(strategy.config_dir().join(CONFIG_FILE))
    }

    /// Load a config from a file path.
    pub async fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !tokio::fs::try_exists(path).await? {
            return Err(Error::NotFile(path.to_path_buf()));
        }

        let contents = tokio::fs::read_to_string(path).await?;
        let mut config: AppConfig = toml::from_str(&contents)?;
        config.generator.validate()?;
        config.file = Some(path.to_path_buf());
        tracing::debug!(path = %path.display(), "config::load");
        Ok(config)
    }

    /// Load an explicit config file or the file in the default
    /// location when it exists; otherwise use the defaults.
    pub async fn load_or_default(path: Option<PathBuf>) -> Result<Self> {
        if let Some(path) = path {
            return Self::load(path).await;
        }

        let path = Self::default_path()?;
        if tokio::fs::try_exists(&path).await? {
            Self::load(path).await
        } else {
            Ok(Default::default())
        }
    }

    /// Write a config file with the default settings.
    pub async fn init<P: AsRef<Path>>(path: P) -> Result<()> {
        let path = path.as_ref();
        if tokio::fs::try_exists(path).await? {
            return Err(Error::FileExists(path.to_path_buf()));
        }
        if let Some(parent) = path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }
        tokio::fs::write(path, Self::default().to_toml()?).await?;
        Ok(())
    }

    /// Path the config was loaded from.
    pub fn file(&self) -> Option<&Path> {
        self.file.as_deref()
    }

    /// Encode the config as TOML.
    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }
}

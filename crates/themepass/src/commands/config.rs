use clap::Subcommand;
use std::path::PathBuf;

use crate::{config::AppConfig, helpers::messages, Result};

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Create a configuration file with the default settings.
    Init {
        /// Config file to write, defaults to the standard location.
        path: Option<PathBuf>,
    },
    /// Print the active configuration.
    Show,
}

/// Handle config commands.
pub async fn run(cmd: Command, config: AppConfig) -> Result<()> {
    match cmd {
        Command::Init { path } => {
            let path = match path {
                Some(path) => path,
                None => AppConfig::default_path()?,
            };
            AppConfig::init(&path).await?;
            messages::success(format!("Config written to {}", path.display()));
        }
        Command::Show => {
            if let Some(file) = config.file() {
                messages::info(format!("# {}", file.display()));
            }
            print!("{}", config.to_toml()?);
        }
    }
    Ok(())
}

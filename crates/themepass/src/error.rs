use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("path {0} is not a file")]
    NotFile(PathBuf),

    #[error("file {0} already exists")]
    FileExists(PathBuf),

    #[error("could not determine the configuration directory")]
    NoConfigDir,

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    TomlDeser(#[from] toml::de::Error),

    #[error(transparent)]
    TomlSer(#[from] toml::ser::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Password(#[from] themepass_password::Error),

    #[error(transparent)]
    WordGen(#[from] themepass_wordgen::Error),

    #[error(transparent)]
    Generation(#[from] themepass_wordgen::GenerationError),

    #[error(transparent)]
    Clipboard(#[from] themepass_clipboard::Error),

    #[error(transparent)]
    Readline(#[from] rustyline::error::ReadlineError),

    #[error(transparent)]
    ShellWords(#[from] shell_words::ParseError),

    #[error(transparent)]
    Clap(#[from] clap::Error),
}

use clap::{CommandFactory, Parser, Subcommand};
use secrecy::SecretString;
use std::path::PathBuf;
use themepass_cli_helpers::CommandTree;

use crate::{
    commands::{config, generate, shell, words, ConfigCommand, GeneratorOptions},
    config::AppConfig,
    Result,
};

#[derive(Parser, Debug)]
#[clap(name = "themepass", author, version, about, long_about = None)]
pub struct ThemePass {
    /// Config file to load.
    #[clap(long, env = "THEMEPASS_CONFIG")]
    config: Option<PathBuf>,

    /// API key for the text generation service.
    #[clap(
        long,
        env = "THEMEPASS_API_KEY",
        hide_env_values = true
    )]
    api_key: Option<String>,

    #[clap(subcommand)]
    cmd: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Generate passwords.
    #[clap(alias = "g")]
    Generate {
        #[clap(flatten)]
        options: GeneratorOptions,

        /// Number of passwords to generate.
        #[clap(
            short = 'n',
            long,
            default_value = "1",
            value_parser = clap::value_parser!(u16).range(1..)
        )]
        count: u16,

        /// Copy the last password to the clipboard.
        #[clap(short, long)]
        copy: bool,

        /// Generate the word list from a theme first.
        #[clap(short, long)]
        theme: Option<String>,
    },
    /// Generate a word list from a theme.
    #[clap(alias = "w")]
    Words {
        #[clap(flatten)]
        options: GeneratorOptions,

        /// Theme for the word list.
        theme: String,
    },
    /// Interactive generator shell.
    Shell,
    /// Manage the configuration file.
    Config {
        #[clap(subcommand)]
        cmd: ConfigCommand,
    },
}

pub async fn run() -> Result<()> {
    // Support JSON output of command tree
    if std::env::var("THEMEPASS_CLI_JSON").ok().is_some() {
        let cmd = ThemePass::command();
        let tree: CommandTree = (&cmd).into();
        serde_json::to_writer_pretty(std::io::stdout(), &tree)?;
        std::process::exit(0);
    }

    let args = ThemePass::parse();

    let mut app_config = AppConfig::load_or_default(args.config).await?;
    if let Some(api_key) = args.api_key {
        app_config.provider.api_key = Some(SecretString::new(api_key.into()));
    }

    match args.cmd {
        Command::Generate {
            options,
            count,
            copy,
            theme,
        } => {
            generate::run(app_config, options, count.into(), copy, theme)
                .await?
        }
        Command::Words { options, theme } => {
            words::run(app_config, options, theme).await?
        }
        Command::Shell => shell::run(app_config).await?,
        Command::Config { cmd } => config::run(cmd, app_config).await?,
    }
    Ok(())
}

#[cfg(test)]
mod test {
    use super::*;
    use themepass_password::Separator;

    #[test]
    fn cli_parse_generate() -> anyhow::Result<()> {
        let args = ThemePass::try_parse_from([
            "themepass",
            "generate",
            "--length",
            "32",
            "--separator",
            "_",
            "--no-symbols",
            "-n",
            "3",
            "--theme",
            "ocean",
        ])?;
        match args.cmd {
            Command::Generate {
                options,
                count,
                copy,
                theme,
            } => {
                assert_eq!(Some(32), options.length);
                assert_eq!(Some(Separator::Underscore), options.separator);
                assert!(options.no_symbols);
                assert_eq!(3, count);
                assert!(!copy);
                assert_eq!(Some("ocean"), theme.as_deref());
            }
            _ => panic!("expected generate command"),
        }
        Ok(())
    }

    #[test]
    fn cli_rejects_zero_count() {
        assert!(ThemePass::try_parse_from([
            "themepass",
            "generate",
            "--count",
            "0"
        ])
        .is_err());
    }

    #[test]
    fn cli_words_requires_theme() {
        assert!(ThemePass::try_parse_from(["themepass", "words"]).is_err());
    }

    #[test]
    fn cli_command_tree() {
        let cmd = ThemePass::command();
        let tree: CommandTree = (&cmd).into();
        let names: Vec<&str> =
            tree.commands.iter().map(|c| c.name.as_str()).collect();
        assert!(names.contains(&"generate"));
        assert!(names.contains(&"words"));
        assert!(names.contains(&"shell"));
        assert!(names.contains(&"config"));
    }
}

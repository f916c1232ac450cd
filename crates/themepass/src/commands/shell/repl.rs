use std::ffi::OsString;

use clap::{builder::BoolishValueParser, ArgAction, CommandFactory, Parser, Subcommand};
use themepass_password::Separator;
use themepass_wordgen::WordSource;

use crate::{
    app::App,
    helpers::{display_password, messages, print_notice, print_password},
    Result,
};

/// Themed password shell.
#[derive(Parser, Debug)]
#[clap(name = "shell", author, version, about, long_about = None)]
struct Shell {
    #[clap(subcommand)]
    cmd: ShellCommand,
}

#[derive(Subcommand, Debug)]
enum ShellCommand {
    /// Generate passwords from the current word list.
    #[clap(alias = "g")]
    Generate {
        /// Number of passwords to generate.
        #[clap(
            short = 'n',
            long,
            default_value = "1",
            value_parser = clap::value_parser!(u16).range(1..)
        )]
        count: u16,
    },
    /// Replace the word list with words for a theme.
    #[clap(alias = "w")]
    Words {
        /// Theme for the word list.
        theme: Vec<String>,
    },
    /// Copy the current password to the clipboard.
    #[clap(alias = "c")]
    Copy,
    /// Print the word generation status.
    Status,
    /// Print the current word list.
    Pool,
    /// Restore the default word list.
    Reset,
    /// Change a generation option.
    Set {
        #[clap(subcommand)]
        cmd: SetCommand,
    },
    /// Print the generation options.
    Config,
    /// Exit the shell.
    #[clap(alias = "q")]
    Quit,
}

#[derive(Subcommand, Debug)]
enum SetCommand {
    /// Maximum password length.
    Length {
        /// Number of characters.
        length: usize,
    },
    /// Separator between words.
    Separator {
        /// Name or literal character.
        separator: Separator,
    },
    /// Append a random number.
    Numbers {
        #[clap(action = ArgAction::Set, value_parser = BoolishValueParser::new())]
        enabled: bool,
    },
    /// Append a random symbol.
    Symbols {
        #[clap(action = ArgAction::Set, value_parser = BoolishValueParser::new())]
        enabled: bool,
    },
    /// Randomize the case of every letter.
    Case {
        #[clap(action = ArgAction::Set, value_parser = BoolishValueParser::new())]
        enabled: bool,
    },
}

/// Execute the program command.
async fn exec_program<S>(program: Shell, app: &mut App<S>) -> Result<()>
where
    S: WordSource + Send + Sync,
{
    match program.cmd {
        ShellCommand::Generate { count } => {
            if count == 1 {
                display_password("PASSWORD", app.generate().await);
            } else {
                for result in app.generate_many(usize::from(count)).await {
                    print_password(&result);
                }
            }
            Ok(())
        }
        ShellCommand::Words { theme } => {
            let theme = theme.join(" ");
            let result = app.regenerate_words(&theme).await;
            if let Some((kind, message)) = app.status() {
                print_notice(kind, message);
            }
            if result.is_ok() {
                if let Some(result) = app.current() {
                    display_password("PASSWORD", result);
                }
            }
            Ok(())
        }
        ShellCommand::Copy => {
            if app.copy().await? {
                messages::success("Copied to clipboard!");
            } else {
                messages::info("Nothing to copy, generate a password first.");
            }
            Ok(())
        }
        ShellCommand::Status => {
            match app.status() {
                Some((kind, message)) => print_notice(kind, message),
                None => messages::info("No recent status."),
            }
            Ok(())
        }
        ShellCommand::Pool => {
            let pool = app.pool().await;
            messages::info(format!("{} word(s)", pool.len()));
            println!("{}", pool.words().join(", "));
            Ok(())
        }
        ShellCommand::Reset => {
            app.reset_pool().await;
            messages::success("Word list restored to the defaults.");
            Ok(())
        }
        ShellCommand::Set { cmd } => {
            let mut config = app.config().clone();
            match cmd {
                SetCommand::Length { length } => config.max_length = length,
                SetCommand::Separator { separator } => {
                    config.separator = separator
                }
                SetCommand::Numbers { enabled } => {
                    config.include_numbers = enabled
                }
                SetCommand::Symbols { enabled } => {
                    config.include_symbols = enabled
                }
                SetCommand::Case { enabled } => config.randomize_case = enabled,
            }
            app.set_config(config)?;
            Ok(())
        }
        ShellCommand::Config => {
            print!("{}", toml::to_string_pretty(app.config())?);
            Ok(())
        }
        ShellCommand::Quit => {
            if app.pending_clear().is_some() {
                messages::info("Waiting for the clipboard to be cleared...");
                app.wait_for_clear().await;
            }
            std::process::exit(0);
        }
    }
}

/// Intermediary to pretty print clap parse errors.
async fn exec_args<I, T, S>(it: I, app: &mut App<S>) -> Result<()>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
    S: WordSource + Send + Sync,
{
    match Shell::try_parse_from(it) {
        Ok(program) => exec_program(program, app).await?,
        Err(e) => e.print()?,
    }
    Ok(())
}

/// Execute a line of input in the context of the shell program.
pub async fn exec<S>(line: &str, app: &mut App<S>) -> Result<()>
where
    S: WordSource + Send + Sync,
{
    if !line.trim().is_empty() {
        let mut sanitized = shell_words::split(line.trim_end_matches(' '))?;
        sanitized.insert(0, String::from("themepass-shell"));
        let it = sanitized.into_iter();
        let mut cmd = Shell::command();
        if line == "-V" {
            let version = cmd.render_version();
            print!("{}", version);
        } else if line == "version" || line == "--version" {
            let version = cmd.render_long_version();
            print!("{}", version);
        } else if line == "-h" {
            cmd.print_help()?;
        } else if line == "help" || line == "--help" {
            cmd.print_long_help()?;
        } else {
            exec_args(it, app).await?;
        }
    }
    Ok(())
}

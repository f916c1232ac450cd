use rustyline::{history::MemHistory, Config, Editor};
use secrecy::ExposeSecret;
use terminal_banner::{Banner, Padding};
use themepass_password::generator::PasswordResult;

use crate::{
    notice::NoticeKind,
    Result,
};

pub use themepass_cli_helpers::messages;

/// Print a generated password in a banner.
pub(crate) fn display_password(heading: &str, result: &PasswordResult) {
    match password_banner(heading, result) {
        Some(banner) => println!("{}", banner),
        None => messages::warn(
            "no words fit within the maximum length, try a larger length",
        ),
    }
}

/// Render the banner for a password, `None` when it is empty.
fn password_banner(heading: &str, result: &PasswordResult) -> Option<String> {
    if result.is_empty() {
        return None;
    }
    Some(
        Banner::new()
            .padding(Padding::one())
            .text(heading.into())
            .text(result.password.expose_secret().into())
            .text(format!("Strength: {}/4", result.score()).into())
            .render(),
    )
}

/// Print a generated password on a single line.
pub(crate) fn print_password(result: &PasswordResult) {
    println!(
        "{}  ({}/4)",
        result.password.expose_secret(),
        result.score()
    );
}

/// Print a status message using the color for the kind.
pub(crate) fn print_notice(kind: NoticeKind, message: &str) {
    match kind {
        NoticeKind::Success => messages::success(message),
        NoticeKind::Failure => messages::fail(message),
        NoticeKind::Info => messages::info(message),
    }
}

/// Line editor with in-memory history.
pub(crate) fn basic_editor() -> Result<Editor<(), MemHistory>> {
    Ok(Editor::<(), MemHistory>::with_history(
        Config::builder().auto_add_history(true).build(),
        MemHistory::new(),
    )?)
}

use super::exec;
use terminal_banner::{Banner, Padding};

use crate::{
    app::App,
    config::AppConfig,
    helpers::{basic_editor, display_password},
    Error, Result,
};

const WELCOME: &str = include_str!("welcome.txt");

/// Print the welcome information.
fn welcome(config: &AppConfig) {
    let help_info = r#"Type "help", "--help" or "-h" for command usage
Type "quit" or "q" to exit"#;
    let status_info = format!("Provider: {}", config.provider.url);
    let banner = Banner::new()
        .padding(Padding::one())
        .text(WELCOME.into())
        .text(help_info.into())
        .text(status_info.into())
        .render();
    println!("{}", banner);
}

pub async fn run(config: AppConfig) -> Result<()> {
    welcome(&config);

    let mut app = App::new(config)?;
    display_password("PASSWORD", app.generate().await);

    let mut rl = basic_editor()?;
    loop {
        let prompt_value = if app.copied() {
            "themepass (copied)> "
        } else {
            "themepass> "
        };
        match rl.readline(prompt_value) {
            Ok(line) => {
                if let Err(e) = exec(&line, &mut app).await {
                    tracing::error!(target: crate::TARGET, "{}", e);
                }
            }
            Err(e) => return Err(Error::Readline(e)),
        }
    }
}

use crate::{
    app::App,
    commands::GeneratorOptions,
    config::AppConfig,
    helpers::{display_password, messages, print_notice, print_password},
    Result,
};

/// Generate passwords, optionally from a freshly generated
/// themed word list.
pub async fn run(
    config: AppConfig,
    options: GeneratorOptions,
    count: usize,
    copy: bool,
    theme: Option<String>,
) -> Result<()> {
    let generator = options.apply(config.generator.clone())?;
    let mut app = App::new(config)?;
    app.set_config(generator)?;

    if let Some(theme) = theme {
        let result = app.regenerate_words(&theme).await;
        if let Some((kind, message)) = app.status() {
            print_notice(kind, message);
        }
        result?;
    }

    if count == 1 {
        let result = app.generate().await;
        display_password("PASSWORD", result);
    } else {
        for result in app.generate_many(count).await {
            print_password(&result);
        }
    }

    if copy && app.copy().await? {
        messages::success("Copied to clipboard!");
        if let Some(seconds) = app.pending_clear() {
            messages::info(format!(
                "Clearing the clipboard in {} seconds...",
                seconds
            ));
            app.wait_for_clear().await;
        }
    }

    Ok(())
}

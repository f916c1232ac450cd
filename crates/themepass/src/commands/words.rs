use crate::{
    app::App,
    commands::GeneratorOptions,
    config::AppConfig,
    helpers::{display_password, messages, print_notice},
    Result,
};

/// Generate the word list from a theme and print a password
/// assembled from the new words.
pub async fn run(
    config: AppConfig,
    options: GeneratorOptions,
    theme: String,
) -> Result<()> {
    let generator = options.apply(config.generator.clone())?;
    let mut app = App::new(config)?;
    app.set_config(generator)?;

    let result = app.regenerate_words(&theme).await;
    if let Some((kind, message)) = app.status() {
        print_notice(kind, message);
    }
    let pool = result?;

    messages::info(pool.words().join(", "));
    if let Some(result) = app.current() {
        display_password("PASSWORD", result);
    }
    Ok(())
}

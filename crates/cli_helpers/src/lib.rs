//! Helper types and functions for the themepass command line executable.

pub mod messages;

/// Command tree printed as JSON for documentation tooling.
#[derive(Debug, serde::Serialize, serde::Deserialize)]
pub struct CommandTree {
    /// Name of the command.
    pub name: String,
    /// Short description from the doc comment.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub about: Option<String>,
    /// Aliases, for example `g` for `generate`.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub aliases: Vec<String>,
    /// Subcommands.
    pub commands: Vec<CommandTree>,
}

impl From<&clap::Command> for CommandTree {
    fn from(value: &clap::Command) -> Self {
        CommandTree {
            name: value.get_name().to_string(),
            about: value.get_about().map(|about| about.to_string()),
            aliases: value.get_all_aliases().map(String::from).collect(),
            commands: value
                .get_subcommands()
                .filter(|c| c.get_name() != "help")
                .map(|c| c.into())
                .collect(),
        }
    }
}

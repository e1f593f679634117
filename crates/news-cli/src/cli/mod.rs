use clap::Parser;

pub mod global;
pub mod root_commands;
pub mod subcommands;

pub use global::{GlobalFlags, OutputFormat};
pub use root_commands::Commands;

/// Top-level CLI parser for the `nws` binary.
#[derive(Debug, Parser)]
#[command(name = "nws", version, about = "Newsroom - news reader and admin console")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format: json, table, raw
    #[arg(short, long, global = true, default_value = "json")]
    pub format: OutputFormat,

    /// Quiet mode (suppress non-essential output)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

impl Cli {
    /// Extract ergonomic global flags struct for command handlers.
    #[must_use]
    pub const fn global_flags(&self) -> GlobalFlags {
        GlobalFlags {
            format: self.format,
            quiet: self.quiet,
            verbose: self.verbose,
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::{CommandFactory, Parser};

    use super::subcommands::{ArticleCommands, GlossaryCommands, SourceCommands, UserCommands};
    use super::{Cli, Commands, OutputFormat};

    #[test]
    fn clap_command_tree_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn global_flags_parse_before_subcommand() {
        let cli = Cli::try_parse_from(["nws", "--format", "table", "--verbose", "shell"])
            .expect("cli should parse");

        assert_eq!(cli.format, OutputFormat::Table);
        assert!(cli.verbose);
        assert!(matches!(cli.command, Commands::Shell));
    }

    #[test]
    fn global_flags_parse_after_subcommand() {
        let cli = Cli::try_parse_from(["nws", "bookmark", "list", "--format", "raw", "--quiet"])
            .expect("cli should parse");

        assert_eq!(cli.format, OutputFormat::Raw);
        assert!(cli.global_flags().quiet);
    }

    #[test]
    fn output_format_rejects_invalid_value() {
        let parsed = Cli::try_parse_from(["nws", "--format", "xml", "shell"]);
        assert!(parsed.is_err());
    }

    #[test]
    fn article_feed_defaults_to_all() {
        let cli = Cli::try_parse_from(["nws", "article", "feed"]).expect("cli should parse");
        let Commands::Article {
            action: ArticleCommands::Feed { category },
        } = cli.command
        else {
            panic!("expected article feed");
        };
        assert_eq!(category, "all");
    }

    #[test]
    fn glossary_search_flags() {
        let cli = Cli::try_parse_from([
            "nws", "glossary", "search", "--query", "api", "--category", "tech", "--grouped",
        ])
        .expect("cli should parse");
        let Commands::Glossary {
            action:
                GlossaryCommands::Search {
                    query,
                    category,
                    grouped,
                },
        } = cli.command
        else {
            panic!("expected glossary search");
        };
        assert_eq!(query, "api");
        assert_eq!(category, "tech");
        assert!(grouped);
    }

    #[test]
    fn update_takes_positional_id_and_optional_fields() {
        let cli = Cli::try_parse_from([
            "nws",
            "source",
            "update",
            "1",
            "--credibility",
            "9.0",
            "--active",
            "false",
        ])
        .expect("cli should parse");
        let Commands::Source {
            action: SourceCommands::Update { id, fields },
        } = cli.command
        else {
            panic!("expected source update");
        };
        assert_eq!(id, 1);
        assert_eq!(fields.credibility.as_deref(), Some("9.0"));
        assert_eq!(fields.active, Some(false));
        assert!(fields.name.is_none());
    }

    #[test]
    fn delete_accepts_yes_flag() {
        let cli = Cli::try_parse_from(["nws", "user", "delete", "2", "-y"]).expect("cli should parse");
        let Commands::User {
            action: UserCommands::Delete(args),
        } = cli.command
        else {
            panic!("expected user delete");
        };
        assert_eq!(args.id, 2);
        assert!(args.yes);
    }

    #[test]
    fn model_features_are_repeatable() {
        let cli = Cli::try_parse_from([
            "nws",
            "model",
            "create",
            "--name",
            "Summarizer",
            "--feature",
            "summarization",
            "--feature",
            "sentiment",
        ])
        .expect("cli should parse");
        let Commands::Model { action } = cli.command else {
            panic!("expected model command");
        };
        let super::subcommands::ModelCommands::Create(fields) = action else {
            panic!("expected model create");
        };
        assert_eq!(fields.features, vec!["summarization", "sentiment"]);
    }
}

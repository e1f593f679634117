use clap::Subcommand;

/// Glossary commands.
#[derive(Clone, Debug, Subcommand)]
pub enum GlossaryCommands {
    /// Search terms and definitions.
    Search {
        #[arg(long, default_value = "")]
        query: String,
        #[arg(long, default_value = "all")]
        category: String,
        /// Group results under their initial letter.
        #[arg(long)]
        grouped: bool,
    },
    /// List the category selector values.
    Categories,
}

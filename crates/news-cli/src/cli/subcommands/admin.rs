//! Admin record management. Every field is optional on the command line:
//! `create` starts from a blank form, `update` from the stored record, and
//! the given flags override it.

use clap::{Args, Subcommand};
use news_core::ids::RecordId;

#[derive(Clone, Debug, Args)]
pub struct DeleteArgs {
    pub id: RecordId,
    /// Skip the confirmation prompt.
    #[arg(short, long)]
    pub yes: bool,
}

/// User commands.
#[derive(Clone, Debug, Subcommand)]
pub enum UserCommands {
    /// List users.
    List,
    /// Create a user.
    Create(UserFields),
    /// Replace a user.
    Update {
        id: RecordId,
        #[command(flatten)]
        fields: UserFields,
    },
    /// Delete a user.
    Delete(DeleteArgs),
}

#[derive(Clone, Debug, Default, Args)]
pub struct UserFields {
    #[arg(long)]
    pub name: Option<String>,
    #[arg(long)]
    pub email: Option<String>,
    /// user or admin
    #[arg(long)]
    pub role: Option<String>,
    #[arg(long)]
    pub avatar: Option<String>,
}

/// Source commands.
#[derive(Clone, Debug, Subcommand)]
pub enum SourceCommands {
    /// List sources.
    List,
    /// Create a source.
    Create(SourceFields),
    /// Replace a source.
    Update {
        id: RecordId,
        #[command(flatten)]
        fields: SourceFields,
    },
    /// Delete a source.
    Delete(DeleteArgs),
}

#[derive(Clone, Debug, Default, Args)]
pub struct SourceFields {
    #[arg(long)]
    pub name: Option<String>,
    #[arg(long)]
    pub url: Option<String>,
    #[arg(long)]
    pub category: Option<String>,
    #[arg(long)]
    pub active: Option<bool>,
    /// Credibility between 0 and 10.
    #[arg(long)]
    pub credibility: Option<String>,
}

/// Glossary term commands.
#[derive(Clone, Debug, Subcommand)]
pub enum TermCommands {
    /// List glossary terms.
    List,
    /// Create a glossary term.
    Create(TermFields),
    /// Replace a glossary term.
    Update {
        id: RecordId,
        #[command(flatten)]
        fields: TermFields,
    },
    /// Delete a glossary term.
    Delete(DeleteArgs),
}

#[derive(Clone, Debug, Default, Args)]
pub struct TermFields {
    #[arg(long)]
    pub term: Option<String>,
    #[arg(long)]
    pub definition: Option<String>,
    #[arg(long)]
    pub category: Option<String>,
}

/// AI model commands.
#[derive(Clone, Debug, Subcommand)]
pub enum ModelCommands {
    /// List AI model configurations.
    List,
    /// Create an AI model configuration.
    Create(ModelFields),
    /// Replace an AI model configuration.
    Update {
        id: RecordId,
        #[command(flatten)]
        fields: ModelFields,
    },
    /// Delete an AI model configuration.
    Delete(DeleteArgs),
}

#[derive(Clone, Debug, Default, Args)]
pub struct ModelFields {
    #[arg(long)]
    pub name: Option<String>,
    #[arg(long)]
    pub provider: Option<String>,
    #[arg(long)]
    pub model_id: Option<String>,
    #[arg(long)]
    pub api_key: Option<String>,
    #[arg(long)]
    pub cost_per_token: Option<String>,
    #[arg(long)]
    pub max_tokens: Option<String>,
    #[arg(long)]
    pub temperature: Option<String>,
    #[arg(long)]
    pub active: Option<bool>,
    /// Repeatable; replaces the feature set when given.
    #[arg(long = "feature")]
    pub features: Vec<String>,
}

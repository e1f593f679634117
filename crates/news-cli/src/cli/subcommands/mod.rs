mod admin;
mod article;
mod auth;
mod bookmark;
mod glossary;

pub use admin::{
    DeleteArgs, ModelCommands, ModelFields, SourceCommands, SourceFields, TermCommands,
    TermFields, UserCommands, UserFields,
};
pub use article::ArticleCommands;
pub use auth::{AuthCommands, AuthLoginArgs, AuthRegisterArgs};
pub use bookmark::BookmarkCommands;
pub use glossary::GlossaryCommands;

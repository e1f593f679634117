//! Entity structs for all Newsroom domain objects.
//!
//! Field names serialize as camelCase so fixture JSON and the persisted
//! session identity keep the same shape (`joinDate`, `isActive`, ...).
//! All structs derive `Serialize`, `Deserialize`, and `JsonSchema`.

mod ai_model;
mod article;
mod glossary;
mod source;
mod user;

pub use ai_model::AiModel;
pub use article::Article;
pub use glossary::GlossaryTerm;
pub use source::Source;
pub use user::{DEFAULT_AVATAR, User};

use crate::enums::EntityKind;
use crate::ids::RecordId;

/// A record that lives in an id-keyed collection.
pub trait Record: Clone {
    /// Collection the record belongs to.
    const KIND: EntityKind;

    /// Identity within the collection.
    fn id(&self) -> RecordId;
}

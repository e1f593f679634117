use news_core::enums::EntityKind;
use news_core::errors::ValidationError;
use news_core::ids::RecordId;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("{kind} {id} not found")]
    NotFound { kind: EntityKind, id: RecordId },

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("{kind} records are read-only")]
    ReadOnly { kind: EntityKind },

    #[error("failed to load {name} fixtures: {source}")]
    Fixture {
        name: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

use chrono::NaiveDate;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::Record;
use crate::enums::{EntityKind, Role};
use crate::ids::RecordId;

/// Avatar assigned when a user is created without one.
pub const DEFAULT_AVATAR: &str =
    "https://images.unsplash.com/photo-1472099645785-5658abf4ff4e?w=100&h=100&fit=crop&crop=face";

/// A reader or administrator account.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: RecordId,
    pub name: String,
    pub email: String,
    pub role: Role,
    pub avatar: String,
    pub join_date: NaiveDate,
    pub is_active: bool,
}

impl User {
    #[must_use]
    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }
}

impl Record for User {
    const KIND: EntityKind = EntityKind::User;

    fn id(&self) -> RecordId {
        self.id
    }
}

use chrono::{DateTime, Utc};
use news_core::entities::{DEFAULT_AVATAR, User};
use news_core::enums::Role;
use news_core::errors::ValidationError;
use news_core::ids::RecordId;
use news_core::validation::{email, required};

use super::EntityForm;

/// Editable user fields. `joinDate` and `isActive` are not on the form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserForm {
    pub name: String,
    pub email: String,
    pub role: Role,
    /// Empty means the default avatar.
    pub avatar: String,
}

impl EntityForm for UserForm {
    type Record = User;

    fn prefill(record: &User) -> Self {
        Self {
            name: record.name.clone(),
            email: record.email.clone(),
            role: record.role,
            avatar: record.avatar.clone(),
        }
    }

    fn into_record(
        self,
        existing: Option<&User>,
        id: RecordId,
        now: DateTime<Utc>,
    ) -> Result<User, ValidationError> {
        required("name", &self.name)?;
        required("email", &self.email)?;
        email(&self.email)?;

        let avatar = if self.avatar.is_empty() {
            DEFAULT_AVATAR.to_string()
        } else {
            self.avatar
        };
        Ok(User {
            id,
            name: self.name,
            email: self.email,
            role: self.role,
            avatar,
            join_date: existing.map_or_else(|| now.date_naive(), |user| user.join_date),
            is_active: existing.is_none_or(|user| user.is_active),
        })
    }
}

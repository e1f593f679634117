//! The signed-in identity for one process.

use chrono::{DateTime, Utc};
use news_core::entities::{DEFAULT_AVATAR, User};
use news_core::enums::Role;
use news_core::ids::timestamp_id;

use crate::credentials::password_matches;
use crate::error::AuthError;
use crate::session_store::SessionStore;

/// Current identity plus the store it is mirrored into.
///
/// Every state change writes the store first and updates the in-memory
/// identity only when that write succeeds.
#[derive(Debug)]
pub struct SessionHolder<S> {
    store: S,
    current: Option<User>,
}

impl<S: SessionStore> SessionHolder<S> {
    /// Restore whatever identity `store` holds.
    ///
    /// Unreadable or unparseable content is logged and treated as signed out.
    pub fn init(store: S) -> Self {
        let current = match store.load() {
            Ok(Some(raw)) => match serde_json::from_str::<User>(&raw) {
                Ok(user) => {
                    tracing::debug!(user_id = user.id, "restored session");
                    Some(user)
                }
                Err(error) => {
                    tracing::warn!(%error, "ignoring unparseable session identity");
                    None
                }
            },
            Ok(None) => None,
            Err(error) => {
                tracing::warn!(%error, "session store unreadable; starting signed out");
                None
            }
        };
        Self { store, current }
    }

    #[must_use]
    pub const fn current(&self) -> Option<&User> {
        self.current.as_ref()
    }

    #[must_use]
    pub fn is_admin(&self) -> bool {
        self.current.as_ref().is_some_and(User::is_admin)
    }

    /// # Errors
    ///
    /// [`AuthError::NotAuthenticated`] when signed out, [`AuthError::Forbidden`]
    /// when signed in without the admin role.
    pub fn require_admin(&self) -> Result<&User, AuthError> {
        match &self.current {
            None => Err(AuthError::NotAuthenticated),
            Some(user) if user.is_admin() => Ok(user),
            Some(_) => Err(AuthError::Forbidden),
        }
    }

    #[must_use]
    pub const fn store(&self) -> &S {
        &self.store
    }

    /// Sign in as the user whose email matches exactly.
    ///
    /// # Errors
    ///
    /// [`AuthError::InvalidCredentials`] for an unknown email or wrong
    /// password; the session is left as it was.
    pub fn login(&mut self, users: &[User], email: &str, password: &str) -> Result<&User, AuthError> {
        let user = users
            .iter()
            .find(|user| user.email == email)
            .filter(|_| password_matches(password))
            .ok_or(AuthError::InvalidCredentials)?;
        self.persist(user.clone())
    }

    /// Create a fresh `user`-role identity and sign in as it.
    ///
    /// The account is not added to any user collection and the email is not
    /// checked for uniqueness.
    ///
    /// # Errors
    ///
    /// Returns an error only if the identity cannot be persisted.
    pub fn register(
        &mut self,
        name: &str,
        email: &str,
        _password: &str,
        now: DateTime<Utc>,
    ) -> Result<&User, AuthError> {
        let user = User {
            id: timestamp_id(now),
            name: name.to_string(),
            email: email.to_string(),
            role: Role::User,
            avatar: DEFAULT_AVATAR.to_string(),
            join_date: now.date_naive(),
            is_active: true,
        };
        self.persist(user)
    }

    /// # Errors
    ///
    /// Returns [`AuthError::SessionStore`] if the stored identity cannot be removed.
    pub fn logout(&mut self) -> Result<(), AuthError> {
        self.store.delete()?;
        if let Some(user) = self.current.take() {
            tracing::info!(user_id = user.id, "signed out");
        }
        Ok(())
    }

    fn persist(&mut self, user: User) -> Result<&User, AuthError> {
        let encoded = serde_json::to_string(&user)?;
        self.store.store(&encoded)?;
        tracing::info!(user_id = user.id, role = user.role.as_str(), "signed in");
        Ok(self.current.insert(user))
    }
}

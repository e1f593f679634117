//! # news-auth
//!
//! Mock session handling for Newsroom.
//!
//! A [`SessionHolder`] keeps the signed-in [`User`](news_core::entities::User)
//! and mirrors it into a [`SessionStore`] under a single key, so a later
//! process starts already signed in. Credentials are checked against a fixed
//! demo password; registration always succeeds. None of this is meant as a
//! real credential system.

pub mod credentials;
pub mod error;
pub mod session;
pub mod session_store;

pub use error::AuthError;
pub use session::SessionHolder;
pub use session_store::{FileSessionStore, MemorySessionStore, SessionStore};

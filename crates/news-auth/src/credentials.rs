//! Demo credential check.

/// The only password the mock login accepts, for every account.
pub const DEMO_PASSWORD: &str = "password";

#[must_use]
pub fn password_matches(password: &str) -> bool {
    password == DEMO_PASSWORD
}

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("invalid email or password")]
    InvalidCredentials,

    #[error("not authenticated; run `nws auth login`")]
    NotAuthenticated,

    #[error("admin access required")]
    Forbidden,

    #[error("session store error: {0}")]
    SessionStore(String),

    #[error("failed to encode session identity: {0}")]
    Encode(#[from] serde_json::Error),
}

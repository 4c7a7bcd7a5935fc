use thiserror::Error;

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("failed to sign session token: {0}")]
    Sign(#[from] jsonwebtoken::errors::Error),

    #[error("session lifetime out of range")]
    TtlOutOfRange,
}

use thiserror::Error;

/// Errors that are safe to expose to other modules
#[derive(Error, Debug, Clone)]
pub enum LeadsError {
    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Internal error")]
    Internal,
}

impl LeadsError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }
}

impl From<crate::domain::error::DomainError> for LeadsError {
    fn from(domain_error: crate::domain::error::DomainError) -> Self {
        use crate::domain::error::DomainError::*;
        match domain_error {
            e @ (MissingContactFields | MissingField { .. }) => Self::validation(e.to_string()),
            Database { .. } => Self::Internal,
        }
    }
}

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DomainError {
    /// Contact intake reports missing fields without naming them.
    #[error("Missing required fields")]
    MissingContactFields,

    #[error("Missing required field: {field}")]
    MissingField { field: &'static str },

    #[error("Database error: {message}")]
    Database { message: String },
}

impl DomainError {
    pub fn missing_field(field: &'static str) -> Self {
        Self::MissingField { field }
    }

    pub fn database(message: impl Into<String>) -> Self {
        Self::Database {
            message: message.into(),
        }
    }
}

use thiserror::Error;

#[derive(Error, Debug)]
pub enum TackyError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Explicit import of a board file failed. Shown to the user.
    #[error("Failed to import: {0}")]
    Import(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl TackyError {
    pub fn serialization(err: impl std::fmt::Display) -> Self {
        Self::Serialization(err.to_string())
    }
}

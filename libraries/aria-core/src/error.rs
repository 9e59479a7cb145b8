/// Core error types for Aria Player
use crate::types::{Scope, SongId};
use thiserror::Error;

/// Result type alias using `AriaError`
pub type Result<T> = std::result::Result<T, AriaError>;

/// Core error type for Aria Player
#[derive(Error, Debug)]
pub enum AriaError {
    /// Referenced song id absent from the expected collection
    #[error("Song not found in {scope}: {id}")]
    NotFound {
        /// Collection that was searched
        scope: Scope,
        /// The missing identifier
        id: SongId,
    },

    /// Persistence write/read failed
    #[error("Persistence error: {0}")]
    Persistence(String),

    /// Serialization errors
    #[error(transparent)]
    Serialization(#[from] serde_json::Error),

    /// I/O errors
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl AriaError {
    /// Create a not found error
    pub fn not_found(scope: Scope, id: SongId) -> Self {
        Self::NotFound { scope, id }
    }

    /// Create a persistence error
    pub fn persistence(msg: impl Into<String>) -> Self {
        Self::Persistence(msg.into())
    }

    /// Create an invalid input error
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_names_scope_and_id() {
        let err = AriaError::not_found(Scope::Trash, SongId::new(42));
        assert_eq!(err.to_string(), "Song not found in trash: 42");
    }
}

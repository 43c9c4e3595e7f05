//! Store error types

use thiserror::Error;

use crate::entity::EntityError;

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors raised by [`super::EntityStore`]
#[derive(Debug, Error)]
pub enum StoreError {
    /// Error from the entity model, passed through unchanged
    #[error(transparent)]
    Entity(#[from] EntityError),

    /// A handler panicked while holding the document lock
    #[error("Document lock poisoned")]
    LockPoisoned,
}

impl StoreError {
    pub fn code(&self) -> &'static str {
        match self {
            StoreError::Entity(err) => err.code(),
            StoreError::LockPoisoned => "JSONREST_LOCK_POISONED",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_pass_through() {
        let err = StoreError::from(EntityError::MalformedRecord);
        assert_eq!(err.code(), "JSONREST_MALFORMED_RECORD");
        assert_eq!(err.to_string(), EntityError::MalformedRecord.to_string());
        assert_eq!(StoreError::LockPoisoned.code(), "JSONREST_LOCK_POISONED");
    }
}

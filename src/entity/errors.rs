//! # Entity Errors
//!
//! Error types for document parsing and record operations.
//!
//! Error codes:
//! - JSONREST_INVALID_JSON (parse, fatal at startup)
//! - JSONREST_MALFORMED_DOCUMENT (parse, fatal at startup)
//! - JSONREST_MALFORMED_ENTITY (parse, fatal at startup)
//! - JSONREST_MALFORMED_RECORD (parse or request body)
//! - JSONREST_UNKNOWN_ENTITY (request)
//! - JSONREST_NOT_FOUND (request)

use thiserror::Error;

/// Result type for entity operations
pub type EntityResult<T> = Result<T, EntityError>;

/// Errors raised while parsing or mutating the document
#[derive(Debug, Error)]
pub enum EntityError {
    // ==================
    // Parse Errors
    // ==================
    /// Input bytes are not valid JSON
    #[error("Invalid JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),

    /// Root value is not an object
    #[error("Document root is not an object")]
    MalformedDocument,

    /// Top-level value is not an array
    #[error("Could not read entity '{0}': value is not an array")]
    MalformedEntity(String),

    /// Array element is not an object
    #[error("Entry in entity is not an object")]
    MalformedRecord,

    // ==================
    // Lookup Errors
    // ==================
    /// No entity with the given name
    #[error("Unknown entity: {0}")]
    UnknownEntity(String),

    /// No record with the given id in the entity
    #[error("Entry '{id}' not found in entity '{entity}'")]
    NotFound { entity: String, id: String },
}

impl EntityError {
    /// Returns the stable error code string
    pub fn code(&self) -> &'static str {
        match self {
            EntityError::InvalidJson(_) => "JSONREST_INVALID_JSON",
            EntityError::MalformedDocument => "JSONREST_MALFORMED_DOCUMENT",
            EntityError::MalformedEntity(_) => "JSONREST_MALFORMED_ENTITY",
            EntityError::MalformedRecord => "JSONREST_MALFORMED_RECORD",
            EntityError::UnknownEntity(_) => "JSONREST_UNKNOWN_ENTITY",
            EntityError::NotFound { .. } => "JSONREST_NOT_FOUND",
        }
    }

    /// Returns whether this error came from reading the document shape
    pub fn is_parse_error(&self) -> bool {
        matches!(
            self,
            EntityError::InvalidJson(_)
                | EntityError::MalformedDocument
                | EntityError::MalformedEntity(_)
                | EntityError::MalformedRecord
        )
    }

    pub(crate) fn not_found(entity: &str, id: &str) -> Self {
        EntityError::NotFound {
            entity: entity.to_string(),
            id: id.to_string(),
        }
    }
}

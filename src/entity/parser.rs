//! Entity parser
//!
//! Walks an untyped JSON tree and builds a [`GlobalObject`], assigning
//! identifiers to entries that lack one. Any failure aborts the whole parse.

use serde_json::Value;

use super::collection::Entity;
use super::document::GlobalObject;
use super::errors::{EntityError, EntityResult};
use super::id::IdStrategy;
use super::record::EntityEntry;

/// Builds documents, entities and entries from JSON values
#[derive(Debug, Clone, Copy, Default)]
pub struct EntityParser {
    ids: IdStrategy,
}

impl EntityParser {
    pub fn new(ids: IdStrategy) -> Self {
        Self { ids }
    }

    pub fn id_strategy(&self) -> IdStrategy {
        self.ids
    }

    /// Parse raw JSON bytes into a document
    pub fn parse_entities(&self, bytes: &[u8]) -> EntityResult<GlobalObject> {
        let root: Value = serde_json::from_slice(bytes)?;
        self.parse_document(root)
    }

    /// Parse an already decoded JSON root into a document
    pub fn parse_document(&self, root: Value) -> EntityResult<GlobalObject> {
        let Value::Object(root) = root else {
            return Err(EntityError::MalformedDocument);
        };

        let entities = root
            .into_iter()
            .map(|(name, value)| self.parse_entity(value, name))
            .collect::<EntityResult<Vec<_>>>()?;

        Ok(GlobalObject::new(entities))
    }

    /// Parse the array stored under one top-level key
    pub fn parse_entity(&self, value: Value, name: impl Into<String>) -> EntityResult<Entity> {
        let name = name.into();
        let Value::Array(items) = value else {
            return Err(EntityError::MalformedEntity(name));
        };

        let entries = items
            .into_iter()
            .map(|item| self.parse_entry(item))
            .collect::<EntityResult<Vec<_>>>()?;

        Ok(Entity::new(name, entries))
    }

    /// Parse one array element into an entry
    pub fn parse_entry(&self, value: Value) -> EntityResult<EntityEntry> {
        match value {
            Value::Object(fields) => Ok(EntityEntry::from_fields(fields, || self.ids.generate())),
            _ => Err(EntityError::MalformedRecord),
        }
    }
}

//! # Entity Store
//!
//! Process-wide handle to the parsed document.
//!
//! Every read and write goes through one mutex. Mutations persist the whole
//! document before the lock is released, so writes reach the persister in
//! the same order they were applied.

use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard};

use serde_json::Value;

use crate::entity::{EntityEntry, EntityParser, GlobalObject};

use super::errors::{StoreError, StoreResult};
use super::persist::Persister;

/// Cloneable, synchronized handle to a [`GlobalObject`]
#[derive(Clone)]
pub struct EntityStore {
    document: Arc<Mutex<GlobalObject>>,
    parser: EntityParser,
    persister: Arc<dyn Persister>,
}

impl EntityStore {
    pub fn new(document: GlobalObject, parser: EntityParser, persister: Arc<dyn Persister>) -> Self {
        Self {
            document: Arc::new(Mutex::new(document)),
            parser,
            persister,
        }
    }

    fn lock(&self) -> StoreResult<MutexGuard<'_, GlobalObject>> {
        self.document.lock().map_err(|_| StoreError::LockPoisoned)
    }

    /// Entity names in document order
    pub fn entity_names(&self) -> StoreResult<Vec<String>> {
        Ok(self.lock()?.entity_names())
    }

    /// Fields of every entry of `entity`
    pub fn list(&self, entity: &str) -> StoreResult<Vec<Value>> {
        let doc = self.lock()?;
        let entries = doc.entity(entity)?.entries();
        Ok(entries.iter().map(EntityEntry::to_value).collect())
    }

    /// Fields of the first entry with `id`
    pub fn get(&self, entity: &str, id: &str) -> StoreResult<Value> {
        let doc = self.lock()?;
        Ok(doc.find_record(entity, id)?.to_value())
    }

    /// Append `body` as a new entry and return its fields
    ///
    /// The id is generated unless `body` already carries a string id.
    pub fn create(&self, entity: &str, body: Value) -> StoreResult<Value> {
        let entry = self.parser.parse_entry(body)?;

        let mut doc = self.lock()?;
        if doc.find_record(entity, entry.id()).is_ok() {
            tracing::warn!(
                event = "DUPLICATE_ID",
                entity = %entity,
                id = %entry.id(),
                "appending entry whose id already exists"
            );
        }

        let created = entry.to_value();
        let id = entry.id().to_string();
        doc.append_record(entity, entry)?;
        self.persist(&doc);

        tracing::info!(event = "RECORD_CREATED", entity = %entity, id = %id);
        Ok(created)
    }

    /// Replace the entry with `id` by `body` and return the new fields
    ///
    /// Any `id` inside `body` is overridden by `id`.
    pub fn update(&self, entity: &str, id: &str, body: Value) -> StoreResult<Value> {
        let entry = self.parser.parse_entry(body)?.with_id(id);
        let updated = entry.to_value();

        let mut doc = self.lock()?;
        doc.update_record(entity, id, entry)?;
        self.persist(&doc);

        tracing::info!(event = "RECORD_UPDATED", entity = %entity, id = %id);
        Ok(updated)
    }

    /// Current document in its on-disk shape
    pub fn serialize(&self) -> StoreResult<Value> {
        Ok(self.lock()?.to_value())
    }

    /// Hand the current document to the persister. Failures are logged only.
    fn persist(&self, doc: &GlobalObject) {
        let bytes = match doc.to_json() {
            Ok(bytes) => bytes,
            Err(e) => {
                tracing::error!(event = "PERSIST_FAILED", error = %e, "could not serialize document");
                return;
            }
        };

        if let Err(e) = self.persister.persist(&bytes) {
            tracing::error!(event = "PERSIST_FAILED", error = %e, "could not write document");
        }
    }
}

impl fmt::Debug for EntityStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EntityStore")
            .field("parser", &self.parser)
            .field("persister", &self.persister)
            .finish_non_exhaustive()
    }
}

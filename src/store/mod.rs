//! # Store Module
//!
//! Synchronized access to the process-wide document and write-back of the
//! document after each mutation.

mod entity_store;
mod errors;
mod persist;

pub use entity_store::EntityStore;
pub use errors::{StoreError, StoreResult};
pub use persist::{FilePersister, MemoryPersister, Persister};

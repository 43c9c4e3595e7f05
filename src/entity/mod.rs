//! # Entity Model
//!
//! Generic record store built from an untyped JSON document.
//!
//! Each top-level key of the document is an [`Entity`]; each object in its
//! array is an [`EntityEntry`] with a resolved identifier. The whole tree is a
//! [`GlobalObject`], which serializes back to the same object-of-arrays shape.
//!
//! # Invariants
//!
//! - Every entry carries `fields["id"] == id`
//! - Parse failures abort the whole parse
//! - Entity order follows the source document

mod collection;
mod document;
mod errors;
pub mod id;
mod parser;
mod record;

pub use collection::Entity;
pub use document::GlobalObject;
pub use errors::{EntityError, EntityResult};
pub use id::IdStrategy;
pub use parser::EntityParser;
pub use record::{EntityEntry, ID_FIELD};

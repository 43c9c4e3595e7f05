//! jsonrest - serve a plain JSON document as a set of REST resources
//!
//! Every top-level key of the document becomes an entity whose array of
//! objects is exposed as list / get / create / update endpoints. Mutations
//! are written back to the same file in the same shape.

pub mod cli;
pub mod entity;
pub mod http_server;
pub mod observability;
pub mod store;

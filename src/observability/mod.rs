//! Observability for jsonrest
//!
//! Structured logging through `tracing`. Request spans come from
//! `tower-http`'s trace layer installed by the HTTP server.

mod logger;

pub use logger::{init_logging, LogFormat, DEFAULT_FILTER};

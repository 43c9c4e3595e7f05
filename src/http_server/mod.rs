//! # HTTP Server Module
//!
//! Routes entity names to the store and turns store results into responses.
//!
//! # Endpoints
//!
//! - `GET /{entity}` - list records
//! - `POST /{entity}` - create a record
//! - `GET /{entity}/{id}` - get one record
//! - `PUT /{entity}/{id}` - replace one record

pub mod config;
pub mod entity_routes;
pub mod errors;
pub mod response;
pub mod server;

pub use config::HttpServerConfig;
pub use errors::{ErrorResponse, RestError, RestResult};
pub use response::PrettyJson;
pub use server::HttpServer;

//! Entity HTTP Routes
//!
//! Per entity `E`:
//!
//! - `GET /E` - every record of `E`
//! - `POST /E` - create a record
//! - `GET /E/:id` - one record
//! - `PUT /E/:id` - replace one record
//!
//! The entity with the empty name is listed and created at `/`. Its records
//! are read and replaced at `//:id`, where the entity segment is empty.

use axum::{
    body::Bytes,
    extract::{Path, State},
    routing::get,
    Router,
};
use serde_json::Value;

use crate::store::EntityStore;

use super::errors::{RestError, RestResult};
use super::response::PrettyJson;

/// Build the entity router over a shared store
pub fn entity_routes(store: EntityStore) -> Router {
    Router::new()
        .route("/", get(list_root).post(create_root))
        .route("/:entity", get(list_handler).post(create_handler))
        .route("/:entity/:id", get(get_handler).put(update_handler))
        .with_state(store)
}

/// Decode a request body, accepting only JSON objects
fn parse_body(body: &Bytes) -> RestResult<Value> {
    let value: Value = serde_json::from_slice(body)
        .map_err(|e| RestError::InvalidBody(e.to_string()))?;
    if !value.is_object() {
        return Err(RestError::InvalidBody("expected a JSON object".to_string()));
    }
    Ok(value)
}

async fn list_handler(
    State(store): State<EntityStore>,
    Path(entity): Path<String>,
) -> RestResult<PrettyJson<Vec<Value>>> {
    Ok(PrettyJson(store.list(&entity)?))
}

async fn get_handler(
    State(store): State<EntityStore>,
    Path((entity, id)): Path<(String, String)>,
) -> RestResult<PrettyJson<Value>> {
    Ok(PrettyJson(store.get(&entity, &id)?))
}

async fn create_handler(
    State(store): State<EntityStore>,
    Path(entity): Path<String>,
    body: Bytes,
) -> RestResult<PrettyJson<Value>> {
    let body = parse_body(&body)?;
    Ok(PrettyJson(store.create(&entity, body)?))
}

async fn update_handler(
    State(store): State<EntityStore>,
    Path((entity, id)): Path<(String, String)>,
    body: Bytes,
) -> RestResult<PrettyJson<Value>> {
    let body = parse_body(&body)?;
    Ok(PrettyJson(store.update(&entity, &id, body)?))
}

async fn list_root(State(store): State<EntityStore>) -> RestResult<PrettyJson<Vec<Value>>> {
    Ok(PrettyJson(store.list("")?))
}

async fn create_root(
    State(store): State<EntityStore>,
    body: Bytes,
) -> RestResult<PrettyJson<Value>> {
    let body = parse_body(&body)?;
    Ok(PrettyJson(store.create("", body)?))
}

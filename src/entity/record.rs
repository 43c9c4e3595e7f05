//! Record model: one JSON object plus its resolved identifier

use serde_json::{Map, Value};

/// Key under which every record stores its identifier
pub const ID_FIELD: &str = "id";

/// One addressable object within an entity
///
/// `fields["id"]` always holds `id` as a JSON string.
#[derive(Debug, Clone, PartialEq)]
pub struct EntityEntry {
    id: String,
    fields: Map<String, Value>,
}

impl EntityEntry {
    /// Build an entry from an object, resolving its id.
    ///
    /// A non-empty string `id` field is kept as is. Anything else (missing,
    /// empty, or not a string) is replaced by the output of `generate`.
    pub fn from_fields(mut fields: Map<String, Value>, generate: impl FnOnce() -> String) -> Self {
        let id = match fields.get(ID_FIELD) {
            Some(Value::String(id)) if !id.is_empty() => id.clone(),
            _ => {
                let id = generate();
                fields.insert(ID_FIELD.to_string(), Value::String(id.clone()));
                id
            }
        };
        Self { id, fields }
    }

    /// Force the identifier, overriding any `id` in the fields
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        let id = id.into();
        self.fields
            .insert(ID_FIELD.to_string(), Value::String(id.clone()));
        self.id = id;
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn fields(&self) -> &Map<String, Value> {
        &self.fields
    }

    /// Fields as a JSON object value
    pub fn to_value(&self) -> Value {
        Value::Object(self.fields.clone())
    }
}

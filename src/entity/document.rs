//! Document model: the whole parsed JSON tree

use serde_json::{Map, Value};

use super::collection::Entity;
use super::errors::{EntityError, EntityResult};
use super::parser::EntityParser;
use super::record::EntityEntry;

/// Root of the parsed document, holding every entity in source key order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GlobalObject {
    entities: Vec<Entity>,
}

impl GlobalObject {
    pub fn new(entities: Vec<Entity>) -> Self {
        Self { entities }
    }

    /// Parse raw JSON bytes using UUID identifiers for entries lacking one
    pub fn parse(bytes: &[u8]) -> EntityResult<Self> {
        EntityParser::default().parse_entities(bytes)
    }

    pub fn entities(&self) -> &[Entity] {
        &self.entities
    }

    /// Entity names in document order
    pub fn entity_names(&self) -> Vec<String> {
        self.entities.iter().map(|e| e.name().to_string()).collect()
    }

    pub fn entity(&self, name: &str) -> EntityResult<&Entity> {
        self.entities
            .iter()
            .find(|e| e.name() == name)
            .ok_or_else(|| EntityError::UnknownEntity(name.to_string()))
    }

    pub fn entity_mut(&mut self, name: &str) -> EntityResult<&mut Entity> {
        self.entities
            .iter_mut()
            .find(|e| e.name() == name)
            .ok_or_else(|| EntityError::UnknownEntity(name.to_string()))
    }

    pub fn find_record(&self, entity: &str, id: &str) -> EntityResult<&EntityEntry> {
        self.entity(entity)?.find_entry(id)
    }

    pub fn append_record(&mut self, entity: &str, entry: EntityEntry) -> EntityResult<()> {
        self.entity_mut(entity)?.append_entry(entry);
        Ok(())
    }

    pub fn update_record(&mut self, entity: &str, id: &str, entry: EntityEntry) -> EntityResult<()> {
        self.entity_mut(entity)?.update_entry(id, entry)
    }

    /// Rebuild the object-of-arrays shape the document was parsed from
    pub fn to_value(&self) -> Value {
        let root: Map<String, Value> = self
            .entities
            .iter()
            .map(|entity| {
                let entries = entity.entries().iter().map(EntityEntry::to_value).collect();
                (entity.name().to_string(), Value::Array(entries))
            })
            .collect();
        Value::Object(root)
    }

    /// Serialize to pretty JSON with two-space indentation
    pub fn to_json(&self) -> EntityResult<Vec<u8>> {
        Ok(serde_json::to_vec_pretty(&self.to_value())?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const DOC: &str =
        r#"{"books":[{"id":"book-0","title":"t0"},{"id":"book-1","title":"t1"}],"authors":[{"id":"a-1","name":"J"}]}"#;

    #[test]
    fn test_lookup() {
        let doc = GlobalObject::parse(DOC.as_bytes()).unwrap();
        assert_eq!(doc.entities().len(), 2);
        assert_eq!(doc.entity("books").unwrap().len(), 2);
        assert_eq!(doc.entity("authors").unwrap().len(), 1);
        assert_eq!(doc.find_record("books", "book-1").unwrap().fields()["title"], "t1");
        assert!(matches!(
            doc.entity("movies"),
            Err(EntityError::UnknownEntity(_))
        ));
    }

    #[test]
    fn test_entity_order_follows_source() {
        let doc = GlobalObject::parse(br#"{"zeta": [], "alpha": [], "mid": []}"#).unwrap();
        assert_eq!(doc.entity_names(), ["zeta", "alpha", "mid"]);
    }

    #[test]
    fn test_round_trip() {
        let doc = GlobalObject::parse(DOC.as_bytes()).unwrap();
        let expected: Value = serde_json::from_str(DOC).unwrap();
        assert_eq!(doc.to_value(), expected);
    }

    #[test]
    fn test_to_json_is_pretty() {
        let doc = GlobalObject::parse(br#"{"books":[{"id":"b"}]}"#).unwrap();
        let text = String::from_utf8(doc.to_json().unwrap()).unwrap();
        assert!(text.contains("\n  \"books\""));
    }

    #[test]
    fn test_append_and_update_through_document() {
        let mut doc = GlobalObject::parse(DOC.as_bytes()).unwrap();
        let parser = EntityParser::default();

        let entry = parser.parse_entry(json!({"name": "K"})).unwrap();
        doc.append_record("authors", entry).unwrap();
        assert_eq!(doc.entity("authors").unwrap().len(), 2);

        let replacement = parser.parse_entry(json!({"name": "Jay"})).unwrap().with_id("a-1");
        doc.update_record("authors", "a-1", replacement).unwrap();
        assert_eq!(
            doc.find_record("authors", "a-1").unwrap().to_value(),
            json!({"id": "a-1", "name": "Jay"})
        );

        let stray = parser.parse_entry(json!({})).unwrap();
        assert!(matches!(
            doc.append_record("movies", stray),
            Err(EntityError::UnknownEntity(_))
        ));
    }
}

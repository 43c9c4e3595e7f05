//! Entity model: a named, ordered collection of entries

use super::errors::{EntityError, EntityResult};
use super::record::EntityEntry;

/// A named collection of records, one per top-level key of the document
#[derive(Debug, Clone, PartialEq)]
pub struct Entity {
    name: String,
    entries: Vec<EntityEntry>,
}

impl Entity {
    pub fn new(name: impl Into<String>, entries: Vec<EntityEntry>) -> Self {
        Self {
            name: name.into(),
            entries,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Entries in insertion order
    pub fn entries(&self) -> &[EntityEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// First entry whose id matches
    pub fn find_entry(&self, id: &str) -> EntityResult<&EntityEntry> {
        self.entries
            .iter()
            .find(|entry| entry.id() == id)
            .ok_or_else(|| EntityError::not_found(&self.name, id))
    }

    /// Append at the end. Duplicate ids are not rejected.
    pub fn append_entry(&mut self, entry: EntityEntry) {
        self.entries.push(entry);
    }

    /// Replace the first entry whose id matches with `entry`.
    ///
    /// This is a full overwrite, not a merge. Callers keep `entry.id() == id`.
    pub fn update_entry(&mut self, id: &str, entry: EntityEntry) -> EntityResult<()> {
        let existing = self
            .entries
            .iter_mut()
            .find(|existing| existing.id() == id)
            .ok_or_else(|| EntityError::not_found(&self.name, id))?;
        *existing = entry;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    fn entry(v: Value) -> EntityEntry {
        match v {
            Value::Object(map) => EntityEntry::from_fields(map, || "generated".into()),
            _ => panic!("not an object"),
        }
    }

    fn books() -> Entity {
        Entity::new(
            "books",
            vec![
                entry(json!({"id": "book-0", "title": "t0"})),
                entry(json!({"id": "book-1", "title": "t1"})),
            ],
        )
    }

    #[test]
    fn test_find_entry() {
        let books = books();
        assert_eq!(books.find_entry("book-1").unwrap().fields()["title"], "t1");
        assert!(matches!(
            books.find_entry("book-9"),
            Err(EntityError::NotFound { .. })
        ));
    }

    #[test]
    fn test_find_returns_first_duplicate() {
        let mut books = books();
        books.append_entry(entry(json!({"id": "book-0", "title": "dup"})));
        assert_eq!(books.len(), 3);
        assert_eq!(books.find_entry("book-0").unwrap().fields()["title"], "t0");
    }

    #[test]
    fn test_append_entry() {
        let mut books = books();
        books.append_entry(entry(json!({"title": "t2"})));
        assert_eq!(books.len(), 3);
        assert_eq!(books.entries()[2].fields()["title"], "t2");
    }

    #[test]
    fn test_update_entry_overwrites() {
        let mut books = books();
        let replacement = entry(json!({"pages": 10})).with_id("book-0");
        books.update_entry("book-0", replacement).unwrap();

        let updated = books.find_entry("book-0").unwrap();
        assert_eq!(updated.to_value(), json!({"pages": 10, "id": "book-0"}));
        assert_eq!(books.entries()[1].fields()["title"], "t1");
    }

    #[test]
    fn test_update_missing_leaves_entries_unchanged() {
        let mut books = books();
        let before = books.clone();
        let result = books.update_entry("nope", entry(json!({})).with_id("nope"));
        assert!(matches!(result, Err(EntityError::NotFound { .. })));
        assert_eq!(books, before);
    }

    #[test]
    fn test_empty_entity() {
        let entity = Entity::new("", Vec::new());
        assert!(entity.is_empty());
        assert_eq!(entity.name(), "");
    }
}

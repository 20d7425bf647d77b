//! Item collection loading and validation

use super::error::SchemaError;
use super::types::Item;
use std::collections::HashSet;
use std::fs;
use std::path::Path;

/// Load an item collection from a JSON file
///
/// The file holds a JSON array of items. Identifiers are validated on
/// the way in: every item needs a non-empty, collection-unique id so it
/// can be matched to its rendered card.
///
/// # Errors
/// Returns `SchemaError` if the file cannot be read or parsed, or if
/// the collection fails identifier validation.
pub fn load_items(path: &Path) -> Result<Vec<Item>, SchemaError> {
    let raw = fs::read_to_string(path)?;
    let items: Vec<Item> = serde_json::from_str(&raw)?;
    validate(&items)?;
    Ok(items)
}

/// Check the identifier preconditions on a collection
///
/// # Errors
/// Returns `SchemaError::MissingId` for an empty id and
/// `SchemaError::DuplicateId` when two items share one.
pub fn validate(items: &[Item]) -> Result<(), SchemaError> {
    let mut seen: HashSet<&str> = HashSet::with_capacity(items.len());
    for (idx, item) in items.iter().enumerate() {
        if item.id.is_empty() {
            return Err(SchemaError::MissingId(idx));
        }
        if !seen.insert(item.id.as_str()) {
            return Err(SchemaError::DuplicateId(item.id.clone()));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_load_items_roundtrip() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[
                {{ "id": "p1", "title": "First", "date": "2024-01-01", "keywords": ["nlp"] }},
                {{ "id": "p2", "title": "Second", "date": "2024-06-01" }}
            ]"#
        )
        .unwrap();

        let items = load_items(file.path()).unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].id, "p1");
        assert_eq!(items[1].keywords.len(), 0);
    }

    #[test]
    fn test_load_items_rejects_bad_json() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();

        let result = load_items(file.path());
        assert!(matches!(result, Err(SchemaError::Parse(_))));
    }

    #[test]
    fn test_validate_missing_id() {
        let mut items = crate::testing::nlp_pair();
        items[1].id = String::new();

        let result = validate(&items);
        assert!(matches!(result, Err(SchemaError::MissingId(1))));
    }

    #[test]
    fn test_validate_duplicate_id() {
        let mut items = crate::testing::nlp_pair();
        items[1].id = "p1".to_string();

        let result = validate(&items);
        assert!(matches!(result, Err(SchemaError::DuplicateId(id)) if id == "p1"));
    }

    #[test]
    fn test_validate_empty_collection() {
        assert!(validate(&[]).is_ok());
    }
}

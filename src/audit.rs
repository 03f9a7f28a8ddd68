// src/audit.rs
//
// Side-channel record of what a run resolved: an id -> URL mapping written
// as pretty JSON for human review. Purely additive; nothing reads it back.

use std::error::Error;
use std::fs;
use std::path::Path;

use serde_json::{Map, Value};

pub fn write_mapping(path: &Path, mapping: &[(String, String)]) -> Result<(), Box<dyn Error>> {
    let mut obj = Map::new();
    for (id, url) in mapping {
        obj.insert(id.clone(), Value::String(url.clone()));
    }
    let text = serde_json::to_string_pretty(&Value::Object(obj))?;
    fs::write(path, text)
        .map_err(|e| format!("cannot write audit file {}: {}", path.display(), e))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writes_an_object_keyed_by_id() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("mapping.json");
        let mapping = vec![
            ("lamp-1".to_string(), "https://x/a.jpg".to_string()),
            ("lamp-2".to_string(), "https://x/b.jpg".to_string()),
        ];
        write_mapping(&path, &mapping).unwrap();

        let text = fs::read_to_string(&path).unwrap();
        let value: Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["lamp-1"], "https://x/a.jpg");
        assert_eq!(value["lamp-2"], "https://x/b.jpg");
    }

    #[test]
    fn empty_mapping_is_an_empty_object() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("mapping.json");
        write_mapping(&path, &[]).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap().trim(), "{}");
    }
}

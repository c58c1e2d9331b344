//! Integration tests for the ratio catalog file lifecycle.

use tempfile::TempDir;
use yares::{Error, RatioCatalog, SelectorNode, DEFAULT_RATIOS};

#[test]
fn test_load_creates_missing_catalog_with_defaults() {
    let dir = TempDir::new().unwrap();
    let catalog = RatioCatalog::new(dir.path().join("ratios.txt"));
    assert!(!catalog.path().exists());

    let first = catalog.load().unwrap();
    assert!(catalog.path().exists());
    assert_eq!(first.len(), 11);
    assert_eq!(first, DEFAULT_RATIOS.to_vec());

    let second = catalog.load().unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_catalog_file_format() {
    let dir = TempDir::new().unwrap();
    let catalog = RatioCatalog::new(dir.path().join("ratios.txt"));
    catalog.initialize().unwrap();

    let content = std::fs::read_to_string(catalog.path()).unwrap();
    assert_eq!(content, format!("{}\n", DEFAULT_RATIOS.join("\n")));
}

#[test]
fn test_edited_catalog_is_used_by_selector_schema() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("ratios.txt");
    let catalog = RatioCatalog::new(path.clone());
    catalog.initialize().unwrap();

    std::fs::write(&path, "cinema (239:100)\n\nsquare (1:1)\n").unwrap();

    let node = SelectorNode::new(catalog);
    let schema = node.schema().unwrap();
    let value = serde_json::to_value(&schema).unwrap();
    assert_eq!(
        value["input_spec"][1]["options"],
        serde_json::json!(["cinema (239:100)", "square (1:1)"])
    );

    let r = node.calculate(2048, "cinema (239:100)", false).unwrap();
    assert_eq!((r.width, r.height), (2048, 856));
}

#[test]
fn test_unwritable_location_is_io_error() {
    let dir = TempDir::new().unwrap();
    let blocker = dir.path().join("not-a-dir");
    std::fs::write(&blocker, "file").unwrap();

    let catalog = RatioCatalog::new(blocker.join("ratios.txt"));
    assert!(matches!(catalog.load(), Err(Error::Io { .. })));
}

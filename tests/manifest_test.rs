use std::fs;

use tempfile::TempDir;
use zero::error::Error;
use zero::manifest::patch_name;

#[test]
fn test_patch_name_preserves_other_fields() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("package.json");
    fs::write(
        &path,
        r#"{"name":"{{name}}","version":"1.0.0","scripts":{"dev":"node --watch src/server.js"}}"#,
    )
    .unwrap();

    assert!(patch_name(&path, "my-app").unwrap());

    let expected = r#"{
  "name": "my-app",
  "version": "1.0.0",
  "scripts": {
    "dev": "node --watch src/server.js"
  }
}
"#;
    assert_eq!(fs::read_to_string(&path).unwrap(), expected);
}

#[test]
fn test_patch_name_adds_missing_field() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("package.json");
    fs::write(&path, r#"{"version": "1.0.0"}"#).unwrap();

    patch_name(&path, "my-app").unwrap();

    let content = fs::read_to_string(&path).unwrap();
    let manifest: serde_json::Value = serde_json::from_str(&content).unwrap();
    assert_eq!(manifest["name"], "my-app");
    assert_eq!(manifest["version"], "1.0.0");
}

#[test]
fn test_missing_manifest_is_not_an_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("package.json");

    assert!(!patch_name(&path, "my-app").unwrap());
    assert!(!path.exists());
}

#[test]
fn test_invalid_manifest() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("package.json");

    fs::write(&path, "{ not json").unwrap();
    let result = patch_name(&path, "my-app");
    assert!(matches!(result, Err(Error::ManifestError { .. })));

    fs::write(&path, "[1, 2]").unwrap();
    let result = patch_name(&path, "my-app");
    assert!(matches!(result, Err(Error::ManifestError { .. })));
}

//! Custom assertions y fixtures para tests.

use std::fs;
use std::path::Path;

use serde_json::Value;
use tempfile::TempDir;

/// Crea un directorio de recursos temporal con los archivos indicados.
pub fn resource_root(files: &[(&str, &str)]) -> TempDir {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    for (name, contents) in files {
        let path = dir.path().join(name);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create resource dir");
        }
        fs::write(path, contents).expect("Failed to write resource");
    }
    dir
}

/// Verifica que la salida sea un objeto JSON plano de strings.
pub fn assert_flat_string_object(text: &str) -> Value {
    let json: Value = serde_json::from_str(text).expect("Output is not valid JSON");
    let obj = json.as_object().expect("Output should be a JSON object");

    for (key, value) in obj {
        assert!(value.is_string(), "Value for '{}' should be a string", key);
    }

    json
}

/// Verifica que un path no exista (para escenarios de recurso faltante).
pub fn assert_absent(root: &Path, name: &str) {
    assert!(
        !root.join(name).exists(),
        "Fixture '{}' should not exist",
        name
    );
}

#![allow(dead_code)]
use std::fs;
use std::path::Path;

use propkit_core::{DirectoryResources, PropertyMap};
use tempfile::TempDir;

/// Helper to create a PropertyMap from `(key, value)` pairs.
pub fn map_of(entries: &[(&str, &str)]) -> PropertyMap {
    entries.iter().copied().collect()
}

/// Writes `files` (logical name, contents) under a fresh temporary root.
///
/// Keep the returned `TempDir` alive for as long as the source is used.
pub fn resource_root(files: &[(&str, &str)]) -> (TempDir, DirectoryResources) {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    for (name, contents) in files {
        write_resource(dir.path(), name, contents.as_bytes());
    }
    let source = DirectoryResources::new(dir.path());
    (dir, source)
}

pub fn write_resource(root: &Path, name: &str, contents: &[u8]) {
    let path = root.join(name);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("Failed to create resource dir");
    }
    fs::write(path, contents).expect("Failed to write resource");
}

/// A configuration file exercising most of the syntax.
pub const COMPLEX_PROPERTIES: &str = r#"# Application settings
! legacy comment style
app.name = Demo Service
app.description = Serves the \
                  demo traffic
server.port:8080
server.host       localhost
database.url=jdbc:postgres://db:5432/app
message.welcome=Bienvenido, se\u00f1or
path.windows=C:\\Program Files\\Demo
empty.value=
flag.only
app.name = Demo Service v2
"#;

use std::fs::File;
use std::io::{self, BufReader, Read};
use std::path::PathBuf;

use tracing::debug;

use super::{ResourceName, ResourceSource};
use crate::error::{PropkitError, Result};

/// Resources installed as files under a root directory.
#[derive(Debug, Clone)]
pub struct DirectoryResources {
    root: PathBuf,
}

impl DirectoryResources {
    /// Creates a resource set rooted at `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl ResourceSource for DirectoryResources {
    fn location(&self) -> String {
        format!("directory '{}'", self.root.display())
    }

    fn open(&self, name: &ResourceName) -> Result<Box<dyn Read + '_>> {
        let path = name.to_path(&self.root);
        debug!(resource = %name, path = ?path, "Resolving resource on disk");

        if path.is_dir() {
            return Err(PropkitError::resource_not_found(
                name.as_str(),
                self.location(),
            ));
        }

        match File::open(&path) {
            Ok(file) => Ok(Box::new(BufReader::new(file))),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Err(
                PropkitError::resource_not_found(name.as_str(), self.location()),
            ),
            Err(e) => Err(e.into()),
        }
    }
}

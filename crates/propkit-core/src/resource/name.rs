//! Logical resource names.

use std::fmt;
use std::path::{Path, PathBuf};

use crate::error::{PropkitError, Result};

/// A validated logical resource name such as `config/application.properties`.
///
/// Names are relative and `/`-separated. Empty, `.` and `..` segments are
/// rejected, as are absolute names and backslashes, so a name can never
/// escape the resource root it is resolved against.
///
/// # Example
///
/// ```
/// use propkit_core::ResourceName;
///
/// let name = ResourceName::parse("config/application.properties").unwrap();
/// assert_eq!(name.as_str(), "config/application.properties");
/// assert!(ResourceName::parse("../secrets.properties").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ResourceName(String);

impl ResourceName {
    /// Validates `name` and wraps it.
    pub fn parse(name: impl Into<String>) -> Result<Self> {
        let name = name.into();

        if name.is_empty() {
            return Err(PropkitError::invalid_resource_name(
                name,
                "resource name cannot be empty",
            ));
        }
        if name.starts_with('/') {
            return Err(PropkitError::invalid_resource_name(
                name,
                "resource names are relative to the resource root",
            ));
        }
        if name.contains('\\') {
            return Err(PropkitError::invalid_resource_name(
                name,
                "use '/' as the separator",
            ));
        }
        if let Some(segment) = name
            .split('/')
            .find(|s| s.is_empty() || *s == "." || *s == "..")
        {
            let reason = format!("invalid path segment '{}'", segment);
            return Err(PropkitError::invalid_resource_name(name, reason));
        }

        Ok(Self(name))
    }

    /// Returns the name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Resolves the name to a filesystem path below `root`.
    pub fn to_path(&self, root: &Path) -> PathBuf {
        self.0
            .split('/')
            .fold(root.to_path_buf(), |path, segment| path.join(segment))
    }
}

impl fmt::Display for ResourceName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for ResourceName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

use std::io::Read;

use tracing::debug;

use super::{ResourceName, ResourceSource};
use crate::error::{PropkitError, Result};

/// Resources compiled into the program.
///
/// # Example
///
/// ```
/// use propkit_core::EmbeddedResources;
///
/// static BUNDLED: EmbeddedResources =
///     EmbeddedResources::new(&[("config/application.properties", "a=1\n")]);
///
/// assert!(BUNDLED.contains("config/application.properties"));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct EmbeddedResources {
    entries: &'static [(&'static str, &'static str)],
}

impl EmbeddedResources {
    /// Creates a resource set from `(logical name, contents)` pairs.
    pub const fn new(entries: &'static [(&'static str, &'static str)]) -> Self {
        Self { entries }
    }

    /// Returns true if a resource with this exact name is embedded.
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Returns the embedded names in declaration order.
    pub fn names(&self) -> impl Iterator<Item = &'static str> {
        self.entries.iter().map(|(name, _)| *name)
    }

    fn get(&self, name: &str) -> Option<&'static str> {
        self.entries
            .iter()
            .find(|(entry, _)| *entry == name)
            .map(|(_, contents)| *contents)
    }
}

impl ResourceSource for EmbeddedResources {
    fn location(&self) -> String {
        "embedded resources".to_string()
    }

    fn open(&self, name: &ResourceName) -> Result<Box<dyn Read + '_>> {
        let contents = self
            .get(name.as_str())
            .ok_or_else(|| PropkitError::resource_not_found(name.as_str(), self.location()))?;

        debug!(resource = %name, bytes = contents.len(), "Opened embedded resource");
        Ok(Box::new(contents.as_bytes()))
    }
}

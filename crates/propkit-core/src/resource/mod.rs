//! Bundled resource resolution.
//!
//! A [`ResourceSource`] is handed explicitly to the loader instead of being
//! looked up from process-global state. Two implementations are provided:
//!
//! - [`EmbeddedResources`]: contents compiled into the binary with
//!   `include_str!`
//! - [`DirectoryResources`]: files installed under a resource root directory

mod directory;
mod embedded;
mod name;

use std::io::Read;

use crate::error::Result;

pub use directory::DirectoryResources;
pub use embedded::EmbeddedResources;
pub use name::ResourceName;

/// A set of resources addressable by logical name.
pub trait ResourceSource: Send + Sync {
    /// Describes where resources come from, for diagnostics.
    fn location(&self) -> String;

    /// Opens the named resource for reading.
    ///
    /// Returns `ResourceNotFound` when the set has no such resource. The
    /// returned reader releases its handle when dropped.
    fn open(&self, name: &ResourceName) -> Result<Box<dyn Read + '_>>;
}

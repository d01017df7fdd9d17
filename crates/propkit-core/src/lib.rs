//! propkit core - properties parsing and bundled resource lookup
//!
//! This crate loads a Java-style `.properties` resource by logical name from
//! an explicit [`ResourceSource`], parses it into a flat [`PropertyMap`] and
//! answers single-key lookups.

pub mod config;
pub mod error;
pub mod format;
pub mod lookup;
pub mod resource;

pub use config::PropertyMap;
pub use error::{PropkitError, Result};
pub use format::{ConfigFormat, FormatParser, FormatSerializer};
pub use lookup::{
    DEFAULT_KEY, DEFAULT_RESOURCE, LookupRequest, LookupRequestBuilder, get_value, get_value_or,
    load_properties, load_resource,
};
pub use resource::{DirectoryResources, EmbeddedResources, ResourceName, ResourceSource};

/// Returns the crate version.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

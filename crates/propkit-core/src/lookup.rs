//! Loading a bundled properties resource and looking up keys.
//!
//! ```
//! use propkit_core::{EmbeddedResources, get_value, load_properties};
//!
//! static BUNDLED: EmbeddedResources =
//!     EmbeddedResources::new(&[("config/application.properties", "a=1\nb=2\n")]);
//!
//! let map = load_properties(&BUNDLED, "config/application.properties").unwrap();
//! assert_eq!(get_value(&map, "a"), Some("1"));
//! assert_eq!(get_value(&map, "z"), None);
//! ```

use std::borrow::Cow;
use std::io::Read;

use tracing::debug;

use crate::config::PropertyMap;
use crate::error::Result;
use crate::format::FormatParser;
use crate::format::properties::PropertiesFormat;
use crate::resource::{ResourceName, ResourceSource};

/// Logical name of the configuration resource shipped with the program.
pub const DEFAULT_RESOURCE: &str = "config/application.properties";

/// Key printed when no other key is requested.
pub const DEFAULT_KEY: &str = "a";

/// Loads and parses the named properties resource from `source`.
///
/// The resource reader is dropped before parsing starts, so the handle is
/// released on every path, including read failures.
pub fn load_properties<S>(source: &S, resource_name: &str) -> Result<PropertyMap>
where
    S: ResourceSource + ?Sized,
{
    let name = ResourceName::parse(resource_name)?;
    load_resource(source, &name)
}

/// Same as [`load_properties`] for an already validated name.
pub fn load_resource<S>(source: &S, name: &ResourceName) -> Result<PropertyMap>
where
    S: ResourceSource + ?Sized,
{
    debug!(resource = %name, location = %source.location(), "Loading properties");

    let bytes = {
        let mut reader = source.open(name)?;
        let mut buf = Vec::new();
        reader.read_to_end(&mut buf)?;
        buf
    };

    let text = decode(&bytes);
    let map = PropertiesFormat
        .parse(&text)
        .map_err(|e| e.with_source_name(name.as_str()))?;

    debug!(resource = %name, entries = map.len(), "Loaded properties");
    Ok(map)
}

/// Looks up `key`. Absence is a normal outcome, not an error.
pub fn get_value<'a>(map: &'a PropertyMap, key: &str) -> Option<&'a str> {
    map.get(key)
}

/// Looks up `key`, falling back to `default` when it is absent.
pub fn get_value_or<'a>(map: &'a PropertyMap, key: &str, default: &'a str) -> &'a str {
    map.get(key).unwrap_or(default)
}

/// Decodes resource bytes as UTF-8, or as ISO-8859-1 when they are not
/// valid UTF-8. A leading byte order mark is dropped.
///
/// This differs from Java's `Properties.load(InputStream)`, which always
/// reads ISO-8859-1: non-ASCII UTF-8 text decodes to the intended characters
/// here, where Java would produce one character per byte. The fallback
/// matches `PropertyResourceBundle` instead.
fn decode(bytes: &[u8]) -> Cow<'_, str> {
    match std::str::from_utf8(bytes) {
        Ok(text) => Cow::Borrowed(text.strip_prefix('\u{feff}').unwrap_or(text)),
        Err(_) => {
            debug!("Resource is not valid UTF-8, decoding as ISO-8859-1");
            Cow::Owned(bytes.iter().map(|&b| char::from(b)).collect())
        },
    }
}

/// A single key lookup against one resource.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupRequest {
    resource: ResourceName,
    key: String,
    default: Option<String>,
}

impl LookupRequest {
    /// Creates a new builder for LookupRequest.
    pub fn builder() -> LookupRequestBuilder {
        LookupRequestBuilder::default()
    }

    /// Returns the resource to load.
    pub fn resource(&self) -> &ResourceName {
        &self.resource
    }

    /// Returns the key to look up.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Returns the fallback value for an absent key.
    pub fn default_value(&self) -> Option<&str> {
        self.default.as_deref()
    }

    /// Loads the resource and resolves the key.
    ///
    /// `Ok(None)` means the key is absent and no default was given.
    pub fn execute<S>(&self, source: &S) -> Result<Option<String>>
    where
        S: ResourceSource + ?Sized,
    {
        let map = load_resource(source, &self.resource)?;
        let value = match self.default.as_deref() {
            Some(default) => Some(get_value_or(&map, &self.key, default)),
            None => get_value(&map, &self.key),
        };

        if value.is_none() {
            debug!(key = %self.key, resource = %self.resource, "Key not present");
        }

        Ok(value.map(str::to_string))
    }
}

/// Builder for LookupRequest.
#[derive(Debug, Default)]
pub struct LookupRequestBuilder {
    resource: Option<String>,
    key: Option<String>,
    default: Option<String>,
}

impl LookupRequestBuilder {
    /// Sets the logical resource name.
    pub fn resource(mut self, name: impl Into<String>) -> Self {
        self.resource = Some(name.into());
        self
    }

    /// Sets the key to look up.
    pub fn key(mut self, key: impl Into<String>) -> Self {
        self.key = Some(key.into());
        self
    }

    /// Sets a fallback value for an absent key.
    pub fn default_value(mut self, value: impl Into<String>) -> Self {
        self.default = Some(value.into());
        self
    }

    /// Builds the request, validating the resource name.
    pub fn build(self) -> Result<LookupRequest> {
        let resource = ResourceName::parse(
            self.resource
                .unwrap_or_else(|| DEFAULT_RESOURCE.to_string()),
        )?;

        Ok(LookupRequest {
            resource,
            key: self.key.unwrap_or_else(|| DEFAULT_KEY.to_string()),
            default: self.default,
        })
    }
}

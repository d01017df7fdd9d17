//! Resources compiled into the binary.

use propkit_core::{DEFAULT_RESOURCE, EmbeddedResources};

/// The resource set shipped with propkit.
pub static BUNDLED: EmbeddedResources = EmbeddedResources::new(&[(
    DEFAULT_RESOURCE,
    include_str!("../resources/config/application.properties"),
)]);

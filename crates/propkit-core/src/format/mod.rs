use crate::config::PropertyMap;
use crate::error::Result;

pub mod json;
pub mod properties;

/// Supported text formats for property maps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConfigFormat {
    #[default]
    Properties,
    Json,
}

impl ConfigFormat {
    /// Returns the parser for this format.
    pub fn parser(&self) -> &'static dyn FormatParser {
        match self {
            ConfigFormat::Properties => &properties::PropertiesFormat,
            ConfigFormat::Json => &json::JsonFormat,
        }
    }

    /// Returns the serializer for this format.
    pub fn serializer(&self) -> &'static dyn FormatSerializer {
        match self {
            ConfigFormat::Properties => &properties::PropertiesFormat,
            ConfigFormat::Json => &json::JsonFormat,
        }
    }
}

/// A trait for parsing a property map from a string.
pub trait FormatParser: Send + Sync {
    /// Parses the input string into a PropertyMap.
    fn parse(&self, input: &str) -> Result<PropertyMap>;
}

/// A trait for serializing a property map to a string.
pub trait FormatSerializer: Send + Sync {
    /// Serializes the PropertyMap into a string.
    fn serialize(&self, map: &PropertyMap) -> Result<String>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parser_and_serializer_agree() {
        let map: PropertyMap = [("a", "1"), ("b", "two words")].into_iter().collect();

        for format in [ConfigFormat::Properties, ConfigFormat::Json] {
            let text = format.serializer().serialize(&map).unwrap();
            assert_eq!(format.parser().parse(&text).unwrap(), map, "{format:?}");
        }
    }
}

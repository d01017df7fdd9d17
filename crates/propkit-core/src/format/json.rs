use crate::config::PropertyMap;
use crate::error::Result;
use crate::format::{FormatParser, FormatSerializer};

/// Flat JSON object of string values.
pub struct JsonFormat;

impl FormatParser for JsonFormat {
    fn parse(&self, input: &str) -> Result<PropertyMap> {
        PropertyMap::from_json(input)
    }
}

impl FormatSerializer for JsonFormat {
    fn serialize(&self, map: &PropertyMap) -> Result<String> {
        let mut out = map.to_json()?;
        out.push('\n');
        Ok(out)
    }
}

use crate::sbom_verification::domain::{Component, Digest, SbomDocument};
use crate::shared::error::SbomError;
use serde::Deserialize;
use std::path::Path;

#[derive(Debug, Deserialize)]
struct RawSbom {
    #[serde(default)]
    components: Option<Vec<RawComponent>>,
}

#[derive(Debug, Deserialize)]
struct RawComponent {
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    version: Option<String>,
    #[serde(default)]
    hashes: Option<Vec<RawHash>>,
}

#[derive(Debug, Deserialize)]
struct RawHash {
    #[serde(default)]
    alg: Option<String>,
    #[serde(default)]
    content: Option<String>,
}

/// SbomParser service turning raw SBOM bytes into an `SbomDocument`
///
/// Only the `components[].{name, version, hashes[].{alg, content}}` subset of
/// CycloneDX JSON is read. Missing or null fields become empty strings or
/// empty lists; every other field is ignored.
pub struct SbomParser;

impl SbomParser {
    /// Parses SBOM document bytes
    ///
    /// # Arguments
    /// * `bytes` - Raw document content
    /// * `source` - Path of the document, used in error messages
    ///
    /// # Errors
    /// Returns `SbomError::MalformedDocument` if the content is not JSON, is not
    /// a JSON object, or a known field has the wrong type
    pub fn parse(bytes: &[u8], source: &Path) -> Result<SbomDocument, SbomError> {
        let malformed = |details: String| SbomError::MalformedDocument {
            path: source.to_path_buf(),
            details,
        };

        let value: serde_json::Value =
            serde_json::from_slice(bytes).map_err(|e| malformed(e.to_string()))?;

        if !value.is_object() {
            return Err(malformed(format!(
                "Top-level value must be an object, found {}",
                json_type_name(&value)
            )));
        }

        let raw: RawSbom = serde_json::from_value(value).map_err(|e| malformed(e.to_string()))?;

        let components = raw
            .components
            .unwrap_or_default()
            .into_iter()
            .map(Self::convert_component)
            .collect();

        Ok(SbomDocument::new(components))
    }

    fn convert_component(raw: RawComponent) -> Component {
        let hashes = raw
            .hashes
            .unwrap_or_default()
            .into_iter()
            .map(|hash| {
                Digest::new(
                    hash.alg.unwrap_or_default(),
                    hash.content.unwrap_or_default(),
                )
            })
            .collect();

        Component::new(
            raw.name.unwrap_or_default(),
            raw.version.unwrap_or_default(),
            hashes,
        )
    }
}

fn json_type_name(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "a boolean",
        serde_json::Value::Number(_) => "a number",
        serde_json::Value::String(_) => "a string",
        serde_json::Value::Array(_) => "an array",
        serde_json::Value::Object(_) => "an object",
    }
}

use super::{Config, Embeddable, Entity, EnumSpec, InterfaceSpec};
use crate::{Error, Result};
use serde::Deserialize;
use std::path::Path;

/// The whole schema document. `entities` and `configuration_variables` are
/// required at the top level; the remaining categories default to empty.
#[derive(Debug, Clone, Deserialize)]
pub struct Document {
    pub entities: Vec<Entity>,

    #[serde(rename = "configuration_variables")]
    pub config: Config,

    #[serde(default)]
    pub interface_classes: Vec<InterfaceSpec>,

    #[serde(default)]
    pub embeddable_classes: Vec<Embeddable>,

    #[serde(default)]
    pub enum_classes: Vec<EnumSpec>,
}

const REQUIRED_KEYS: [&str; 2] = ["entities", "configuration_variables"];

impl Document {
    /// Loads and parses a schema document. Any failure here is fatal for the
    /// run; compilation never starts on a partial document.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        let contents = std::fs::read_to_string(path).map_err(|source| Error::Read {
            path: path.to_path_buf(),
            source,
        })?;

        Self::parse(&contents, path)
    }

    /// Parses document text. Split from [`Document::load`] so the error
    /// taxonomy (unreadable file / invalid JSON / missing key / wrong shape)
    /// stays observable without touching the filesystem.
    pub fn parse(contents: &str, path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        let value: serde_json::Value =
            serde_json::from_str(contents).map_err(|source| Error::InvalidJson {
                path: path.to_path_buf(),
                source,
            })?;

        for key in REQUIRED_KEYS {
            if value.get(key).is_none() {
                return Err(Error::MissingKey {
                    path: path.to_path_buf(),
                    key,
                });
            }
        }

        serde_json::from_value(value).map_err(|source| Error::InvalidDocument {
            path: path.to_path_buf(),
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_distinguishes_syntax_and_shape_failures() {
        assert!(matches!(
            Document::parse("not json", "data.json"),
            Err(Error::InvalidJson { .. })
        ));
        assert!(matches!(
            Document::parse(r#"{"entities": []}"#, "data.json"),
            Err(Error::MissingKey { key: "configuration_variables", .. })
        ));
        assert!(matches!(
            Document::parse(r#"{"configuration_variables": {}}"#, "data.json"),
            Err(Error::MissingKey { key: "entities", .. })
        ));
        assert!(matches!(
            Document::parse(
                r#"{"entities": "oops", "configuration_variables": {}}"#,
                "data.json"
            ),
            Err(Error::InvalidDocument { .. })
        ));
    }

    #[test]
    fn optional_categories_default_to_empty() {
        let doc = Document::parse(
            r#"{"entities": [], "configuration_variables": {}}"#,
            "data.json",
        )
        .unwrap();

        assert!(doc.interface_classes.is_empty());
        assert!(doc.embeddable_classes.is_empty());
        assert!(doc.enum_classes.is_empty());
    }

    #[test]
    fn load_reports_a_missing_file() {
        let err = Document::load("/nonexistent/data.json").unwrap_err();
        assert!(matches!(err, Error::Read { .. }));
    }
}

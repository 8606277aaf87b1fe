use std::path::PathBuf;

/// An error that can occur while loading a schema document or compiling an
/// entity from it.
///
/// The load variants are fatal for the whole run; the per-entity variants are
/// reported and only skip the entity they name.
#[derive(Debug)]
pub enum Error {
    /// The schema document could not be read from disk.
    Read { path: PathBuf, source: std::io::Error },

    /// The schema document is not valid JSON.
    InvalidJson { path: PathBuf, source: serde_json::Error },

    /// The schema document is missing one of its required top-level keys.
    MissingKey { path: PathBuf, key: &'static str },

    /// The schema document parsed as JSON but does not match the expected
    /// shape (e.g. a string where a list was expected).
    InvalidDocument { path: PathBuf, source: serde_json::Error },

    /// An entity is missing a required property (`entity_name` or a non-empty
    /// `fields` list).
    EntityValidation { entity: String, missing: &'static str },

    /// An entity names a parent that does not exist in the batch.
    ParentNotFound { entity: String, parent: String },
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Read { source, .. } => Some(source),
            Error::InvalidJson { source, .. } | Error::InvalidDocument { source, .. } => {
                Some(source)
            }
            _ => None,
        }
    }
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        match self {
            Error::Read { path, source } => {
                write!(f, "cannot read schema document {}: {}", path.display(), source)
            }
            Error::InvalidJson { path, source } => {
                write!(f, "{} does not contain valid JSON: {}", path.display(), source)
            }
            Error::MissingKey { path, key } => {
                write!(f, "{} is missing the required key `{}`", path.display(), key)
            }
            Error::InvalidDocument { path, source } => {
                write!(f, "{} is not a valid schema document: {}", path.display(), source)
            }
            Error::EntityValidation { entity, missing } => {
                if entity.is_empty() {
                    write!(f, "entity is missing required property `{missing}`")
                } else {
                    write!(f, "entity '{entity}' is missing required property `{missing}`")
                }
            }
            Error::ParentNotFound { entity, parent } => {
                write!(f, "parent entity '{parent}' not found for entity '{entity}'")
            }
        }
    }
}

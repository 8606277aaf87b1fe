use super::Field;
use serde::Deserialize;

/// A value object flattened into its owning entity's table. No inheritance,
/// no identifier heuristics; declared annotations are emitted as-is.
#[derive(Debug, Clone, Deserialize)]
pub struct Embeddable {
    #[serde(rename = "embeddable_name")]
    pub name: String,

    #[serde(default)]
    pub fields: Vec<Field>,
}

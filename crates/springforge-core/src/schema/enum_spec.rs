use serde::Deserialize;

/// A declared enumeration. Each value is either a bare constant name or a
/// `NAME(literal)` pair.
#[derive(Debug, Clone, Deserialize)]
pub struct EnumSpec {
    #[serde(rename = "enum_name")]
    pub name: String,

    #[serde(rename = "enum_values", default)]
    pub values: Vec<String>,
}

impl EnumSpec {
    /// The first value with no parenthesized literal, if any. When
    /// parenthesized constants exist, this doubles as the declared name of
    /// the backing field and is excluded from the constant list.
    pub fn bare_value(&self) -> Option<&str> {
        self.values
            .iter()
            .map(String::as_str)
            .find(|value| !is_parenthesized(value))
    }

    /// True when at least one value carries a parenthesized literal.
    pub fn has_literals(&self) -> bool {
        self.values.iter().any(|value| is_parenthesized(value))
    }
}

fn is_parenthesized(value: &str) -> bool {
    value.contains('(') && value.contains(')')
}

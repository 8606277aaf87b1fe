use super::Annotation;
use crate::{Error, Result};
use serde::Deserialize;

/// A schema-declared record mapped to a generated persistence-aware class.
#[derive(Debug, Clone, Deserialize)]
pub struct Entity {
    /// Name of the entity. Required; validated in [`Entity::validate`] rather
    /// than at the serde layer so a missing name fails this entity only.
    #[serde(rename = "entity_name", default)]
    pub name: String,

    /// Fields in declaration order. Required and non-empty.
    #[serde(default)]
    pub fields: Vec<Field>,

    /// True when the entity is an abstract inheritance root.
    #[serde(rename = "entity_is_parent", default)]
    pub is_parent: bool,

    /// Names the parent entity when this entity is a child.
    #[serde(rename = "entity_parent_name", default)]
    pub parent_name: Option<String>,

    /// Table-mapping shape; meaningful only on an inheritance root.
    #[serde(rename = "entity_inheritance_strategy", default)]
    pub inheritance_strategy: Option<InheritanceStrategy>,

    /// Discriminator literal; used only by a child under SINGLE_TABLE.
    #[serde(rename = "discriminator_value", default)]
    pub discriminator_value: Option<String>,

    /// Class-level annotation tokens, emitted above the class header.
    #[serde(rename = "entity_supplementary_annotations", default)]
    pub supplementary_annotations: Vec<Annotation>,

    /// Interface names joined into the `implements` clause.
    #[serde(rename = "interfaces_implemented", default)]
    pub interfaces: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Field {
    #[serde(rename = "field_name", default)]
    pub name: String,

    /// Declared Java type. Empty triggers the field synthesizer.
    #[serde(rename = "field_type", default)]
    pub ty: String,

    #[serde(rename = "field_annotations", default)]
    pub annotations: Vec<Annotation>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum InheritanceStrategy {
    #[serde(rename = "SINGLE_TABLE")]
    SingleTable,
    #[serde(rename = "JOINED")]
    Joined,
    #[serde(rename = "TABLE_PER_CLASS")]
    TablePerClass,
    #[serde(rename = "MAPPED_SUPERCLASS", alias = "MAPPED_SUPER_CLASS")]
    MappedSuperclass,
}

impl InheritanceStrategy {
    /// The canonical spelling used in `@Inheritance(strategy = ...)`.
    pub fn as_str(&self) -> &'static str {
        match self {
            InheritanceStrategy::SingleTable => "SINGLE_TABLE",
            InheritanceStrategy::Joined => "JOINED",
            InheritanceStrategy::TablePerClass => "TABLE_PER_CLASS",
            InheritanceStrategy::MappedSuperclass => "MAPPED_SUPERCLASS",
        }
    }
}

impl Entity {
    /// Checks the required properties. A failure skips this entity; the rest
    /// of the batch still compiles.
    pub fn validate(&self) -> Result<()> {
        if self.name.is_empty() {
            return Err(Error::EntityValidation {
                entity: self.name.clone(),
                missing: "entity_name",
            });
        }
        if self.fields.is_empty() {
            return Err(Error::EntityValidation {
                entity: self.name.clone(),
                missing: "fields",
            });
        }
        Ok(())
    }

    /// Looks up this entity's declared parent in the batch.
    pub fn parent<'a>(&self, entities: &'a [Entity]) -> Result<&'a Entity> {
        let parent_name = self.parent_name.as_deref().unwrap_or_default();

        entities
            .iter()
            .find(|other| other.name == parent_name)
            .ok_or_else(|| Error::ParentNotFound {
                entity: self.name.clone(),
                parent: parent_name.to_string(),
            })
    }

    /// The generated class name: entity name plus the configured suffix.
    pub fn class_name(&self, suffix: &str) -> String {
        format!("{}{}", self.name, suffix)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entity(name: &str) -> Entity {
        serde_json::from_str(&format!(
            r#"{{"entity_name": "{name}", "fields": [{{"field_name": "id"}}]}}"#
        ))
        .unwrap()
    }

    #[test]
    fn validate_requires_name_and_fields() {
        let missing_name: Entity = serde_json::from_str(r#"{"fields": [{}]}"#).unwrap();
        assert!(matches!(
            missing_name.validate(),
            Err(Error::EntityValidation { missing: "entity_name", .. })
        ));

        let missing_fields: Entity =
            serde_json::from_str(r#"{"entity_name": "User"}"#).unwrap();
        assert!(matches!(
            missing_fields.validate(),
            Err(Error::EntityValidation { missing: "fields", .. })
        ));

        assert!(entity("User").validate().is_ok());
    }

    #[test]
    fn parent_lookup_fails_with_a_named_error() {
        let mut child = entity("Car");
        child.parent_name = Some("Vehicle".to_string());

        let err = child.parent(&[entity("User")]).unwrap_err();
        assert_eq!(
            err.to_string(),
            "parent entity 'Vehicle' not found for entity 'Car'"
        );
    }

    #[test]
    fn inheritance_strategy_accepts_the_alternate_spelling() {
        let strategy: InheritanceStrategy =
            serde_json::from_str(r#""MAPPED_SUPER_CLASS""#).unwrap();
        assert_eq!(strategy, InheritanceStrategy::MappedSuperclass);
    }
}

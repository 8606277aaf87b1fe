use springforge_core::schema::{Entity, Lombok};
use std::collections::HashSet;

/// The set of boilerplate capabilities an entity already declares through
/// Lombok markers, at class level or on any field. A declared capability
/// suppresses the matching synthesized block.
#[derive(Debug, Clone)]
pub(crate) struct Capabilities {
    markers: HashSet<Lombok>,
}

/// Scans the entity's supplementary tokens and every field's tokens.
/// Unrecognized tokens never contribute a capability.
pub(crate) fn declared(entity: &Entity) -> Capabilities {
    let class_level = entity.supplementary_annotations.iter();
    let field_level = entity.fields.iter().flat_map(|field| field.annotations.iter());

    Capabilities {
        markers: class_level
            .chain(field_level)
            .filter_map(|annotation| annotation.as_lombok())
            .collect(),
    }
}

impl Capabilities {
    /// True when no marker was declared; gates the `import lombok.*;` line.
    pub(crate) fn is_empty(&self) -> bool {
        self.markers.is_empty()
    }

    pub(crate) fn covers_constructors(&self) -> bool {
        self.any(&[
            Lombok::NoArgsConstructor,
            Lombok::RequiredArgsConstructor,
            Lombok::AllArgsConstructor,
        ])
    }

    pub(crate) fn covers_accessors(&self) -> bool {
        self.any(&[Lombok::Getter, Lombok::Setter, Lombok::Data, Lombok::Value])
    }

    pub(crate) fn covers_standard_methods(&self) -> bool {
        self.any(&[
            Lombok::EqualsAndHashCode,
            Lombok::ToString,
            Lombok::Data,
            Lombok::Value,
        ])
    }

    fn any(&self, markers: &[Lombok]) -> bool {
        markers.iter().any(|marker| self.markers.contains(marker))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entity(json: &str) -> Entity {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn class_and_field_markers_both_count() {
        let caps = declared(&entity(
            r#"{
                "entity_name": "User",
                "entity_supplementary_annotations": ["@NoArgsConstructor"],
                "fields": [{"field_name": "id", "field_annotations": ["@Getter"]}]
            }"#,
        ));

        assert!(caps.covers_constructors());
        assert!(caps.covers_accessors());
        assert!(!caps.covers_standard_methods());
        assert!(!caps.is_empty());
    }

    #[test]
    fn data_covers_accessors_and_standard_methods() {
        let caps = declared(&entity(
            r#"{
                "entity_name": "User",
                "entity_supplementary_annotations": ["@Data"],
                "fields": [{"field_name": "id"}]
            }"#,
        ));

        assert!(caps.covers_accessors());
        assert!(caps.covers_standard_methods());
        assert!(!caps.covers_constructors());
    }

    #[test]
    fn unrecognized_tokens_are_ignored() {
        let caps = declared(&entity(
            r#"{
                "entity_name": "User",
                "entity_supplementary_annotations": ["@Audited"],
                "fields": [{"field_name": "id"}]
            }"#,
        ));

        assert!(caps.is_empty());
    }
}

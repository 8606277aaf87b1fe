use springforge_core::schema::{Annotation, Config, Field};
use std::borrow::Cow;

/// A field after defaulting: the type and annotation set the rest of the
/// compiler actually uses. Declared values pass through untouched.
#[derive(Debug)]
pub(crate) struct EffectiveField<'a> {
    pub(crate) name: &'a str,
    pub(crate) ty: Cow<'a, str>,
    pub(crate) annotations: Cow<'a, [Annotation]>,
}

/// Applies the defaulting heuristics to one field. Runs once per field,
/// before annotation resolution.
pub(crate) fn effective<'a>(
    field: &'a Field,
    entity_name: &str,
    config: &Config,
) -> EffectiveField<'a> {
    let mut ty = Cow::Borrowed(field.ty.as_str());
    let mut annotations = Cow::Borrowed(field.annotations.as_slice());

    // Identifier heuristic: a type-less field named like the surrogate key
    // becomes the primary key. A declared type always wins over the
    // heuristic.
    if ty.is_empty() && is_identifier(&field.name, entity_name) {
        ty = Cow::Borrowed("Long");

        if annotations.is_empty() {
            annotations = Cow::Owned(vec![
                Annotation::from("@Id".to_string()),
                Annotation::from(format!(
                    "@GeneratedValue(strategy = GenerationType.{})",
                    config.id_generated_value
                )),
            ]);
        }
    }

    // Generic fallback for fields that declared neither type nor annotations.
    if ty.is_empty() && annotations.is_empty() {
        ty = Cow::Borrowed("String");
        annotations = Cow::Owned(vec![Annotation::from(format!(
            "@Column(name = \"{}\")",
            field.name
        ))]);
    }

    EffectiveField {
        name: &field.name,
        ty,
        annotations,
    }
}

/// `id`, or any casing of `<entity>id` / `<entity>_id`.
fn is_identifier(field_name: &str, entity_name: &str) -> bool {
    if field_name == "id" {
        return true;
    }

    let lower = field_name.to_lowercase();
    let entity_lower = entity_name.to_lowercase();

    lower == format!("{entity_lower}id") || lower == format!("{entity_lower}_id")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn field(json: &str) -> Field {
        serde_json::from_str(json).unwrap()
    }

    fn config() -> Config {
        Config::default()
    }

    #[test]
    fn identifier_heuristic_matches_every_casing() {
        for name in ["id", "userId", "userID", "useriD", "USERID", "user_id", "User_ID"] {
            let field = field(&format!(r#"{{"field_name": "{name}"}}"#));
            let effective = effective(&field, "User", &config());

            assert_eq!(effective.ty, "Long", "field name: {name}");
            assert_eq!(
                effective.annotations.as_ref(),
                &[
                    Annotation::Custom("@Id".to_string()),
                    Annotation::Custom(
                        "@GeneratedValue(strategy = GenerationType.IDENTITY)".to_string()
                    ),
                ]
            );
        }
    }

    #[test]
    fn identifier_heuristic_respects_declared_annotations() {
        let field = field(r#"{"field_name": "id", "field_annotations": ["@Id"]}"#);
        let effective = effective(&field, "User", &config());

        assert_eq!(effective.ty, "Long");
        assert_eq!(
            effective.annotations.as_ref(),
            &[Annotation::Custom("@Id".to_string())]
        );
    }

    #[test]
    fn declared_type_disables_the_heuristic() {
        let field = field(r#"{"field_name": "id", "field_type": "UUID"}"#);
        let effective = effective(&field, "User", &config());

        assert_eq!(effective.ty, "UUID");
        assert!(effective.annotations.is_empty());
    }

    #[test]
    fn bare_fields_fall_back_to_a_named_column() {
        let field = field(r#"{"field_name": "nickname"}"#);
        let effective = effective(&field, "User", &config());

        assert_eq!(effective.ty, "String");
        assert_eq!(
            effective.annotations.as_ref(),
            &[Annotation::Custom("@Column(name = \"nickname\")".to_string())]
        );
    }

    #[test]
    fn the_configured_strategy_parameterizes_generated_value() {
        let mut config = config();
        config.id_generated_value = "SEQUENCE".to_string();

        let field = field(r#"{"field_name": "id"}"#);
        let effective = effective(&field, "User", &config);

        assert_eq!(
            effective.annotations[1],
            Annotation::Custom(
                "@GeneratedValue(strategy = GenerationType.SEQUENCE)".to_string()
            )
        );
    }
}

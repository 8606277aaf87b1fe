use springforge_core::schema::{Config, Embeddable};

/// Compiles one embeddable value object. Fields keep their declared type and
/// tokens; none of the entity-side heuristics apply here.
pub(crate) fn embeddable_class(embeddable: &Embeddable, config: &Config) -> String {
    let mut dst = String::new();

    if !config.model_classes_package.is_empty() {
        dst.push_str(&format!("package {};\n\n", config.model_classes_package));
    }

    if config.jpa_used {
        if config.jakarta_persistence_api {
            dst.push_str("import jakarta.persistence.*;\n\n");
        } else {
            dst.push_str("import javax.persistence.*;\n\n");
        }
    }

    dst.push_str("@Embeddable\n");
    dst.push_str(&format!("public class {} {{\n", embeddable.name));

    for field in &embeddable.fields {
        if config.jpa_used {
            for annotation in &field.annotations {
                dst.push_str(&format!("    {}\n", annotation.token_text()));
            }
        }
        dst.push_str(&format!("    private {} {};\n\n", field.ty, field.name));
    }

    dst.push_str("}\n");
    dst
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn declared_tokens_are_emitted_without_expansion() {
        let embeddable: Embeddable = serde_json::from_str(
            r#"{
                "embeddable_name": "Address",
                "fields": [
                    {"field_name": "street", "field_type": "String",
                     "field_annotations": ["@Column(name = \"street\")"]},
                    {"field_name": "city", "field_type": "String"}
                ]
            }"#,
        )
        .unwrap();

        let mut config = Config::default();
        config.jpa_used = true;
        config.jakarta_persistence_api = true;

        assert_eq!(
            embeddable_class(&embeddable, &config),
            "import jakarta.persistence.*;\n\n\
             @Embeddable\n\
             public class Address {\n    \
             @Column(name = \"street\")\n    \
             private String street;\n\n    \
             private String city;\n\n\
             }\n"
        );
    }
}

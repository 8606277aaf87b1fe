use super::{boilerplate, fields, relation};
use springforge_core::schema::{Config, Entity, InheritanceStrategy};
use springforge_core::{Name, Result};

/// Compiles one entity into its complete class body. Fails (without touching
/// the rest of the batch) when the entity is invalid or names an unknown
/// parent.
pub(crate) fn entity_class(
    entity: &Entity,
    entities: &[Entity],
    config: &Config,
) -> Result<String> {
    entity.validate()?;

    let header = Header::resolve(entity, entities, config)?;

    let expand = Expand {
        entity,
        config,
        fields: entity
            .fields
            .iter()
            .map(|field| fields::effective(field, &entity.name, config))
            .collect(),
        caps: boilerplate::declared(entity),
    };

    Ok(expand.expand(&header))
}

/// The inheritance-shape-specific part of the class: its leading annotations
/// and the declaration line. Resolved up front so a failed parent lookup
/// never produces partial output.
struct Header {
    annotations: Vec<String>,
    declaration: String,
}

impl Header {
    fn resolve(entity: &Entity, entities: &[Entity], config: &Config) -> Result<Self> {
        let class_name = entity.class_name(&config.entity_suffix);
        let mut annotations = Vec::new();

        if entity.is_parent {
            if config.jpa_used {
                match entity.inheritance_strategy {
                    Some(InheritanceStrategy::MappedSuperclass) => {
                        annotations.push("@MappedSuperclass".to_string());
                    }
                    Some(strategy) => {
                        annotations.push("@Entity".to_string());
                        annotations.push(format!("@Table(name=\"{}s\")", entity.name));
                        annotations.push(format!(
                            "@Inheritance(strategy = InheritanceType.{})",
                            strategy.as_str()
                        ));
                    }
                    None => {}
                }
            }

            return Ok(Self {
                annotations,
                declaration: format!("public abstract class {class_name}"),
            });
        }

        if entity.parent_name.is_some() {
            // The parent must exist in the batch whether or not persistence
            // annotations end up emitted.
            let parent = entity.parent(entities)?;

            if config.jpa_used {
                match parent.inheritance_strategy {
                    Some(InheritanceStrategy::SingleTable) => {
                        annotations.push("@Entity".to_string());
                        annotations.push(format!(
                            "@DiscriminatorValue(\"{}\")",
                            entity.discriminator_value.as_deref().unwrap_or_default()
                        ));
                    }
                    Some(_) => {
                        annotations.push("@Entity".to_string());
                        annotations.push(format!("@Table(name=\"{}s\")", entity.name));
                    }
                    None => {}
                }
            }

            return Ok(Self {
                annotations,
                declaration: format!(
                    "public class {class_name} extends {}",
                    parent.class_name(&config.entity_suffix)
                ),
            });
        }

        if config.jpa_used {
            annotations.push("@Entity".to_string());
            annotations.push(format!("@Table(name=\"{}s\")", entity.name));
        }

        Ok(Self {
            annotations,
            declaration: format!("public class {class_name}"),
        })
    }
}

struct Expand<'a> {
    entity: &'a Entity,
    config: &'a Config,
    fields: Vec<fields::EffectiveField<'a>>,
    caps: boilerplate::Capabilities,
}

impl Expand<'_> {
    fn expand(&self, header: &Header) -> String {
        let mut dst = String::new();

        self.package(&mut dst);
        self.imports(&mut dst);
        self.class_annotations(&mut dst);

        for annotation in &header.annotations {
            dst.push_str(annotation);
            dst.push('\n');
        }

        dst.push_str(&header.declaration);
        self.implements_clause(&mut dst);
        dst.push_str(" {\n");

        self.fields(&mut dst);

        if self.config.add_models_no_and_all_args_constructors
            && !self.caps.covers_constructors()
        {
            self.constructors(&mut dst);
        }

        if self.config.add_model_class_getters_setters && !self.caps.covers_accessors() {
            self.accessors(&mut dst);
        }

        if self.config.add_model_class_hashcode_equals_tostring_methods
            && !self.caps.covers_standard_methods()
        {
            self.standard_methods(&mut dst);
        }

        dst.push_str("}\n");
        dst
    }

    fn package(&self, dst: &mut String) {
        if !self.config.model_classes_package.is_empty() {
            dst.push_str(&format!("package {};\n\n", self.config.model_classes_package));
        }
    }

    fn imports(&self, dst: &mut String) {
        if self.config.jpa_used {
            if self.config.jakarta_persistence_api {
                dst.push_str("import jakarta.persistence.*;\n\n");
            } else {
                dst.push_str("import javax.persistence.*;\n\n");
            }
        }

        if self.serializable() {
            dst.push_str("import java.io.Serializable;\n\n");
        }

        if !self.caps.is_empty() {
            dst.push_str("import lombok.*;\n\n");
        }
    }

    fn class_annotations(&self, dst: &mut String) {
        for annotation in &self.entity.supplementary_annotations {
            dst.push_str(&annotation.token_text());
            dst.push('\n');
        }
    }

    fn implements_clause(&self, dst: &mut String) {
        let serializable = self.serializable();

        if !serializable && self.entity.interfaces.is_empty() {
            return;
        }

        let mut names: Vec<&str> = Vec::new();
        if serializable {
            names.push("Serializable");
        }
        names.extend(self.entity.interfaces.iter().map(String::as_str));

        dst.push_str(" implements ");
        dst.push_str(&names.join(", "));
    }

    fn fields(&self, dst: &mut String) {
        for field in &self.fields {
            if self.config.jpa_used {
                for annotation in relation::expand(&field.annotations, field.name, &field.ty) {
                    for line in annotation.lines() {
                        dst.push_str(&format!("    {line}\n"));
                    }
                }
            }

            dst.push_str(&format!("    private {} {};\n\n", field.ty, field.name));
        }
    }

    fn constructors(&self, dst: &mut String) {
        let class_name = self.entity.class_name(&self.config.entity_suffix);

        dst.push_str("    // Constructors\n");
        dst.push_str(&format!("    public {class_name}() {{\n"));
        dst.push_str("    }\n");

        let parameters = self
            .fields
            .iter()
            .map(|field| format!("{} {}", field.ty, field.name))
            .collect::<Vec<_>>()
            .join(", ");

        dst.push_str(&format!("    public {class_name}({parameters}) {{\n"));
        for field in &self.fields {
            dst.push_str(&format!("        this.{} = {};\n", field.name, field.name));
        }
        dst.push_str("    }\n");
    }

    fn accessors(&self, dst: &mut String) {
        dst.push_str("    // Getters and setters\n");

        for field in &self.fields {
            let property = Name::new(field.name).upper_camel_case();

            dst.push_str(&format!("    public {} get{property}() {{\n", field.ty));
            dst.push_str(&format!("        return {};\n", field.name));
            dst.push_str("    }\n");
            dst.push_str(&format!(
                "    public void set{property}({} {}) {{\n",
                field.ty, field.name
            ));
            dst.push_str(&format!("        this.{} = {};\n", field.name, field.name));
            dst.push_str("    }\n");
        }
    }

    /// equals/hashCode key on the first declared field only; toString lists
    /// every field. The single-field identity is the documented policy of
    /// this generator, not an accident.
    fn standard_methods(&self, dst: &mut String) {
        let first = &self.fields[0];

        dst.push_str("    // hashCode(), equals(), toString()\n");
        dst.push_str("    @Override\n");
        dst.push_str("    public int hashCode() {\n");
        dst.push_str(&format!("        return {}.hashCode();\n", first.name));
        dst.push_str("    }\n");

        dst.push_str("    @Override\n");
        dst.push_str("    public boolean equals(Object obj) {\n");
        dst.push_str("        if (this == obj) return true;\n");
        dst.push_str("        if (obj == null || getClass() != obj.getClass()) return false;\n");
        dst.push_str(&format!(
            "        {} that = ({}) obj;\n",
            self.entity.name, self.entity.name
        ));
        dst.push_str(&format!(
            "        return {}.equals(that.{});\n",
            first.name, first.name
        ));
        dst.push_str("    }\n");

        dst.push_str("    @Override\n");
        dst.push_str("    public String toString() {\n");
        dst.push_str(&format!("        return \"{}{{\" +\n", self.entity.name));
        for field in &self.fields {
            dst.push_str(&format!(
                "                \"{}='\" + String.valueOf({}) + '\\'' +\n",
                field.name, field.name
            ));
        }
        dst.push_str("                '}';\n");
        dst.push_str("    }\n");
    }

    fn serializable(&self) -> bool {
        self.config.jpa_used || self.config.pojo_model_beanified
    }
}

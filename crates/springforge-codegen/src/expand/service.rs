use springforge_core::schema::{Config, Entity};
use springforge_core::Name;

/// Compiles the service for one entity: a thin pass-through wrapper that
/// field-injects the matching repository.
pub(crate) fn service_class(entity: &Entity, config: &Config) -> String {
    let service_name = format!("{}Service", entity.name);
    let repository_name = format!("{}Repository", entity.name);
    let repository_field = Name::new(&repository_name).lower_first();
    let entity_class = entity.class_name(&config.entity_suffix);

    let method_comment = if config.spring_data_used_for_repositories_and_services {
        "    // Example method using Spring Data JPA\n"
    } else {
        "    // Example method using pure JPA\n"
    };

    let mut dst = String::new();

    if !config.service_package.is_empty() {
        dst.push_str(&format!("package {};\n\n", config.service_package));
    }

    dst.push_str("import org.springframework.beans.factory.annotation.Autowired;\n");
    dst.push_str("import org.springframework.stereotype.Service;\n");
    dst.push_str("import java.util.List;\n");
    dst.push_str(&format!(
        "import {}.{repository_name};\n\n",
        config.repository_package
    ));
    dst.push_str("@Service\n");
    dst.push_str(&format!("public class {service_name} {{\n\n"));
    dst.push_str("    @Autowired\n");
    dst.push_str(&format!("    private {repository_name} {repository_field};\n\n"));
    dst.push_str(method_comment);
    dst.push_str(&format!("    public List<{entity_class}> findAll() {{\n"));
    dst.push_str(&format!("        return {repository_field}.findAll();\n"));
    dst.push_str("    }\n\n");
    dst.push_str("}\n");

    dst
}

use springforge_core::schema::{Config, Entity};
use springforge_core::Name;

/// Compiles the REST controller for one entity: a pass-through endpoint
/// delegating to the matching service.
pub(crate) fn controller_class(entity: &Entity, config: &Config) -> String {
    let controller_name = format!("{}Controller", entity.name);
    let service_name = format!("{}Service", entity.name);
    let service_field = Name::new(&service_name).lower_first();
    let entity_class = entity.class_name(&config.entity_suffix);
    let route = Name::new(&entity.name).lower_case();

    let mut dst = String::new();

    if !config.controller_package.is_empty() {
        dst.push_str(&format!("package {};\n\n", config.controller_package));
    }

    dst.push_str("import org.springframework.beans.factory.annotation.Autowired;\n");
    dst.push_str("import org.springframework.web.bind.annotation.*;\n");
    dst.push_str("import java.util.List;\n");
    dst.push_str(&format!("import {}.{service_name};\n\n", config.service_package));
    dst.push_str("@RestController\n");
    dst.push_str(&format!("@RequestMapping(\"/api/{route}s\")\n"));
    dst.push_str(&format!("public class {controller_name} {{\n\n"));
    dst.push_str("    @Autowired\n");
    dst.push_str(&format!("    private {service_name} {service_field};\n\n"));
    dst.push_str("    // Example REST endpoint\n");
    dst.push_str("    @GetMapping\n");
    dst.push_str(&format!("    public List<{entity_class}> findAll() {{\n"));
    dst.push_str(&format!("        return {service_field}.findAll();\n"));
    dst.push_str("    }\n\n");
    dst.push_str("}\n");

    dst
}

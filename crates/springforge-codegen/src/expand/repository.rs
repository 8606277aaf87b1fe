use springforge_core::schema::{Config, Entity};

/// Compiles the repository for one entity. Two modes, selected for the whole
/// batch: a Spring Data delegate interface, or a hand-rolled class against an
/// `EntityManager`.
pub(crate) fn repository_class(entity: &Entity, config: &Config) -> String {
    let repository_name = format!("{}Repository", entity.name);
    let entity_class = entity.class_name(&config.entity_suffix);

    let mut dst = String::new();

    if !config.repository_package.is_empty() {
        dst.push_str(&format!("package {};\n\n", config.repository_package));
    }

    if config.spring_data_used_for_repositories_and_services {
        dst.push_str("import org.springframework.data.jpa.repository.JpaRepository;\n");
        dst.push_str("import org.springframework.stereotype.Repository;\n\n");
        dst.push_str("@Repository\n");
        dst.push_str(&format!(
            "public interface {repository_name} extends JpaRepository<{entity_class}, Long> {{\n"
        ));
        dst.push_str("}\n");
        return dst;
    }

    dst.push_str("import jakarta.persistence.EntityManager;\n");
    dst.push_str("import jakarta.persistence.PersistenceContext;\n");
    dst.push_str("import jakarta.persistence.TypedQuery;\n");
    dst.push_str("import java.util.List;\n\n");
    dst.push_str(&format!("public class {repository_name} {{\n\n"));
    dst.push_str("    @PersistenceContext\n");
    dst.push_str("    private EntityManager entityManager;\n\n");
    dst.push_str(&format!("    public List<{entity_class}> findAll() {{\n"));
    dst.push_str(&format!(
        "        TypedQuery<{entity_class}> query = entityManager.createQuery(\"SELECT e FROM {entity_class} e\", {entity_class}.class);\n"
    ));
    dst.push_str("        return query.getResultList();\n");
    dst.push_str("    }\n\n");
    dst.push_str(&format!("    public {entity_class} findById(Long id) {{\n"));
    dst.push_str(&format!(
        "        return entityManager.find({entity_class}.class, id);\n"
    ));
    dst.push_str("    }\n\n");
    dst.push_str(&format!("    public void save({entity_class} entity) {{\n"));
    dst.push_str("        entityManager.persist(entity);\n");
    dst.push_str("    }\n\n");
    dst.push_str(&format!("    public void update({entity_class} entity) {{\n"));
    dst.push_str("        entityManager.merge(entity);\n");
    dst.push_str("    }\n\n");
    dst.push_str("    public void delete(Long id) {\n");
    dst.push_str(&format!("        {entity_class} entity = findById(id);\n"));
    dst.push_str("        if (entity != null) {\n");
    dst.push_str("            entityManager.remove(entity);\n");
    dst.push_str("        }\n");
    dst.push_str("    }\n");
    dst.push_str("}\n");

    dst
}

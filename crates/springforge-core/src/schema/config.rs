use serde::Deserialize;

/// The `configuration_variables` bundle: toggles and package paths shared by
/// every compiler. Read-only for the whole run.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Root directory artifacts are persisted under.
    #[serde(rename = "OUT_PUT_DIR", default = "default_output_dir")]
    pub output_dir: String,

    /// Package for entity, interface, embeddable, and enum classes. When
    /// empty, no package line is emitted and the classes land at the output
    /// root.
    #[serde(default)]
    pub model_classes_package: String,

    #[serde(rename = "repository_classes_packages", default = "default_repository_package")]
    pub repository_package: String,

    #[serde(rename = "service_classes_packages", default = "default_service_package")]
    pub service_package: String,

    #[serde(rename = "controller_classes_packages", default = "default_controller_package")]
    pub controller_package: String,

    /// Suffix appended to every generated entity class name.
    #[serde(default)]
    pub entity_suffix: String,

    /// Master persistence toggle. When off, entity output is a plain POJO.
    #[serde(default)]
    pub jpa_used: bool,

    /// Selects `jakarta.persistence` over `javax.persistence`. The original
    /// document format spelled this key two ways; both are accepted.
    #[serde(default, alias = "jarkata_persistence_api")]
    pub jakarta_persistence_api: bool,

    /// Forces the `Serializable` marker onto plain POJO output.
    #[serde(default)]
    pub pojo_model_beanified: bool,

    #[serde(default)]
    pub add_models_no_and_all_args_constructors: bool,

    #[serde(default)]
    pub add_model_class_getters_setters: bool,

    #[serde(default)]
    pub add_model_class_hashcode_equals_tostring_methods: bool,

    /// Strategy argument for the synthesized `@GeneratedValue` annotation.
    #[serde(default = "default_id_generated_value")]
    pub id_generated_value: String,

    /// Gates persistence of entity-class artifacts into the package tree.
    /// Entity bodies are always available for display regardless.
    #[serde(default)]
    pub generate_classes_following_packages: bool,

    /// Repository mode: Spring Data delegate interface vs. a hand-rolled
    /// EntityManager repository.
    #[serde(default)]
    pub spring_data_used_for_repositories_and_services: bool,

    /// Post-run mode: print every generated entity body instead of the
    /// output-directory summary.
    #[serde(default)]
    pub display_generated_classes: bool,
}

fn default_output_dir() -> String {
    "./generated_classes".to_string()
}

fn default_repository_package() -> String {
    "com.example.repository".to_string()
}

fn default_service_package() -> String {
    "com.example.service".to_string()
}

fn default_controller_package() -> String {
    "com.example.controller".to_string()
}

fn default_id_generated_value() -> String {
    "IDENTITY".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            output_dir: default_output_dir(),
            model_classes_package: String::new(),
            repository_package: default_repository_package(),
            service_package: default_service_package(),
            controller_package: default_controller_package(),
            entity_suffix: String::new(),
            jpa_used: false,
            jakarta_persistence_api: false,
            pojo_model_beanified: false,
            add_models_no_and_all_args_constructors: false,
            add_model_class_getters_setters: false,
            add_model_class_hashcode_equals_tostring_methods: false,
            id_generated_value: default_id_generated_value(),
            generate_classes_following_packages: false,
            spring_data_used_for_repositories_and_services: false,
            display_generated_classes: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = Config::default();
        assert_eq!(config.output_dir, "./generated_classes");
        assert_eq!(config.repository_package, "com.example.repository");
        assert_eq!(config.service_package, "com.example.service");
        assert_eq!(config.controller_package, "com.example.controller");
        assert_eq!(config.id_generated_value, "IDENTITY");
        assert!(!config.jpa_used);
        assert!(!config.display_generated_classes);
    }

    #[test]
    fn accepts_the_historical_key_spelling() {
        let config: Config =
            serde_json::from_str(r#"{"jarkata_persistence_api": true}"#).unwrap();
        assert!(config.jakarta_persistence_api);
    }
}

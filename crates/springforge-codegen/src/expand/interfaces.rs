use springforge_core::schema::{Config, InterfaceSpec};

/// Compiles one marker interface. Method signatures are emitted verbatim.
pub(crate) fn interface_class(spec: &InterfaceSpec, config: &Config) -> String {
    let mut dst = String::new();

    if !config.model_classes_package.is_empty() {
        dst.push_str(&format!("package {};\n\n", config.model_classes_package));
    }

    dst.push_str(&format!("public interface {} {{\n", spec.name));
    for method in &spec.methods {
        dst.push_str(&format!("    {method};\n"));
    }
    dst.push_str("}\n");

    dst
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn methods_are_emitted_verbatim() {
        let spec = InterfaceSpec {
            name: "Auditable".to_string(),
            methods: vec![
                "LocalDateTime getCreatedAt()".to_string(),
                "void setCreatedAt(LocalDateTime createdAt)".to_string(),
            ],
        };

        let mut config = Config::default();
        config.model_classes_package = "com.example.model".to_string();

        assert_eq!(
            interface_class(&spec, &config),
            "package com.example.model;\n\n\
             public interface Auditable {\n    \
             LocalDateTime getCreatedAt();\n    \
             void setCreatedAt(LocalDateTime createdAt);\n\
             }\n"
        );
    }
}

use springforge_core::schema::{Config, EnumSpec};

/// Compiles one enumeration.
///
/// When any value carries a parenthesized literal, the enum gets an `int`
/// backing field and a one-parameter constructor. The backing field is named
/// by the first bare value (which then names the field instead of becoming a
/// constant) or `value` when every entry is parenthesized.
pub(crate) fn enum_class(spec: &EnumSpec, config: &Config) -> String {
    let mut dst = String::new();

    if !config.model_classes_package.is_empty() {
        dst.push_str(&format!("package {};\n\n", config.model_classes_package));
    }

    dst.push_str(&format!("public enum {} {{\n", spec.name));

    let backing = spec.has_literals().then(|| spec.bare_value().unwrap_or("value"));

    let constants: Vec<String> = spec
        .values
        .iter()
        .filter(|value| Some(value.as_str()) != backing)
        .map(|value| match value.split_once('(') {
            Some((name, literal)) => {
                format!("    {name}({})", literal.trim_end_matches(')'))
            }
            None => format!("    {value}"),
        })
        .collect();

    dst.push_str(&constants.join(",\n"));
    dst.push_str(";\n\n");

    if let Some(backing) = backing {
        dst.push_str(&format!("    private final int {backing};\n\n"));
        dst.push_str(&format!("    {}(int {backing}) {{\n", spec.name));
        dst.push_str(&format!("        this.{backing} = {backing};\n"));
        dst.push_str("    }\n");
    }

    dst.push_str("}\n");
    dst
}

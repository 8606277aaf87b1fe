use serde::Deserialize;

/// A marker interface. Method signatures are raw strings emitted verbatim.
#[derive(Debug, Clone, Deserialize)]
pub struct InterfaceSpec {
    #[serde(rename = "interface_name")]
    pub name: String,

    #[serde(default)]
    pub methods: Vec<String>,
}

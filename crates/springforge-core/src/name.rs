use heck::ToUpperCamelCase;

/// A declared identifier (entity, field, or class name) with the case
/// conversions the compilers need.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct Name<'a> {
    raw: &'a str,
}

impl<'a> Name<'a> {
    pub fn new(raw: &'a str) -> Self {
        Self { raw }
    }

    /// The name exactly as declared.
    pub fn raw(&self) -> &'a str {
        self.raw
    }

    /// `deviceType` / `device_type` -> `DeviceType`. Used for accessor names.
    pub fn upper_camel_case(&self) -> String {
        self.raw.to_upper_camel_case()
    }

    /// `UserService` -> `userService`. Used for injected instance names.
    pub fn lower_first(&self) -> String {
        let mut chars = self.raw.chars();
        match chars.next() {
            Some(first) => first.to_lowercase().chain(chars).collect(),
            None => String::new(),
        }
    }

    /// The whole name lower-cased. Used for table and join-column names.
    pub fn lower_case(&self) -> String {
        self.raw.to_lowercase()
    }
}

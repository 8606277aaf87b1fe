use std::path::PathBuf;

/// One generated unit of source text, addressed relative to the configured
/// output directory. Producing these is the whole job of this crate; writing
/// them to disk is the caller's.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    pub kind: ArtifactKind,
    pub path: PathBuf,
    pub contents: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArtifactKind {
    EntityClass,
    Interface,
    Embeddable,
    Enum,
    Repository,
    Service,
    Controller,
    Environment,
}

impl Artifact {
    /// Places `file_name` under the directory derived from a dot-separated
    /// package name. An empty package lands the file at the output root.
    pub fn in_package(
        kind: ArtifactKind,
        package: &str,
        file_name: impl Into<String>,
        contents: String,
    ) -> Self {
        let mut path = package_dir(package);
        path.push(file_name.into());
        Self { kind, path, contents }
    }
}

impl ArtifactKind {
    /// Human-readable plural label for progress reporting.
    pub fn label(&self) -> &'static str {
        match self {
            ArtifactKind::EntityClass => "model classes",
            ArtifactKind::Interface => "interfaces",
            ArtifactKind::Embeddable => "embeddable classes",
            ArtifactKind::Enum => "enums",
            ArtifactKind::Repository => "repositories",
            ArtifactKind::Service => "services",
            ArtifactKind::Controller => "controllers",
            ArtifactKind::Environment => "configuration files",
        }
    }
}

/// Maps `com.example.model` to `com/example/model`.
pub fn package_dir(package: &str) -> PathBuf {
    if package.is_empty() {
        return PathBuf::new();
    }
    package.split('.').collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn package_dir_nests_each_segment() {
        assert_eq!(package_dir("com.example.model"), PathBuf::from("com/example/model"));
        assert_eq!(package_dir(""), PathBuf::new());
    }

    #[test]
    fn in_package_joins_the_file_name() {
        let artifact = Artifact::in_package(
            ArtifactKind::Repository,
            "com.example.repository",
            "UserRepository.java",
            String::new(),
        );
        assert_eq!(
            artifact.path,
            PathBuf::from("com/example/repository/UserRepository.java")
        );
    }
}

use springforge_codegen::Artifact;
use std::fs;
use std::path::{Path, PathBuf};

/// What happened while persisting a batch of artifacts. A failed write is
/// recorded and skipped; it never aborts the batch.
#[derive(Debug, Default)]
pub(crate) struct WriteReport {
    pub(crate) written: usize,
    pub(crate) failures: Vec<(PathBuf, std::io::Error)>,
}

/// Writes every artifact under `output_dir`, creating directories as needed.
pub(crate) fn persist(artifacts: &[Artifact], output_dir: &Path) -> WriteReport {
    let mut report = WriteReport::default();

    for artifact in artifacts {
        let path = output_dir.join(&artifact.path);

        match write_one(&path, &artifact.contents) {
            Ok(()) => report.written += 1,
            Err(err) => report.failures.push((path, err)),
        }
    }

    report
}

fn write_one(path: &Path, contents: &str) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, contents)
}

#[cfg(test)]
mod tests {
    use super::*;
    use springforge_codegen::ArtifactKind;

    #[test]
    fn persist_creates_nested_package_directories() {
        let dir = tempfile::tempdir().unwrap();
        let artifacts = vec![Artifact {
            kind: ArtifactKind::Repository,
            path: PathBuf::from("com/example/repository/UserRepository.java"),
            contents: "public interface UserRepository {}\n".to_string(),
        }];

        let report = persist(&artifacts, dir.path());

        assert_eq!(report.written, 1);
        assert!(report.failures.is_empty());

        let written = fs::read_to_string(
            dir.path().join("com/example/repository/UserRepository.java"),
        )
        .unwrap();
        assert_eq!(written, "public interface UserRepository {}\n");
    }

    #[test]
    fn a_failed_write_is_reported_and_skipped() {
        let dir = tempfile::tempdir().unwrap();

        // A regular file where a directory is needed forces the failure.
        fs::write(dir.path().join("model"), "not a directory").unwrap();

        let artifacts = vec![
            Artifact {
                kind: ArtifactKind::EntityClass,
                path: PathBuf::from("model/User.java"),
                contents: String::new(),
            },
            Artifact {
                kind: ArtifactKind::EntityClass,
                path: PathBuf::from("Account.java"),
                contents: String::new(),
            },
        ];

        let report = persist(&artifacts, dir.path());

        assert_eq!(report.written, 1);
        assert_eq!(report.failures.len(), 1);
        assert!(dir.path().join("Account.java").exists());
    }
}

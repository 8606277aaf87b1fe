//! Compiles a parsed schema document into in-memory source artifacts.
//!
//! Everything here is a pure function of the (immutable) document: no
//! filesystem access, no global state. Compiling the same document twice
//! yields byte-identical output. Persisting the artifacts is the caller's
//! job.

mod artifact;
pub use artifact::{package_dir, Artifact, ArtifactKind};

mod expand;

use springforge_core::schema::Entity;
use springforge_core::{Document, Error};

/// Everything one run produces: artifact text ready to persist, entity
/// bodies for display, and the per-entity failures that were skipped over.
#[derive(Debug, Default)]
pub struct Output {
    /// Compiled entity bodies in batch order, kept for console display
    /// independently of whether they are persisted.
    pub classes: Vec<CompiledClass>,

    /// Artifacts to persist, in generation order.
    pub artifacts: Vec<Artifact>,

    /// Entities that failed validation or parent resolution. The rest of the
    /// batch is unaffected.
    pub failures: Vec<Failure>,
}

#[derive(Debug)]
pub struct CompiledClass {
    pub name: String,
    pub body: String,
}

#[derive(Debug)]
pub struct Failure {
    pub entity: String,
    pub error: Error,
}

impl Output {
    pub fn count(&self, kind: ArtifactKind) -> usize {
        self.artifacts.iter().filter(|a| a.kind == kind).count()
    }
}

/// Compiles every category of the document. Per-entity failures are recorded
/// and skipped; sibling entities still compile.
pub fn generate(doc: &Document) -> Output {
    let config = &doc.config;
    let mut output = Output::default();

    for entity in &doc.entities {
        match expand::entity_class(entity, &doc.entities, config) {
            Ok(body) => {
                if config.generate_classes_following_packages {
                    output.artifacts.push(Artifact::in_package(
                        ArtifactKind::EntityClass,
                        &config.model_classes_package,
                        format!("{}.java", entity.class_name(&config.entity_suffix)),
                        body.clone(),
                    ));
                }
                output.classes.push(CompiledClass {
                    name: entity.name.clone(),
                    body,
                });
            }
            Err(error) => output.failures.push(Failure {
                entity: entity.name.clone(),
                error,
            }),
        }
    }

    for spec in &doc.interface_classes {
        output.artifacts.push(Artifact::in_package(
            ArtifactKind::Interface,
            &config.model_classes_package,
            format!("{}.java", spec.name),
            expand::interface_class(spec, config),
        ));
    }

    for embeddable in &doc.embeddable_classes {
        output.artifacts.push(Artifact::in_package(
            ArtifactKind::Embeddable,
            &config.model_classes_package,
            format!("{}.java", embeddable.name),
            expand::embeddable_class(embeddable, config),
        ));
    }

    for spec in &doc.enum_classes {
        output.artifacts.push(Artifact::in_package(
            ArtifactKind::Enum,
            &config.model_classes_package,
            format!("{}.java", spec.name),
            expand::enum_class(spec, config),
        ));
    }

    // Layered artifacts are keyed off the entity name alone, so a failed
    // parent lookup does not exclude an entity here; only basic validation
    // does.
    for entity in valid_entities(doc) {
        output.artifacts.push(Artifact::in_package(
            ArtifactKind::Repository,
            &config.repository_package,
            format!("{}Repository.java", entity.name),
            expand::repository_class(entity, config),
        ));
    }

    for entity in valid_entities(doc) {
        output.artifacts.push(Artifact::in_package(
            ArtifactKind::Service,
            &config.service_package,
            format!("{}Service.java", entity.name),
            expand::service_class(entity, config),
        ));
    }

    for entity in valid_entities(doc) {
        output.artifacts.push(Artifact::in_package(
            ArtifactKind::Controller,
            &config.controller_package,
            format!("{}Controller.java", entity.name),
            expand::controller_class(entity, config),
        ));
    }

    output.artifacts.extend(expand::env_artifacts());

    output
}

fn valid_entities(doc: &Document) -> impl Iterator<Item = &Entity> {
    doc.entities.iter().filter(|entity| entity.validate().is_ok())
}

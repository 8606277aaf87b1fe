//! Parsed schema document: the closed set of record types the compilers
//! consume. Constructed once per run, read-only afterwards.

mod annotation;
pub use annotation::{Annotation, Lombok, Relation, RelationKind, RelationSide};

mod config;
pub use config::Config;

mod document;
pub use document::Document;

mod embeddable;
pub use embeddable::Embeddable;

mod entity;
pub use entity::{Entity, Field, InheritanceStrategy};

mod enum_spec;
pub use enum_spec::EnumSpec;

mod interface;
pub use interface::InterfaceSpec;

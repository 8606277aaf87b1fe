mod boilerplate;
mod controller;
mod embeddable;
mod entity;
mod enums;
mod env;
mod fields;
mod interfaces;
mod relation;
mod repository;
mod service;

pub(crate) use controller::controller_class;
pub(crate) use embeddable::embeddable_class;
pub(crate) use entity::entity_class;
pub(crate) use enums::enum_class;
pub(crate) use env::artifacts as env_artifacts;
pub(crate) use interfaces::interface_class;
pub(crate) use repository::repository_class;
pub(crate) use service::service_class;

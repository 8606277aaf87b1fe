mod error;
pub use error::Error;

pub mod schema;
pub use schema::{Config, Document};

mod name;
pub use name::Name;

/// A Result type alias that uses springforge's [`Error`] type.
pub type Result<T> = core::result::Result<T, Error>;

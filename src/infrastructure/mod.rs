//! Infrastructure layer: I/O implementations, document loading and DI container

pub mod di;
pub mod error;
pub mod loader;
pub mod traits;

pub use error::{InfraError, InfraResult};
pub use loader::OrganisationLoader;

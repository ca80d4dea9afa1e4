//! Application-level errors

use std::path::PathBuf;
use thiserror::Error;

/// Application errors add context to failures around the traversal core,
/// which itself cannot fail.
#[derive(Error, Debug)]
pub enum ApplicationError {
    #[error("config error: {message}")]
    Config { message: String },

    #[error("invalid organisation document {path}: {message}")]
    InvalidOrganisation { path: PathBuf, message: String },

    #[error("organisation file not found: {0}")]
    OrganisationNotFound(PathBuf),

    #[error("operation failed: {context}")]
    OperationFailed {
        context: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

/// Result type for application layer operations.
pub type ApplicationResult<T> = Result<T, ApplicationError>;

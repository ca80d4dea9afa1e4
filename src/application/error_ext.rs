//! Error conversion helpers for I/O on organisation and config files

use std::io;
use std::path::Path;

use crate::application::{ApplicationError, ApplicationResult};

/// Extension trait turning `io::Result` into `ApplicationResult` with the
/// offending path in the message.
pub trait IoResultExt<T> {
    /// ```ignore
    /// fs.read_to_string(&path).with_path_context("read organisation", &path)?;
    /// ```
    fn with_path_context(self, action: &str, path: &Path) -> ApplicationResult<T>;
}

impl<T> IoResultExt<T> for io::Result<T> {
    fn with_path_context(self, action: &str, path: &Path) -> ApplicationResult<T> {
        self.map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => ApplicationError::OrganisationNotFound(path.to_path_buf()),
            _ => ApplicationError::OperationFailed {
                context: format!("{}: {}", action, path.display()),
                source: Box::new(e),
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn given_missing_file_error_when_adding_context_then_reports_not_found() {
        let result: io::Result<()> = Err(io::Error::from(io::ErrorKind::NotFound));
        let err = result.with_path_context("read", Path::new("org.toml")).unwrap_err();
        assert!(matches!(err, ApplicationError::OrganisationNotFound(p) if p == PathBuf::from("org.toml")));
    }

    #[test]
    fn given_other_io_error_when_adding_context_then_names_action_and_path() {
        let result: io::Result<()> = Err(io::Error::from(io::ErrorKind::PermissionDenied));
        let err = result.with_path_context("read organisation", Path::new("org.toml")).unwrap_err();
        assert_eq!(err.to_string(), "operation failed: read organisation: org.toml");
    }
}

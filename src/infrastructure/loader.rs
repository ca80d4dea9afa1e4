//! Organisation documents in TOML
//!
//! ```toml
//! type = "department"
//! name = "HQ"
//!
//! [[children]]
//! type = "employee"
//! name = "Alice"
//! role = "C"
//! tasks = [{ id = 1, duration = 5 }]
//! ```

use std::path::Path;
use std::sync::Arc;

use tracing::{debug, instrument};

use crate::application::{ApplicationError, ApplicationResult, IoResultExt};
use crate::domain::Unit;
use crate::infrastructure::traits::FileSystem;

/// Reads and writes organisation trees.
pub struct OrganisationLoader {
    fs: Arc<dyn FileSystem>,
}

impl OrganisationLoader {
    pub fn new(fs: Arc<dyn FileSystem>) -> Self {
        Self { fs }
    }

    /// Load the tree stored at `path`.
    #[instrument(level = "debug", skip(self))]
    pub fn load(&self, path: &Path) -> ApplicationResult<Unit> {
        if !self.fs.exists(path) {
            return Err(ApplicationError::OrganisationNotFound(path.to_path_buf()));
        }
        let content = self
            .fs
            .read_to_string(path)
            .with_path_context("read organisation", path)?;
        let unit = Self::parse(&content).map_err(|message| ApplicationError::InvalidOrganisation {
            path: path.to_path_buf(),
            message,
        })?;
        debug!(
            departments = unit.department_count(),
            employees = unit.employee_count(),
            "organisation loaded"
        );
        Ok(unit)
    }

    /// Parse a document. The error is the parser's message.
    pub fn parse(content: &str) -> Result<Unit, String> {
        toml::from_str(content).map_err(|e| e.message().to_string())
    }

    /// Serialize a tree as a document `load` accepts.
    pub fn to_toml(unit: &Unit) -> ApplicationResult<String> {
        toml::to_string_pretty(unit).map_err(|e| ApplicationError::OperationFailed {
            context: "serialize organisation".to_string(),
            source: Box::new(e),
        })
    }
}

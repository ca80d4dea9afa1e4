//! Service container for dependency injection
//!
//! Wires settings, the filesystem and the report service together.

use std::path::PathBuf;
use std::sync::Arc;

use tracing::debug;

use crate::application::render_organisation::Theme;
use crate::application::{ApplicationResult, ReportService, TreeConfig, TreeGlyphs};
use crate::config::Settings;
use crate::domain::{sample, Unit};
use crate::infrastructure::loader::OrganisationLoader;
use crate::infrastructure::traits::{FileSystem, RealFileSystem};

/// Container holding all application services.
pub struct ServiceContainer {
    /// Application settings
    pub settings: Arc<Settings>,

    /// Filesystem abstraction
    pub fs: Arc<dyn FileSystem>,
}

impl ServiceContainer {
    /// Create a new service container with real implementations.
    pub fn new(settings: Settings) -> Self {
        Self::with_deps(settings, Arc::new(RealFileSystem))
    }

    /// Create a service container with custom dependencies (for testing).
    pub fn with_deps(settings: Settings, fs: Arc<dyn FileSystem>) -> Self {
        Self {
            settings: Arc::new(settings),
            fs,
        }
    }

    pub fn loader(&self) -> OrganisationLoader {
        OrganisationLoader::new(Arc::clone(&self.fs))
    }

    /// Report service styled according to the settings.
    pub fn report_service(&self) -> ReportService {
        let styled = self.settings.color.enabled();
        let theme = if styled { Theme::styled() } else { Theme::plain() };
        let mut tree = if styled {
            TreeConfig::default()
        } else {
            TreeConfig::plain()
        };
        if self.settings.ascii_tree {
            tree.glyphs = TreeGlyphs::ascii();
        }
        debug!(styled, ascii = self.settings.ascii_tree, "report service");
        ReportService::new(theme, tree)
    }

    /// Organisation to report on: `override_path`, then the configured data
    /// file, then the built-in sample.
    pub fn organisation(&self, override_path: Option<&PathBuf>) -> ApplicationResult<Unit> {
        match override_path.or(self.settings.data_file.as_ref()) {
            Some(path) => self.loader().load(path),
            None => {
                debug!("no data file configured, using sample organisation");
                Ok(sample::push_based())
            }
        }
    }
}

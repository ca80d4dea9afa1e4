//! Application layer: renderers, visitors and report services
//!
//! This layer turns walks over the domain tree into text.

pub mod error;
pub mod error_ext;
pub mod outline;
pub mod render_organisation;
pub mod render_tree;
pub mod services;
pub mod style;
pub mod visitors;

pub use error::{ApplicationError, ApplicationResult};
pub use error_ext::IoResultExt;
pub use outline::TreeNodeConvert;
pub use render_organisation::{OrganisationRenderer, Theme};
pub use render_tree::{TreeConfig, TreeGlyphs, TreeRenderer};
pub use services::{total_line, FullReport, ReportService, Scope};
pub use style::Paint;
pub use visitors::{OrganisationTreeVisitor, TaskCalculationVisitor};

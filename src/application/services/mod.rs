//! Application services
//!
//! Concrete service implementations that run visitors over an organisation.

mod report;

pub use report::{total_line, FullReport, ReportService, Scope};

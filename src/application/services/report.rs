//! Report service
//!
//! Runs the concrete visitors over an organisation and assembles the texts
//! the command line prints.

use std::fmt;

use tracing::{debug, instrument};

use crate::application::render_organisation::{OrganisationRenderer, Theme};
use crate::application::render_tree::TreeConfig;
use crate::application::visitors::{OrganisationTreeVisitor, TaskCalculationVisitor};
use crate::domain::{visit_all_departments, visit_all_employees, visit_all_tasks, visit_all_units, Unit};

/// Which nodes a tree report shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Scope {
    #[default]
    Units,
    Departments,
    Employees,
}

/// Output of a complete run: total line and the accumulated tree reports.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FullReport {
    pub total_duration: u64,
    /// All-units report followed by the departments-only report.
    pub rendered_tree: String,
}

impl fmt::Display for FullReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", total_line(self.total_duration))?;
        write!(f, "{}", self.rendered_tree)
    }
}

/// `Total Task Duration: <n> hours`
pub fn total_line(total: u64) -> String {
    format!("Total Task Duration: {total} hours")
}

/// Service for computing organisation reports.
#[derive(Debug, Clone, Default)]
pub struct ReportService {
    theme: Theme,
    tree: TreeConfig,
}

impl ReportService {
    pub fn new(theme: Theme, tree: TreeConfig) -> Self {
        Self { theme, tree }
    }

    /// Service producing text without escape codes.
    pub fn plain() -> Self {
        Self::new(Theme::plain(), TreeConfig::plain())
    }

    fn tree_visitor(&self) -> OrganisationTreeVisitor {
        OrganisationTreeVisitor::new(
            OrganisationRenderer::new(self.theme.clone()),
            self.tree.clone(),
        )
    }

    /// Sum of all task durations in hours.
    #[instrument(level = "debug", skip_all)]
    pub fn total_duration(&self, unit: &Unit) -> u64 {
        let mut visitor = TaskCalculationVisitor::new();
        visit_all_tasks(unit, &mut visitor);
        debug!(total = visitor.total_work(), "tasks summed");
        visitor.total_work()
    }

    /// One tree report for the given scope.
    #[instrument(level = "debug", skip(self, unit))]
    pub fn render(&self, unit: &Unit, scope: Scope) -> String {
        let mut visitor = self.tree_visitor();
        match scope {
            Scope::Units => visit_all_units(unit, &mut visitor),
            Scope::Departments => visit_all_departments(unit, &mut visitor),
            Scope::Employees => visit_all_employees(unit, &mut visitor),
        }
        visitor.into_report()
    }

    /// Total plus the all-units and departments-only reports, accumulated on
    /// one visitor.
    #[instrument(level = "debug", skip_all)]
    pub fn full_report(&self, unit: &Unit) -> FullReport {
        let total_duration = self.total_duration(unit);

        let mut visitor = self.tree_visitor();
        visit_all_units(unit, &mut visitor);
        visit_all_departments(unit, &mut visitor);

        FullReport {
            total_duration,
            rendered_tree: visitor.into_report(),
        }
    }
}

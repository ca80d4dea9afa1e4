//! Concrete visitors

mod organisation_tree;
mod task_calculation;

pub use organisation_tree::OrganisationTreeVisitor;
pub use task_calculation::TaskCalculationVisitor;

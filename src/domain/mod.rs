//! Domain layer: organisation tree, traversal context, visitor contract and walks
//!
//! This layer is independent of external concerns (no I/O, no CLI, no config loading).

pub mod context;
pub mod entities;
pub mod sample;
pub mod traversal;
pub mod visitor;

pub use context::{child_context, Annotated, Context, TraversalContext};
pub use entities::{Department, Employee, Role, Task, Unit};
pub use traversal::{
    visit_all_departments, visit_all_departments_from, visit_all_employees,
    visit_all_employees_from, visit_all_tasks, visit_all_tasks_from, visit_all_units,
    visit_all_units_from,
};
pub use visitor::Visitor;

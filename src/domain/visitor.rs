//! Visitor contract for organisation walks

use crate::domain::context::TraversalContext;
use crate::domain::entities::{Department, Employee, Task};

/// Callbacks a walk invokes per node kind.
///
/// Every method defaults to a no-op, so a visitor only implements the
/// events it cares about.
pub trait Visitor<C = TraversalContext> {
    /// Called once at the start of every top-level walk, before any node.
    fn begin_walk(&mut self) {}

    fn visit_department(&mut self, _department: &Department, _context: &C) {}

    fn visit_employee(&mut self, _employee: &Employee, _context: &C) {}

    fn visit_task(&mut self, _task: &Task, _context: &C) {}
}


use crate::domain::{Task, Visitor};

/// Sums task durations, ignores departments and employees.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskCalculationVisitor {
    total_work: u64,
}

impl TaskCalculationVisitor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Hours accumulated over every walk since creation or the last reset.
    pub fn total_work(&self) -> u64 {
        self.total_work
    }

    pub fn reset(&mut self) {
        self.total_work = 0;
    }
}

impl<C> Visitor<C> for TaskCalculationVisitor {
    fn visit_task(&mut self, task: &Task, _context: &C) {
        self.total_work += u64::from(task.duration);
    }
}

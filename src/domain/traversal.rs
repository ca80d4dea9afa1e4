//! Depth-first, pre-order walks over an organisation tree
//!
//! Each walk filters which callbacks fire; all output happens through the
//! visitor. Contexts are derived per child with [`child_context`], tasks are
//! positioned against their employee's task list.

use tracing::{debug, instrument, trace};

use crate::domain::context::{child_context, Context, TraversalContext};
use crate::domain::entities::{Employee, Unit};
use crate::domain::visitor::Visitor;

/// Visit every department, employee and task.
pub fn visit_all_units<V>(unit: &Unit, visitor: &mut V)
where
    V: Visitor<TraversalContext> + ?Sized,
{
    visit_all_units_from(unit, visitor, TraversalContext::root())
}

/// Visit departments only. Employees and tasks are never reported.
pub fn visit_all_departments<V>(unit: &Unit, visitor: &mut V)
where
    V: Visitor<TraversalContext> + ?Sized,
{
    visit_all_departments_from(unit, visitor, TraversalContext::root())
}

/// Visit employees only, descending through departments to reach them.
pub fn visit_all_employees<V>(unit: &Unit, visitor: &mut V)
where
    V: Visitor<TraversalContext> + ?Sized,
{
    visit_all_employees_from(unit, visitor, TraversalContext::root())
}

/// Visit tasks only, descending through departments and employees.
pub fn visit_all_tasks<V>(unit: &Unit, visitor: &mut V)
where
    V: Visitor<TraversalContext> + ?Sized,
{
    visit_all_tasks_from(unit, visitor, TraversalContext::root())
}

#[instrument(level = "debug", skip_all, fields(level = context.level()))]
pub fn visit_all_units_from<C, V>(unit: &Unit, visitor: &mut V, context: C)
where
    C: Context,
    V: Visitor<C> + ?Sized,
{
    debug!("walk: all units");
    visitor.begin_walk();
    walk_units(unit, visitor, &context);
}

#[instrument(level = "debug", skip_all, fields(level = context.level()))]
pub fn visit_all_departments_from<C, V>(unit: &Unit, visitor: &mut V, context: C)
where
    C: Context,
    V: Visitor<C> + ?Sized,
{
    debug!("walk: departments");
    visitor.begin_walk();
    walk_departments(unit, visitor, &context);
}

#[instrument(level = "debug", skip_all, fields(level = context.level()))]
pub fn visit_all_employees_from<C, V>(unit: &Unit, visitor: &mut V, context: C)
where
    C: Context,
    V: Visitor<C> + ?Sized,
{
    debug!("walk: employees");
    visitor.begin_walk();
    walk_employees(unit, visitor, &context);
}

#[instrument(level = "debug", skip_all, fields(level = context.level()))]
pub fn visit_all_tasks_from<C, V>(unit: &Unit, visitor: &mut V, context: C)
where
    C: Context,
    V: Visitor<C> + ?Sized,
{
    debug!("walk: tasks");
    visitor.begin_walk();
    walk_tasks(unit, visitor, &context);
}

fn walk_units<C: Context, V: Visitor<C> + ?Sized>(unit: &Unit, visitor: &mut V, context: &C) {
    match unit {
        Unit::Department(department) => {
            visitor.visit_department(department, context);
            let total = department.children.len();
            for (index, child) in department.children.iter().enumerate() {
                walk_units(child, visitor, &child_context(context, index, total));
            }
        }
        Unit::Employee(employee) => {
            visitor.visit_employee(employee, context);
            emit_tasks(employee, visitor, context);
        }
        Unit::Other => trace!(level = context.level(), "skipping unknown unit"),
    }
}

fn walk_departments<C: Context, V: Visitor<C> + ?Sized>(
    unit: &Unit,
    visitor: &mut V,
    context: &C,
) {
    if let Unit::Department(department) = unit {
        visitor.visit_department(department, context);
        let total = department.children.len();
        for (index, child) in department.children.iter().enumerate() {
            walk_departments(child, visitor, &child_context(context, index, total));
        }
    }
}

fn walk_employees<C: Context, V: Visitor<C> + ?Sized>(unit: &Unit, visitor: &mut V, context: &C) {
    match unit {
        Unit::Department(department) => {
            let total = department.children.len();
            for (index, child) in department.children.iter().enumerate() {
                walk_employees(child, visitor, &child_context(context, index, total));
            }
        }
        Unit::Employee(employee) => visitor.visit_employee(employee, context),
        Unit::Other => trace!(level = context.level(), "skipping unknown unit"),
    }
}

fn walk_tasks<C: Context, V: Visitor<C> + ?Sized>(unit: &Unit, visitor: &mut V, context: &C) {
    match unit {
        Unit::Department(department) => {
            let total = department.children.len();
            for (index, child) in department.children.iter().enumerate() {
                walk_tasks(child, visitor, &child_context(context, index, total));
            }
        }
        Unit::Employee(employee) => emit_tasks(employee, visitor, context),
        Unit::Other => trace!(level = context.level(), "skipping unknown unit"),
    }
}

// Tasks sit one level below their employee, positioned in the task list.
fn emit_tasks<C: Context, V: Visitor<C> + ?Sized>(employee: &Employee, visitor: &mut V, context: &C) {
    let total = employee.tasks.len();
    for (index, task) in employee.tasks.iter().enumerate() {
        visitor.visit_task(task, &child_context(context, index, total));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::{Department, Employee, Role, Task};

    #[derive(Debug, Default)]
    struct Recorder {
        events: Vec<(String, TraversalContext)>,
        walks: usize,
    }

    impl Visitor for Recorder {
        fn begin_walk(&mut self) {
            self.walks += 1;
        }

        fn visit_department(&mut self, department: &Department, context: &TraversalContext) {
            self.events.push((format!("D:{}", department.name), *context));
        }

        fn visit_employee(&mut self, employee: &Employee, context: &TraversalContext) {
            self.events.push((format!("E:{}", employee.name), *context));
        }

        fn visit_task(&mut self, task: &Task, context: &TraversalContext) {
            self.events.push((format!("T:{}", task.id), *context));
        }
    }

    fn fixture() -> Unit {
        Department::new("HQ")
            .with_child(Employee::new("A", Role::Worker).with_tasks([Task::new(1, 5), Task::new(2, 3)]))
            .with_child(
                Department::new("Eng")
                    .with_child(Employee::new("B", Role::Supervisor).with_task(Task::new(3, 2))),
            )
            .into()
    }

    fn names(recorder: &Recorder) -> Vec<&str> {
        recorder.events.iter().map(|(n, _)| n.as_str()).collect()
    }

    #[test]
    fn given_tree_when_visiting_all_units_then_reports_pre_order() {
        let mut recorder = Recorder::default();
        visit_all_units(&fixture(), &mut recorder);

        assert_eq!(
            names(&recorder),
            vec!["D:HQ", "E:A", "T:1", "T:2", "D:Eng", "E:B", "T:3"]
        );
        assert_eq!(recorder.walks, 1);
    }

    #[test]
    fn given_tree_when_visiting_all_units_then_contexts_follow_sibling_positions() {
        let mut recorder = Recorder::default();
        visit_all_units(&fixture(), &mut recorder);

        let contexts: Vec<TraversalContext> = recorder.events.iter().map(|(_, c)| *c).collect();
        assert_eq!(
            contexts,
            vec![
                TraversalContext::new(0, false),
                TraversalContext::new(1, false),
                TraversalContext::new(2, false),
                TraversalContext::new(2, true),
                TraversalContext::new(1, true),
                TraversalContext::new(2, true),
                TraversalContext::new(3, true),
            ]
        );
    }

    #[test]
    fn given_tree_when_visiting_departments_then_skips_employees_and_tasks() {
        let mut recorder = Recorder::default();
        visit_all_departments(&fixture(), &mut recorder);
        assert_eq!(names(&recorder), vec!["D:HQ", "D:Eng"]);
        assert_eq!(recorder.events[1].1, TraversalContext::new(1, true));
    }

    #[test]
    fn given_tree_when_visiting_employees_then_skips_departments() {
        let mut recorder = Recorder::default();
        visit_all_employees(&fixture(), &mut recorder);
        assert_eq!(names(&recorder), vec!["E:A", "E:B"]);
        assert_eq!(recorder.events[1].1, TraversalContext::new(2, true));
    }

    #[test]
    fn given_tree_when_visiting_tasks_then_only_tasks_are_reported() {
        let mut recorder = Recorder::default();
        visit_all_tasks(&fixture(), &mut recorder);
        assert_eq!(names(&recorder), vec!["T:1", "T:2", "T:3"]);
    }

    #[test]
    fn given_empty_department_when_visiting_then_only_department_callback_fires() {
        let mut recorder = Recorder::default();
        visit_all_units(&Department::new("Empty").into(), &mut recorder);
        assert_eq!(names(&recorder), vec!["D:Empty"]);
    }

    #[test]
    fn given_unknown_unit_when_visiting_then_produces_no_callback() {
        let tree: Unit = Department::new("HQ").with_child(Unit::Other).into();
        let mut recorder = Recorder::default();
        visit_all_units(&tree, &mut recorder);
        assert_eq!(names(&recorder), vec!["D:HQ"]);
    }

    #[test]
    fn given_visitor_without_callbacks_when_visiting_then_nothing_happens() {
        struct Silent;
        impl Visitor for Silent {}

        visit_all_units(&fixture(), &mut Silent);
        visit_all_tasks(&fixture(), &mut Silent);
    }
}

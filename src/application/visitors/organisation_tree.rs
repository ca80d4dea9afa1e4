use tracing::trace;

use crate::application::render_organisation::{OrganisationRenderer, Theme};
use crate::application::render_tree::{TreeConfig, TreeRenderer};
use crate::domain::{Context, Department, Employee, Visitor};

/// Builds a multi-line tree report of departments and employees.
///
/// Report text accumulates across walks: running an all-units walk and then
/// a departments walk on the same visitor yields both reports back-to-back.
/// Open-branch state does not carry over, every walk starts with a fresh
/// [`TreeRenderer`].
#[derive(Debug, Clone, Default)]
pub struct OrganisationTreeVisitor {
    organisation: OrganisationRenderer,
    tree: TreeRenderer,
    rendered_tree: String,
}

impl OrganisationTreeVisitor {
    pub fn new(organisation: OrganisationRenderer, tree: TreeConfig) -> Self {
        Self {
            organisation,
            tree: TreeRenderer::new(tree),
            rendered_tree: String::new(),
        }
    }

    /// Visitor without escape codes.
    pub fn plain() -> Self {
        Self::new(OrganisationRenderer::new(Theme::plain()), TreeConfig::plain())
    }

    pub fn rendered_tree(&self) -> &str {
        &self.rendered_tree
    }

    /// Hand out the report so far and start a new, empty one.
    pub fn take_report(&mut self) -> String {
        std::mem::take(&mut self.rendered_tree)
    }

    pub fn into_report(self) -> String {
        self.rendered_tree
    }

    pub fn reset(&mut self) {
        self.rendered_tree.clear();
        self.tree.reset();
    }

    fn add_line(&mut self, line: &str) {
        self.rendered_tree.push_str(line);
        self.rendered_tree.push('\n');
    }
}

impl<C: Context> Visitor<C> for OrganisationTreeVisitor {
    fn begin_walk(&mut self) {
        self.tree.reset();
    }

    fn visit_department(&mut self, department: &Department, context: &C) {
        let label = self.organisation.render_department(department);
        // root has no ancestors and no siblings
        if context.level() == 0 {
            self.add_line(&label);
            return;
        }

        let indent = self.tree.render_indent(context);
        self.add_line(&format!("{indent}{label}"));
        self.tree.update_active_branch_levels(context);
    }

    fn visit_employee(&mut self, employee: &Employee, context: &C) {
        trace!(employee = %employee.name, level = context.level(), "render employee");
        let indent = self.tree.render_indent(context);
        let label = self.organisation.render_employee(employee);
        self.add_line(&format!("{indent}{label}"));
        self.tree.update_active_branch_levels(context);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{
        visit_all_departments, visit_all_employees, visit_all_units, Role, Task, TraversalContext, Unit,
    };

    fn fixture() -> Unit {
        Department::new("HQ")
            .with_child(Employee::new("A", Role::Worker).with_tasks([Task::new(1, 5), Task::new(2, 3)]))
            .with_child(
                Department::new("Eng")
                    .with_child(Employee::new("B", Role::Supervisor).with_task(Task::new(3, 2))),
            )
            .into()
    }

    #[test]
    fn given_tree_when_visiting_all_units_then_renders_indented_report() {
        let mut visitor = OrganisationTreeVisitor::plain();
        visit_all_units(&fixture(), &mut visitor);

        let expected = "\
🏢 HQ
├── 👩‍💻 A ≺🎖️Engineer≻ | 2🛠️
└── 🏢 Eng
    └── 👩‍⚕️ B ≺🎖️Supervisor≻ | 1🛠️
";
        assert_eq!(visitor.rendered_tree(), expected);
    }

    #[test]
    fn given_root_marked_last_when_visiting_then_has_no_prefix() {
        let mut visitor = OrganisationTreeVisitor::plain();
        Visitor::visit_department(&mut visitor, &Department::new("Root"), &TraversalContext::new(0, true));
        assert_eq!(visitor.rendered_tree(), "🏢 Root\n");
    }

    #[test]
    fn given_two_walks_when_reusing_visitor_then_reports_accumulate() {
        let mut visitor = OrganisationTreeVisitor::plain();
        visit_all_units(&fixture(), &mut visitor);
        visit_all_departments(&fixture(), &mut visitor);

        let report = visitor.take_report();
        assert_eq!(report.lines().count(), 4 + 2);
        assert!(report.ends_with("🏢 HQ\n└── 🏢 Eng\n"));
        assert!(visitor.rendered_tree().is_empty());
    }

    #[test]
    fn given_stale_branches_when_new_walk_begins_then_no_bars_leak() {
        // departments-only walk over a tree whose last child is an employee
        // leaves level 1 open
        let tree: Unit = Department::new("HQ")
            .with_child(Department::new("Eng").with_child(Department::new("Ops")))
            .with_child(Employee::new("A", Role::Worker))
            .into();
        let mut visitor = OrganisationTreeVisitor::plain();
        visit_all_departments(&tree, &mut visitor);
        assert_eq!(visitor.take_report(), "🏢 HQ\n├── 🏢 Eng\n│   └── 🏢 Ops\n");

        let nested: Unit = Department::new("HQ")
            .with_child(Department::new("Eng").with_child(Employee::new("B", Role::Supervisor)))
            .into();
        visit_all_employees(&nested, &mut visitor);
        assert_eq!(visitor.rendered_tree(), "    └── 👩‍⚕️ B ≺🎖️Supervisor≻ | 0🛠️\n");
    }
}

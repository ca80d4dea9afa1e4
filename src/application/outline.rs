/*
Plain structural view of an organisation, built with termtree.
Only departments and employees appear, tasks are summarised per employee.
 */
use termtree::Tree;
use tracing::instrument;

use crate::domain::Unit;

pub trait TreeNodeConvert {
    fn to_tree_string(&self) -> Tree<String>;
}

impl TreeNodeConvert for Unit {
    #[instrument(level = "trace", skip(self))]
    fn to_tree_string(&self) -> Tree<String> {
        match self {
            Unit::Department(department) => {
                let leaves: Vec<_> = department
                    .children
                    .iter()
                    .filter(|c| !matches!(c, Unit::Other))
                    .map(|c| c.to_tree_string())
                    .collect();
                Tree::new(department.name.clone()).with_leaves(leaves)
            }
            Unit::Employee(employee) => Tree::new(format!(
                "{} ({}, {}h)",
                employee.name,
                employee.role,
                employee.workload()
            )),
            Unit::Other => Tree::new("?".to_string()),
        }
    }
}

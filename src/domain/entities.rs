//! Domain entities: the organisation tree

use std::fmt;

use serde::{Deserialize, Serialize};

/// Node of an organisation tree.
///
/// A tree is built once and read afterwards. Every node has exactly one
/// owner, children are kept in the order they were added and that order is
/// significant for traversal and rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Unit {
    Department(Department),
    Employee(Employee),
    /// Node with a `type` this crate does not know. Walks skip it.
    #[serde(other)]
    Other,
}

/// Organisational unit that groups other units.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Department {
    pub name: String,
    #[serde(default)]
    pub children: Vec<Unit>,
}

/// Person in a department together with their assigned tasks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    pub name: String,
    pub role: Role,
    #[serde(default)]
    pub tasks: Vec<Task>,
}

/// Unit of work, duration in hours.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Task {
    pub id: u32,
    pub duration: u32,
}

/// Employee role, stored as a one letter code in documents.
///
/// Codes outside the known set are kept verbatim so they can be rendered
/// through the fallback path instead of failing the load.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Role {
    /// `C`
    Manager,
    /// `B`
    Supervisor,
    /// `A`
    Worker,
    /// `X`
    Contractor,
    Unrecognized(String),
}

impl Role {
    /// Parse a role code or role name, case-insensitive for names.
    pub fn from_code(code: &str) -> Self {
        match code.trim() {
            "C" => Role::Manager,
            "B" => Role::Supervisor,
            "A" => Role::Worker,
            "X" => Role::Contractor,
            other => match other.to_ascii_lowercase().as_str() {
                "manager" => Role::Manager,
                "supervisor" => Role::Supervisor,
                "worker" => Role::Worker,
                "contractor" | "subcontractor" => Role::Contractor,
                _ => Role::Unrecognized(other.to_string()),
            },
        }
    }

    pub fn code(&self) -> &str {
        match self {
            Role::Manager => "C",
            Role::Supervisor => "B",
            Role::Worker => "A",
            Role::Contractor => "X",
            Role::Unrecognized(code) => code,
        }
    }
}

impl From<String> for Role {
    fn from(code: String) -> Self {
        Role::from_code(&code)
    }
}

impl From<&str> for Role {
    fn from(code: &str) -> Self {
        Role::from_code(code)
    }
}

impl From<Role> for String {
    fn from(role: Role) -> Self {
        role.code().to_string()
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl Task {
    pub fn new(id: u32, duration: u32) -> Self {
        Self { id, duration }
    }
}

impl Department {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            children: Vec::new(),
        }
    }

    pub fn with_child(mut self, child: impl Into<Unit>) -> Self {
        self.children.push(child.into());
        self
    }

    pub fn with_children<I, U>(mut self, children: I) -> Self
    where
        I: IntoIterator<Item = U>,
        U: Into<Unit>,
    {
        self.children.extend(children.into_iter().map(Into::into));
        self
    }
}

impl Employee {
    pub fn new(name: impl Into<String>, role: impl Into<Role>) -> Self {
        Self {
            name: name.into(),
            role: role.into(),
            tasks: Vec::new(),
        }
    }

    pub fn with_task(mut self, task: Task) -> Self {
        self.tasks.push(task);
        self
    }

    pub fn with_tasks(mut self, tasks: impl IntoIterator<Item = Task>) -> Self {
        self.tasks.extend(tasks);
        self
    }

    /// Sum of all task durations in hours.
    pub fn workload(&self) -> u64 {
        self.tasks.iter().map(|t| u64::from(t.duration)).sum()
    }
}

impl From<Department> for Unit {
    fn from(department: Department) -> Self {
        Unit::Department(department)
    }
}

impl From<Employee> for Unit {
    fn from(employee: Employee) -> Self {
        Unit::Employee(employee)
    }
}

impl Unit {
    pub fn name(&self) -> Option<&str> {
        match self {
            Unit::Department(d) => Some(&d.name),
            Unit::Employee(e) => Some(&e.name),
            Unit::Other => None,
        }
    }

    /// Number of levels below and including this node. Tasks are not counted.
    pub fn depth(&self) -> usize {
        match self {
            Unit::Department(d) => {
                1 + d.children.iter().map(Unit::depth).max().unwrap_or(0)
            }
            Unit::Employee(_) => 1,
            Unit::Other => 0,
        }
    }

    pub fn department_count(&self) -> usize {
        match self {
            Unit::Department(d) => {
                1 + d.children.iter().map(Unit::department_count).sum::<usize>()
            }
            _ => 0,
        }
    }

    pub fn employee_count(&self) -> usize {
        match self {
            Unit::Department(d) => d.children.iter().map(Unit::employee_count).sum(),
            Unit::Employee(_) => 1,
            Unit::Other => 0,
        }
    }

    pub fn task_count(&self) -> usize {
        match self {
            Unit::Department(d) => d.children.iter().map(Unit::task_count).sum(),
            Unit::Employee(e) => e.tasks.len(),
            Unit::Other => 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("C", Role::Manager)]
    #[case("B", Role::Supervisor)]
    #[case("A", Role::Worker)]
    #[case("X", Role::Contractor)]
    #[case("manager", Role::Manager)]
    #[case("Worker", Role::Worker)]
    #[case("Z", Role::Unrecognized("Z".to_string()))]
    fn given_role_code_when_parsing_then_maps_to_role(#[case] code: &str, #[case] expected: Role) {
        assert_eq!(Role::from_code(code), expected);
    }

    #[test]
    fn given_unrecognized_role_when_converting_back_then_keeps_code() {
        let role = Role::from_code("Q");
        assert_eq!(role.code(), "Q");
        assert_eq!(String::from(role), "Q");
    }

    #[test]
    fn given_nested_tree_when_counting_then_counts_each_kind() {
        let tree: Unit = Department::new("HQ")
            .with_child(Employee::new("A", "A").with_tasks([Task::new(1, 5), Task::new(2, 3)]))
            .with_child(
                Department::new("Eng").with_child(Employee::new("B", "B").with_task(Task::new(3, 2))),
            )
            .into();

        assert_eq!(tree.department_count(), 2);
        assert_eq!(tree.employee_count(), 2);
        assert_eq!(tree.task_count(), 3);
        assert_eq!(tree.depth(), 3);
        assert_eq!(tree.name(), Some("HQ"));
    }

    #[test]
    fn given_employee_with_tasks_when_summing_workload_then_adds_durations() {
        let employee = Employee::new("A", Role::Worker).with_tasks([Task::new(1, 5), Task::new(2, 3)]);
        assert_eq!(employee.workload(), 8);
    }

    #[test]
    fn given_empty_department_when_measuring_depth_then_is_one() {
        let tree: Unit = Department::new("Empty").into();
        assert_eq!(tree.depth(), 1);
        assert_eq!(tree.employee_count(), 0);
    }
}

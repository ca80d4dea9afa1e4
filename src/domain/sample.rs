//! Built-in sample organisation

use crate::domain::entities::{Department, Employee, Role, Task, Unit};

/// Sample organisation used when no data file is configured.
///
/// Task ids are sequential so every run renders the same output.
pub fn push_based() -> Unit {
    let mut ids = 100..;
    let mut tasks = |durations: &[u32]| -> Vec<Task> {
        durations
            .iter()
            .map(|&d| Task::new(ids.next().unwrap_or_default(), d))
            .collect()
    };

    let leadership = Department::new("Leadership 👨‍💼").with_children([
        Employee::new("Maren Holt", Role::Manager).with_tasks(tasks(&[12, 7])),
        Employee::new("Jonas Holt", Role::Manager).with_tasks(tasks(&[6, 3])),
        Employee::new("Ilse Rapp", Role::Supervisor).with_tasks(tasks(&[9])),
    ]);

    let engineering = Department::new("Engineering 💻").with_children([
        Employee::new("Jan Lindqvist", Role::Supervisor).with_tasks(tasks(&[5, 4])),
        Employee::new("Ada Romer", Role::Worker).with_tasks(tasks(&[8])),
        Employee::new("Chris Holden", Role::Worker).with_tasks(tasks(&[8, 5])),
        Employee::new("Edgar Bosch", Role::Worker).with_tasks(tasks(&[7])),
        Employee::new("Elena Marek", Role::Worker).with_tasks(tasks(&[7, 2])),
        Employee::new("Enzo Jahn", Role::Worker).with_tasks(tasks(&[3, 6])),
        Employee::new("Hanna Skov", Role::Worker).with_tasks(tasks(&[2, 7])),
        Employee::new("Kiril Karlov", Role::Worker).with_tasks(tasks(&[9])),
        Employee::new("Lars Brink", Role::Worker).with_tasks(tasks(&[6, 5])),
        Employee::new("Mika Berg", Role::Worker).with_tasks(tasks(&[5, 4])),
        Employee::new("Ondrej Svoboda", Role::Worker).with_tasks(tasks(&[4, 3])),
        Employee::new("Vojtech Malek", Role::Contractor).with_tasks(tasks(&[3, 5])),
        Employee::new("Manu Matz", Role::Contractor).with_tasks(tasks(&[6, 3, 2])),
        Employee::new("Maria Korn", Role::Contractor).with_tasks(tasks(&[7])),
        Employee::new("Stefan Baum", Role::Contractor).with_tasks(tasks(&[4, 5])),
        Employee::new("Tanja Ulm", Role::Contractor).with_tasks(tasks(&[6, 3])),
        Employee::new("Alex Licht", Role::Contractor).with_tasks(tasks(&[8])),
    ]);

    let marketing = Department::new("Marketing 📢").with_children([
        Employee::new("Alex Schwarz", Role::Supervisor).with_tasks(tasks(&[5, 2])),
        Employee::new("Iulia Enes", Role::Worker).with_tasks(tasks(&[6, 3])),
    ]);

    Department::new("Push-Based HQ 🏢")
        .with_children([leadership, engineering, marketing])
        .into()
}

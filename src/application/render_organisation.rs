//! Labels for departments and employees
//!
//! The renderer knows nothing about tree position; the same instance serves
//! every node of a walk.
//!
//! ```text
//! 🏢 Engineering
//! 👩‍💼 Alice ≺🎖️Manager≻ | 2🛠️
//! ```

use crate::application::style::Paint;
use crate::domain::{Department, Employee, Role};

/// Styles per label fragment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrganisationStyle {
    pub department: Paint,
    pub employee: Paint,
    pub role: Paint,
    pub task: Paint,
    pub separator: Paint,
}

impl Default for OrganisationStyle {
    fn default() -> Self {
        Self {
            department: Paint::BoldGray,
            employee: Paint::Bold,
            role: Paint::Yellow,
            task: Paint::BrightGreen,
            separator: Paint::Dim,
        }
    }
}

impl OrganisationStyle {
    pub fn plain() -> Self {
        Self {
            department: Paint::Plain,
            employee: Paint::Plain,
            role: Paint::Plain,
            task: Paint::Plain,
            separator: Paint::Plain,
        }
    }
}

/// Glyphs and brackets decorating labels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrganisationDecoration {
    pub department: String,
    pub manager: String,
    pub supervisor: String,
    pub worker: String,
    /// Used for every role without a glyph of its own.
    pub unknown_employee: String,
    pub task: String,
    pub task_separator: String,
    pub role_start: String,
    pub role_end: String,
}

impl Default for OrganisationDecoration {
    fn default() -> Self {
        Self {
            department: "🏢".into(),
            manager: "👩‍💼".into(),
            supervisor: "👩‍⚕️".into(),
            worker: "👩‍💻".into(),
            unknown_employee: "👤".into(),
            task: "🛠️".into(),
            task_separator: "|".into(),
            role_start: "≺🎖️".into(),
            role_end: "≻".into(),
        }
    }
}

impl OrganisationDecoration {
    pub fn employee_glyph(&self, role: &Role) -> &str {
        match role {
            Role::Manager => &self.manager,
            Role::Supervisor => &self.supervisor,
            Role::Worker => &self.worker,
            Role::Contractor | Role::Unrecognized(_) => &self.unknown_employee,
        }
    }
}

/// Text shown for each role.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoleLabels {
    pub manager: String,
    pub supervisor: String,
    pub worker: String,
    pub contractor: String,
    pub unknown: String,
}

impl Default for RoleLabels {
    fn default() -> Self {
        Self {
            manager: "Manager".into(),
            supervisor: "Supervisor".into(),
            worker: "Engineer".into(),
            contractor: "Contractor".into(),
            unknown: "Unknown Role".into(),
        }
    }
}

impl RoleLabels {
    pub fn label(&self, role: &Role) -> &str {
        match role {
            Role::Manager => &self.manager,
            Role::Supervisor => &self.supervisor,
            Role::Worker => &self.worker,
            Role::Contractor => &self.contractor,
            Role::Unrecognized(_) => &self.unknown,
        }
    }
}

/// Complete label configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Theme {
    pub style: OrganisationStyle,
    pub decoration: OrganisationDecoration,
    pub roles: RoleLabels,
}

impl Theme {
    pub fn styled() -> Self {
        Self::default()
    }

    /// Same glyphs, no escape codes.
    pub fn plain() -> Self {
        Self {
            style: OrganisationStyle::plain(),
            ..Self::default()
        }
    }
}

/// Stateless label formatter.
#[derive(Debug, Clone, Default)]
pub struct OrganisationRenderer {
    theme: Theme,
}

impl OrganisationRenderer {
    pub fn new(theme: Theme) -> Self {
        Self { theme }
    }

    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    pub fn render_department(&self, department: &Department) -> String {
        let deco = &self.theme.decoration;
        self.theme
            .style
            .department
            .apply(&format!("{} {}", deco.department, department.name))
    }

    pub fn render_employee(&self, employee: &Employee) -> String {
        let theme = &self.theme;
        let deco = &theme.decoration;

        let person = theme.style.employee.apply(&format!(
            "{} {}",
            deco.employee_glyph(&employee.role),
            employee.name
        ));
        let role = theme.style.role.apply(&format!(
            "{}{}{}",
            deco.role_start,
            theme.roles.label(&employee.role),
            deco.role_end
        ));
        let separator = theme.style.separator.apply(&deco.task_separator);
        let tasks = theme
            .style
            .task
            .apply(&format!("{}{}", employee.tasks.len(), deco.task));

        format!("{person} {role} {separator} {tasks}")
    }
}

//! End-to-end report rendering from organisation documents.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use orgtree::application::{OrganisationTreeVisitor, ReportService, Scope};
use orgtree::domain::{
    visit_all_units, visit_all_units_from, Department, Employee, Role, TraversalContext, Unit,
};
use orgtree::infrastructure::traits::RealFileSystem;
use orgtree::infrastructure::OrganisationLoader;
use orgtree::util::testing;

#[ctor::ctor]
fn init() {
    testing::init_test_setup();
}

fn resource(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests/resources/organisations")
        .join(name)
}

fn load(name: &str) -> Unit {
    OrganisationLoader::new(Arc::new(RealFileSystem))
        .load(&resource(name))
        .expect("fixture loads")
}

#[test]
fn given_small_organisation_when_reporting_then_prints_total_and_both_trees() {
    let report = ReportService::plain().full_report(&load("small.toml"));

    assert_eq!(report.total_duration, 10);
    assert_eq!(
        report.to_string(),
        "Total Task Duration: 10 hours\n\
         🏢 HQ\n\
         ├── 👩‍💻 A ≺🎖️Engineer≻ | 2🛠️\n\
         └── 🏢 Eng\n    \
         └── 👩‍⚕️ B ≺🎖️Supervisor≻ | 1🛠️\n\
         🏢 HQ\n\
         └── 🏢 Eng\n"
    );
}

#[test]
fn given_small_organisation_when_reporting_then_node_prefixes_follow_position() {
    let text = ReportService::plain().render(&load("small.toml"), Scope::Units);
    let lines: Vec<&str> = text.lines().collect();

    assert!(lines[0].starts_with("🏢 HQ"));
    assert!(lines[1].starts_with("├── ") && lines[1].contains(" A "));
    assert!(lines[2].starts_with("└── ") && lines[2].ends_with("Eng"));
    assert!(lines[3].starts_with("    └── ") && lines[3].contains(" B "));
}

#[test]
fn given_unknown_role_and_unit_type_when_reporting_then_falls_back_quietly() {
    let text = ReportService::plain().render(&load("unknown_role.toml"), Scope::Units);

    assert_eq!(
        text,
        "🏢 Ops\n\
         ├── 👤 Z ≺🎖️Unknown Role≻ | 0🛠️\n\
         └── 👤 K ≺🎖️Contractor≻ | 1🛠️\n"
    );
}

#[test]
fn given_departments_scope_when_rendering_then_no_employee_lines() {
    let text = ReportService::plain().render(&load("small.toml"), Scope::Departments);
    assert_eq!(text, "🏢 HQ\n└── 🏢 Eng\n");
}

#[test]
fn given_root_marked_last_when_rendering_then_root_has_no_prefix() {
    let org: Unit = Department::new("HQ")
        .with_child(Employee::new("A", Role::Manager))
        .into();
    let mut visitor = OrganisationTreeVisitor::plain();

    visit_all_units_from(&org, &mut visitor, TraversalContext::new(0, true));

    let first = visitor.rendered_tree().lines().next().unwrap_or_default().to_string();
    assert_eq!(first, "🏢 HQ");
}

#[test]
fn given_styled_service_when_reporting_then_output_carries_escape_codes() {
    colored::control::set_override(true);
    let text = ReportService::default().render(&load("small.toml"), Scope::Units);
    colored::control::unset_override();

    assert!(text.contains('\u{1b}'));
}

#[test]
fn given_one_visitor_when_walking_twice_then_reports_accumulate() {
    let org = load("small.toml");
    let mut visitor = OrganisationTreeVisitor::plain();

    visit_all_units(&org, &mut visitor);
    let once = visitor.rendered_tree().to_string();
    visit_all_units(&org, &mut visitor);

    assert_eq!(visitor.rendered_tree(), format!("{once}{once}"));
}

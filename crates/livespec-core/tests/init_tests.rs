//! Tests for fresh initialization

use livespec_core::{InitOptions, initialize, is_initialized};
use livespec_fs::NormalizedPath;
use livespec_test_utils::TestProject;
use pretty_assertions::assert_eq;
use rstest::rstest;

fn path(project: &TestProject, rel: &str) -> NormalizedPath {
    NormalizedPath::new(project.root()).join(rel)
}

fn init(project: &TestProject) -> InitOptions {
    InitOptions::new(project.root())
}

#[rstest]
#[case("livespec")]
#[case("livespec/projects")]
#[case("livespec/projects/my-project")]
#[case("livespec/plans")]
#[case("livespec/plans/active")]
#[case("livespec/plans/archived")]
fn test_creates_directory(#[case] dir: &str) {
    let project = TestProject::new();
    let result = initialize(&init(&project)).unwrap();

    assert!(project.path(dir).is_dir());
    assert!(result.created.contains(&path(&project, dir)));
}

#[test]
fn test_fresh_init_reports_everything_created() {
    let project = TestProject::new();
    let result = initialize(&init(&project).with_project_name("my-app")).unwrap();

    assert!(result.created.contains(&path(&project, "livespec/livespec.md")));
    assert!(result.created.contains(&path(
        &project,
        "livespec/projects/my-app/project.md"
    )));
    assert_eq!(result.created.len(), 8);
    assert!(result.skipped.is_empty());
    assert!(result.updated.is_empty());
    assert!(result.errors.is_empty());
    assert!(result.is_success());
}

#[test]
fn test_spec_file_is_stamped_with_current_version() {
    let project = TestProject::new();
    initialize(&init(&project)).unwrap();

    project.assert_file_contains(
        "livespec/livespec.md",
        &format!(
            "<!-- livespec-version: {} -->",
            livespec_core::current_version()
        ),
    );
    project.assert_file_contains("livespec/livespec.md", "## Philosophy");
    project.assert_file_not_contains("livespec/livespec.md", "{{VERSION}}");
}

#[test]
fn test_project_file_from_template() {
    let project = TestProject::new();
    initialize(&init(&project).with_project_name("my-app")).unwrap();

    project.assert_file_contains("livespec/projects/my-app/project.md", "# Project Name");
    project.assert_file_contains("livespec/projects/my-app/project.md", "PRJ");
}

#[test]
fn test_second_init_skips_everything() {
    let project = TestProject::new();
    initialize(&init(&project)).unwrap();
    let result = initialize(&init(&project)).unwrap();

    assert!(result.created.is_empty());
    assert_eq!(
        result.skipped,
        vec![
            path(&project, "livespec/livespec.md"),
            path(&project, "livespec/projects/my-project/project.md"),
        ]
    );
    assert!(result.updated.is_empty());
}

#[test]
fn test_skip_existing_keeps_edits() {
    let project = TestProject::new();
    initialize(&init(&project)).unwrap();
    project.write("livespec/livespec.md", "# Custom");

    let result = initialize(&init(&project).with_skip_existing(true)).unwrap();

    assert_eq!(project.read("livespec/livespec.md"), "# Custom");
    assert!(result.skipped.contains(&path(&project, "livespec/livespec.md")));
}

#[test]
fn test_overwrite_replaces_edits() {
    let project = TestProject::new();
    initialize(&init(&project)).unwrap();
    project.write("livespec/livespec.md", "# Custom");

    let result = initialize(&init(&project).with_skip_existing(false)).unwrap();

    project.assert_file_contains("livespec/livespec.md", "## Philosophy");
    assert!(result.updated.contains(&path(&project, "livespec/livespec.md")));
    assert!(result.updated.contains(&path(
        &project,
        "livespec/projects/my-project/project.md"
    )));
}

#[test]
fn test_second_project_shares_base_files() {
    let project = TestProject::new();
    initialize(&init(&project).with_project_name("first")).unwrap();

    let result = initialize(&init(&project).with_project_name("second")).unwrap();

    project.assert_file_exists("livespec/projects/second/project.md");
    assert!(result.skipped.contains(&path(&project, "livespec/livespec.md")));
    assert_eq!(
        result.created,
        vec![
            path(&project, "livespec/projects/second"),
            path(&project, "livespec/projects/second/project.md"),
        ]
    );
}

#[test]
fn test_defaults_do_not_touch_root_files() {
    let project = TestProject::new();
    project.write("CLAUDE.md", "# Original");
    project.write("AGENTS.md", "# Agents");

    initialize(&init(&project)).unwrap();

    assert_eq!(project.read("CLAUDE.md"), "# Original");
    assert_eq!(project.read("AGENTS.md"), "# Agents");
    project.assert_file_not_exists(".claude");
}

#[test]
fn test_is_initialized_after_init() {
    let project = TestProject::new();
    assert!(!is_initialized(project.root()));

    initialize(&init(&project)).unwrap();
    assert!(is_initialized(project.root()));
}

#[test]
fn test_directory_failures_are_collected() {
    let project = TestProject::new();
    project.write("livespec", "a file where the directory should be");

    let result = initialize(&init(&project)).unwrap();

    assert!(!result.is_success());
    assert!(result.created.is_empty());
    assert!(
        result
            .errors
            .iter()
            .any(|e| e.starts_with("Failed to create directory"))
    );
    assert!(
        result
            .errors
            .iter()
            .any(|e| e.starts_with("Failed to write file"))
    );
}

#[test]
fn test_result_serializes_to_json() {
    let project = TestProject::new();
    let result = initialize(&init(&project)).unwrap();

    let json = serde_json::to_value(&result).unwrap();
    assert_eq!(json["created"].as_array().unwrap().len(), result.created.len());
    assert!(json["errors"].as_array().unwrap().is_empty());
}

use carver::error::Error;
use carver::materializer::{materialize, materialize_node};
use carver::plan::{DirectoryPlan, FilePlan, Plan};
use serde_json::json;
use std::fs;
use tempfile::TempDir;

fn sample_plan() -> Plan {
    Plan::Directory(DirectoryPlan::new(
        "proj",
        vec![
            Plan::Directory(DirectoryPlan::new("src", Vec::new())),
            Plan::File(FilePlan::new("README.md", None)),
        ],
    ))
}

#[test]
fn test_materialize_end_to_end() {
    let temp_dir = TempDir::new().unwrap();

    materialize(&sample_plan(), temp_dir.path()).unwrap();

    let proj = temp_dir.path().join("proj");
    assert!(proj.is_dir());
    assert!(proj.join("src").is_dir());
    assert!(fs::read_dir(proj.join("src")).unwrap().next().is_none());

    let readme = proj.join("README.md");
    assert!(readme.is_file());
    assert_eq!(fs::read_to_string(readme).unwrap(), "");
}

#[test]
fn test_materialize_writes_literal_content() {
    let temp_dir = TempDir::new().unwrap();
    let plan = Plan::Directory(DirectoryPlan::new(
        "proj",
        vec![
            Plan::File(FilePlan::new("README.md", Some(json!("# Title\n")))),
            Plan::File(FilePlan::new("setup.py", Some(json!({"content": "import os\n"})))),
        ],
    ));

    materialize(&plan, temp_dir.path()).unwrap();

    let proj = temp_dir.path().join("proj");
    assert_eq!(fs::read_to_string(proj.join("README.md")).unwrap(), "# Title\n");
    assert_eq!(fs::read_to_string(proj.join("setup.py")).unwrap(), "import os\n");
}

#[test]
fn test_existing_directory_is_a_path_conflict() {
    let temp_dir = TempDir::new().unwrap();
    let existing = temp_dir.path().join("proj");
    fs::create_dir(&existing).unwrap();
    fs::write(existing.join("keep.txt"), "precious").unwrap();

    let err = materialize(&sample_plan(), temp_dir.path()).unwrap_err();
    match err {
        Error::PathConflictError { path } => assert!(path.ends_with("proj")),
        _ => panic!("Expected PathConflictError variant"),
    }

    // The pre-existing entry is untouched
    assert_eq!(fs::read_to_string(existing.join("keep.txt")).unwrap(), "precious");
}

#[test]
fn test_existing_file_is_a_path_conflict() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join("notes.txt"), "old").unwrap();

    let plan = Plan::File(FilePlan::new("notes.txt", Some(json!("new"))));

    assert!(matches!(
        materialize(&plan, temp_dir.path()),
        Err(Error::PathConflictError { .. })
    ));
    assert_eq!(fs::read_to_string(temp_dir.path().join("notes.txt")).unwrap(), "old");
}

#[test]
fn test_no_rollback_of_created_siblings() {
    let temp_dir = TempDir::new().unwrap();
    let plan = Plan::Directory(DirectoryPlan::new(
        "proj",
        vec![
            Plan::Directory(DirectoryPlan::new("src", Vec::new())),
            Plan::Directory(DirectoryPlan::new("src", Vec::new())),
        ],
    ));

    assert!(materialize(&plan, temp_dir.path()).is_err());

    // Entries created before the failure are left in place
    assert!(temp_dir.path().join("proj").is_dir());
    assert!(temp_dir.path().join("proj/src").is_dir());
}

#[test]
fn test_non_recursive_creates_only_the_node() {
    let temp_dir = TempDir::new().unwrap();

    materialize_node(&sample_plan(), temp_dir.path(), false).unwrap();

    let proj = temp_dir.path().join("proj");
    assert!(proj.is_dir());
    assert!(fs::read_dir(&proj).unwrap().next().is_none());
}

#[test]
fn test_materialized_tree_matches_expected_fixture() {
    let expected_dir = TempDir::new().unwrap();
    let expected = expected_dir.path().join("proj");
    fs::create_dir(&expected).unwrap();
    fs::create_dir(expected.join("src")).unwrap();
    fs::create_dir(expected.join("docs")).unwrap();
    fs::write(expected.join("README.md"), "# proj\n").unwrap();
    fs::write(expected.join("src/main.py"), "").unwrap();

    let plan = Plan::Directory(DirectoryPlan::new(
        "proj",
        vec![
            Plan::Directory(DirectoryPlan::new("docs", Vec::new())),
            Plan::Directory(DirectoryPlan::new(
                "src",
                vec![Plan::File(FilePlan::new("main.py", None))],
            )),
            Plan::File(FilePlan::new("README.md", Some(json!("# proj\n")))),
        ],
    ));

    let actual_dir = TempDir::new().unwrap();
    materialize(&plan, actual_dir.path()).unwrap();

    assert!(!dir_diff::is_different(expected_dir.path(), actual_dir.path()).unwrap());
}

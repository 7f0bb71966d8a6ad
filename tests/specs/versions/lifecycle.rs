//! Version bookkeeping specs

use crate::prelude::*;

#[test]
fn list_creates_empty_file() {
    let temp = Project::empty();

    temp.baleen()
        .args(&["list"])
        .passes()
        .stdout_eq("No versions migrated\n");

    assert_eq!(temp.read(VERSIONS_FILE), "");
}

#[test]
fn add_appends_in_order() {
    let temp = Project::empty();

    temp.baleen().args(&["add", "v1"]).passes().stdout_eq("Migrated v1\n");
    temp.baleen().args(&["add", "v3"]).passes();
    temp.baleen().args(&["add", "v2"]).passes();

    assert_eq!(temp.read(VERSIONS_FILE), "v1\nv3\nv2");
    temp.baleen()
        .args(&["list"])
        .passes()
        .stdout_eq("v1\nv3\nv2\n");
}

#[test]
fn add_twice_is_noop() {
    let temp = Project::empty();
    temp.file(VERSIONS_FILE, "v1\nv2");

    temp.baleen()
        .args(&["add", "v1"])
        .passes()
        .stdout_eq("Already migrated: v1\n");
    assert_eq!(temp.read(VERSIONS_FILE), "v1\nv2");
}

#[test]
fn remove_keeps_remaining_order() {
    let temp = Project::empty();
    temp.file(VERSIONS_FILE, "v1\nv2\nv3\nv4\nv5");

    temp.baleen()
        .args(&["remove", "v3"])
        .passes()
        .stdout_eq("Removed v3\n");
    assert_eq!(temp.read(VERSIONS_FILE), "v1\nv2\nv4\nv5");

    temp.baleen()
        .args(&["remove", "v3"])
        .passes()
        .stdout_eq("Not migrated: v3\n");
    assert_eq!(temp.read(VERSIONS_FILE), "v1\nv2\nv4\nv5");
}

#[test]
fn blank_lines_are_ignored() {
    let temp = Project::empty();
    temp.file(VERSIONS_FILE, "v1\n\n  \nv2\n");

    temp.baleen().args(&["list"]).passes().stdout_eq("v1\nv2\n");
}

#[test]
fn status_reports_migration_state() {
    let temp = Project::empty();
    temp.file(VERSIONS_FILE, "v1");

    temp.baleen()
        .args(&["status", "v1"])
        .passes()
        .stdout_eq("v1: migrated\n");
    temp.baleen()
        .args(&["status", "v2"])
        .passes()
        .stdout_eq("v2: pending\n");
}

#[test]
fn reset_replaces_contents() {
    let temp = Project::empty();
    temp.file(VERSIONS_FILE, "old1\nold2");

    temp.baleen()
        .args(&["reset", "v1", "v2"])
        .passes()
        .stdout_eq("Stored 2 versions\n");
    assert_eq!(temp.read(VERSIONS_FILE), "v1\nv2");

    temp.baleen()
        .args(&["reset"])
        .passes()
        .stdout_eq("Stored 0 versions\n");
    assert_eq!(temp.read(VERSIONS_FILE), "");
}

#[test]
fn list_json_output() {
    let temp = Project::empty();
    temp.file(VERSIONS_FILE, "v1\nv2");

    temp.baleen()
        .args(&["list", "--output", "json"])
        .passes()
        .stdout_eq("[\n  \"v1\",\n  \"v2\"\n]\n");
}

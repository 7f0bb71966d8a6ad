//! Error reporting specs

use crate::prelude::*;

#[test]
fn version_file_is_directory() {
    let temp = Project::empty();
    temp.dir_at(VERSIONS_FILE);

    temp.baleen()
        .args(&["list"])
        .fails()
        .stderr_has("error: expected path \".baleen_versions\" to be a file but it is a \"dir\"")
        .stderr_has("suggestions:");
}

#[test]
fn blank_version_id_rejected() {
    let temp = Project::empty();

    temp.baleen()
        .args(&["add", "  "])
        .fails()
        .stderr_has("version id cannot be blank");
    assert!(!temp.exists(VERSIONS_FILE));
}

#[test]
fn file_outside_project_rejected() {
    let temp = Project::empty();

    temp.baleen()
        .args(&["--file", "../escape", "list"])
        .fails()
        .stderr_has("path escapes filesystem root");
}

#[test]
fn invalid_config_reported() {
    let temp = Project::empty();
    temp.file("baleen.toml", "[storage]\nfiel = \"x\"\n");

    temp.baleen()
        .args(&["list"])
        .fails()
        .stderr_has("invalid config");
}

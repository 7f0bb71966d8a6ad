//! Help output specs

use crate::prelude::*;

#[test]
fn help_lists_commands() {
    let temp = Project::empty();
    temp.baleen()
        .args(&["--help"])
        .passes()
        .stdout_has("list")
        .stdout_has("add")
        .stdout_has("remove")
        .stdout_has("status")
        .stdout_has("reset");
}

#[test]
fn help_does_not_create_version_file() {
    let temp = Project::empty();
    temp.baleen().args(&["--help"]).passes();
    assert!(!temp.exists(VERSIONS_FILE));
}

#[test]
fn missing_subcommand_fails() {
    let temp = Project::empty();
    temp.baleen().args(&[]).fails().stderr_has("Usage");
}

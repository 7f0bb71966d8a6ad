//! Version file location specs

use crate::prelude::*;

#[test]
fn file_flag_overrides_default() {
    let temp = Project::empty();

    temp.baleen()
        .args(&["--file", "db/versions.txt", "add", "v1"])
        .passes();

    assert_eq!(temp.read("db/versions.txt"), "v1");
    assert!(!temp.exists(VERSIONS_FILE));
}

#[test]
fn config_file_sets_location() {
    let temp = Project::empty();
    temp.file("baleen.toml", "[storage]\nfile = \"state/migrated\"\n");

    temp.baleen().args(&["add", "v1"]).passes();

    assert_eq!(temp.read("state/migrated"), "v1");
}

#[test]
fn file_flag_beats_config() {
    let temp = Project::empty();
    temp.file("baleen.toml", "[storage]\nfile = \"state/migrated\"\n");

    temp.baleen()
        .args(&["add", "v1", "--file", "other"])
        .passes();

    assert_eq!(temp.read("other"), "v1");
    assert!(!temp.exists("state/migrated"));
}

#[test]
fn dir_flag_selects_project() {
    let temp = Project::empty();
    temp.dir_at("nested");
    let nested = temp.path().join("nested");

    temp.baleen()
        .args(&["--dir", nested.to_str().unwrap(), "add", "v1"])
        .passes();

    assert_eq!(temp.read("nested/.baleen_versions"), "v1");
}

#[test]
fn explicit_config_path() {
    let temp = Project::empty();
    let config = temp.file("conf/custom.toml", "[storage]\nfile = \"tracked\"\n");

    temp.baleen()
        .args(&["--config", config.to_str().unwrap(), "add", "v9"])
        .passes();

    assert_eq!(temp.read("tracked"), "v9");
}

//! CLI integration tests.

use std::io::Write;

use assert_cmd::Command;
use predicates::prelude::*;

const FIXTURE: &str = r#"{
    "name": "Landing",
    "nodes": [
        { "id": "1:1", "name": "Primary Button", "type": "FRAME", "text": "Submit" },
        { "id": "1:2", "name": "Status Badge", "type": "FRAME", "text": "Active" }
    ]
}"#;

fn fixture_file() -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(FIXTURE.as_bytes()).unwrap();
    file
}

#[test]
fn generate_emits_markup_and_summary() {
    let file = fixture_file();

    Command::cargo_bin("sprig")
        .unwrap()
        .args(["generate", "--file"])
        .arg(file.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("ui-button-primary"))
        .stdout(predicate::str::contains("ui-badge"))
        .stdout(predicate::str::contains("Components used:"))
        .stdout(predicate::str::contains(
            r#"import { Button, Badge } from "@sprig/ui";"#,
        ));
}

#[test]
fn generate_flags_disable_sections() {
    let file = fixture_file();

    Command::cargo_bin("sprig")
        .unwrap()
        .args(["generate", "--no-styles", "--no-imports", "--no-wrap", "--file"])
        .arg(file.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("<style>").not())
        .stdout(predicate::str::contains("import {").not())
        .stdout(predicate::str::contains("sprig-root").not());
}

#[test]
fn generate_without_source_fails() {
    Command::cargo_bin("sprig")
        .unwrap()
        .arg("generate")
        .assert()
        .failure();
}

#[test]
fn components_lists_supported_kinds() {
    Command::cargo_bin("sprig")
        .unwrap()
        .arg("components")
        .assert()
        .success()
        .stdout(predicate::str::contains("Button"))
        .stdout(predicate::str::contains("FeaturedIcon"))
        .stdout(predicate::str::contains("ui-bread-crumb"));
}

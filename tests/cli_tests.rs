//! Tests that drive the `rbviz` binary

use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

/// Run the binary with config isolated under `home`
fn rbviz(home: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_rbviz"))
        .args(args)
        .env("HOME", home)
        .env("XDG_CONFIG_HOME", home.join("config"))
        .env("APPDATA", home.join("config"))
        .output()
        .expect("Failed to run rbviz")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

#[test]
fn no_arguments_is_usage_error() {
    let home = TempDir::new().expect("Failed to create temp dir");
    let output = rbviz(home.path(), &[]);

    assert!(output.status.success());
    assert_eq!(stdout(&output).trim(), "usage error");
    // no config file is created either
    assert!(!home.path().join("config").exists());
}

#[test]
fn two_arguments_is_usage_error() {
    let home = TempDir::new().expect("Failed to create temp dir");
    let output = rbviz(home.path(), &["a.json", "b.json"]);

    assert!(output.status.success());
    assert_eq!(stdout(&output).trim(), "usage error");
}

#[test]
fn renders_url_without_opening_browser() {
    let home = TempDir::new().expect("Failed to create temp dir");
    let input = fixture("valid_tree.json");
    let output = rbviz(
        home.path(),
        &["--no-open", "--log-level", "error", input.to_str().unwrap()],
    );

    assert!(output.status.success());
    assert!(stdout(&output).contains("https://dreampuf.github.io/GraphvizOnline/#graph%20G"));
}

#[test]
fn print_document_emits_dot() {
    let home = TempDir::new().expect("Failed to create temp dir");
    let input = fixture("valid_tree.json");
    let output = rbviz(
        home.path(),
        &[
            "--no-open",
            "--log-level",
            "error",
            "--print-document",
            input.to_str().unwrap(),
        ],
    );

    assert!(output.status.success());
    let text = stdout(&output);
    assert!(text.contains("graph G {"));
    assert!(text.contains("fillcolor=red"));
}

#[test]
fn missing_file_fails() {
    let home = TempDir::new().expect("Failed to create temp dir");
    let missing = home.path().join("missing.json");
    let output = rbviz(home.path(), &["--no-open", missing.to_str().unwrap()]);

    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("missing.json"));
}

#[test]
fn check_reports_violations() {
    let home = TempDir::new().expect("Failed to create temp dir");
    let invalid = fixture("invalid_tree.json");
    let output = rbviz(home.path(), &["check", invalid.to_str().unwrap()]);

    assert!(!output.status.success());
    let text = stdout(&output);
    assert!(text.contains("must be black"));
    assert!(text.contains("red child"));

    let valid = fixture("valid_tree.json");
    let output = rbviz(home.path(), &["check", valid.to_str().unwrap()]);
    assert!(output.status.success());
    assert!(stdout(&output).contains("valid red-black tree"));
}

#[test]
fn print_document_text_draws_tree() {
    let home = TempDir::new().expect("Failed to create temp dir");
    let input = fixture("valid_tree.json");
    let output = rbviz(
        home.path(),
        &[
            "--no-open",
            "--log-level",
            "error",
            "--print-document",
            "-f",
            "text",
            input.to_str().unwrap(),
        ],
    );

    assert!(output.status.success());
    let expected = [
        "     (10 b)",
        "  +-----+-----------+",
        "(5 b)            (20 r)",
        "              +-----+-----+",
        "           (15 b)      (30 b)",
    ];
    assert_eq!(stdout(&output).lines().collect::<Vec<_>>(), expected);
}

#[test]
fn deep_chain_renders() {
    let home = TempDir::new().expect("Failed to create temp dir");
    let depth = 200;
    let mut json = String::new();
    for i in 0..depth {
        json.push_str(&format!(r#"{{"data":{i},"color":"b","right":"#));
    }
    json.push_str("null");
    json.push_str(&"}".repeat(depth));
    let input = home.path().join("chain.json");
    std::fs::write(&input, json).expect("Failed to write chain");

    let output = rbviz(
        home.path(),
        &[
            "--no-open",
            "--log-level",
            "error",
            "--print-document",
            input.to_str().unwrap(),
        ],
    );

    assert!(output.status.success());
    let text = stdout(&output);
    assert!(text.contains("label=\"199\""));
    assert_eq!(text.matches(" -- ").count(), 2 * depth);
}

//! CLI integration tests for all subcommands.
//!
//! Uses `assert_cmd` to spawn the `strictjson` binary and verify
//! exit codes, stdout content, and stderr content. Inputs are written
//! to a temporary directory per test.

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

fn strictjson() -> Command {
    cargo_bin_cmd!("strictjson")
}

/// Write `contents` to `name` inside `dir` and return the path.
fn fixture(dir: &TempDir, name: &str, contents: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, contents).expect("write fixture");
    path
}

// ──────────────────────────────────────────────
// 1. Help and version
// ──────────────────────────────────────────────

#[test]
fn help_exits_0_with_description() {
    strictjson()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Strict JSON parser with semantic checks",
        ));
}

#[test]
fn version_exits_0() {
    strictjson()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("strictjson"));
}

// ──────────────────────────────────────────────
// 2. parse
// ──────────────────────────────────────────────

#[test]
fn parse_valid_file_prints_tree() {
    let dir = TempDir::new().unwrap();
    let file = fixture(&dir, "ok.json", r#"{"name": "ada", "tags": ["x", "y"]}"#);
    strictjson()
        .arg("parse")
        .arg(&file)
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Abstract Syntax Tree:\nNode: OBJECT\n"))
        .stdout(predicate::str::contains("    Leaf: KEY -> name\n"))
        .stdout(predicate::str::contains("      Leaf: STRING -> y\n"));
}

#[test]
fn parse_invalid_file_prints_errors_and_exits_1() {
    let dir = TempDir::new().unwrap();
    let file = fixture(&dir, "dup.json", r#"{"a": 1, "a": 2, "b": [1, "x"]}"#);
    strictjson()
        .arg("parse")
        .arg(&file)
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::contains("Semantic errors:"))
        .stdout(predicate::str::contains(
            "-Error Type 5 at a: No Duplicate Keys in Dictionary.",
        ))
        .stdout(predicate::str::contains(
            "-Error Type 6 at x: Consistent Types for List Elements.",
        ));
}

#[test]
fn parse_indent_flag_changes_layout() {
    let dir = TempDir::new().unwrap();
    let file = fixture(&dir, "arr.json", "[1]");
    strictjson()
        .args(["--indent", "1", "parse"])
        .arg(&file)
        .assert()
        .success()
        .stdout("Abstract Syntax Tree:\nNode: ARRAY\n Leaf: NUMBER -> 1\n");
}

#[test]
fn parse_json_output() {
    let dir = TempDir::new().unwrap();
    let file = fixture(&dir, "num.json", "[01, 2]");
    let out = strictjson()
        .args(["--output", "json", "parse"])
        .arg(&file)
        .assert()
        .failure()
        .get_output()
        .stdout
        .clone();
    let report: serde_json::Value = serde_json::from_slice(&out).expect("json report");
    assert_eq!(report["valid"], false);
    assert_eq!(report["diagnostics"][0]["kind"], "number_prefix");
    assert_eq!(report["diagnostics"][0]["rule"], 3);
    assert!(report.get("tree").is_none());
}

#[test]
fn parse_writes_report_to_out_file() {
    let dir = TempDir::new().unwrap();
    let file = fixture(&dir, "ok.json", "[true, false]");
    let out = dir.path().join("report.txt");
    strictjson()
        .arg("--out")
        .arg(&out)
        .arg("parse")
        .arg(&file)
        .assert()
        .success()
        .stdout("");
    let written = fs::read_to_string(&out).unwrap();
    assert!(written.contains("Leaf: BOOL -> false"), "{written}");
}

#[test]
fn parse_missing_file_exits_1() {
    strictjson()
        .args(["parse", "does/not/exist.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("error reading file"));
}

#[test]
fn missing_file_json_error_is_valid_json() {
    let path = r#"no\such "dir"\doc.json"#;
    let out = strictjson()
        .args(["--output", "json", "parse", path])
        .assert()
        .failure()
        .code(1)
        .get_output()
        .stderr
        .clone();
    let err: serde_json::Value = serde_json::from_slice(&out).expect("json error");
    let msg = err["error"].as_str().expect("error string");
    assert!(msg.contains(path), "{msg}");
}

#[test]
fn parse_deeply_nested_file_fails_cleanly() {
    let dir = TempDir::new().unwrap();
    let depth = 100_000;
    let src = format!("{}{}", "[".repeat(depth), "]".repeat(depth));
    let file = fixture(&dir, "deep.json", &src);
    strictjson()
        .arg("parse")
        .arg(&file)
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::contains(
            "-Error: Maximum nesting depth of 100 exceeded.",
        ));
}

#[test]
fn lexical_errors_are_logged_as_warnings() {
    let dir = TempDir::new().unwrap();
    let file = fixture(&dir, "lex.json", "[1, 2, nope]");
    strictjson()
        .arg("parse")
        .arg(&file)
        .assert()
        .success()
        .stderr(predicate::str::contains("Invalid keyword: 'nope'"));
}

// ──────────────────────────────────────────────
// 3. check
// ──────────────────────────────────────────────

#[test]
fn check_valid_prints_valid() {
    let dir = TempDir::new().unwrap();
    let file = fixture(&dir, "ok.json", "{}");
    strictjson()
        .arg("check")
        .arg(&file)
        .assert()
        .success()
        .stdout("valid\n");
}

#[test]
fn check_quiet_prints_nothing_on_failure() {
    let dir = TempDir::new().unwrap();
    let file = fixture(&dir, "bad.json", r#"{"true": 1}"#);
    strictjson()
        .args(["--quiet", "check"])
        .arg(&file)
        .assert()
        .failure()
        .stdout("");
}

// ──────────────────────────────────────────────
// 4. tokens and replay
// ──────────────────────────────────────────────

#[test]
fn tokens_prints_dump_lines() {
    let dir = TempDir::new().unwrap();
    let file = fixture(&dir, "t.json", r#"{"k": null}"#);
    strictjson()
        .arg("tokens")
        .arg(&file)
        .assert()
        .success()
        .stdout("<LBRACE: {>\n<STRING: k>\n<COLON: :>\n<NULL: null>\n<RBRACE: }>\n");
}

#[test]
fn replay_parses_a_token_dump() {
    let dir = TempDir::new().unwrap();
    let dump = fixture(
        &dir,
        "input.txt",
        "<LBRACKET: [>\n<NUMBER: .5>\n<RBRACKET: ]>\n",
    );
    strictjson()
        .arg("replay")
        .arg(&dump)
        .assert()
        .failure()
        .stdout(predicate::str::contains(
            "-Error Type 1 at .5: Invalid Numbers.",
        ));
}

#[test]
fn replay_skips_malformed_lines() {
    let dir = TempDir::new().unwrap();
    let dump = fixture(
        &dir,
        "input.txt",
        "<LBRACKET: [>\ngarbage\n<TRUE: true>\n<RBRACKET: ]>\n",
    );
    strictjson()
        .arg("replay")
        .arg(&dump)
        .assert()
        .success()
        .stdout(predicate::str::contains("Leaf: BOOL -> true"))
        .stderr(predicate::str::contains("invalid token format"));
}

#[test]
fn tokens_then_replay_matches_parse() {
    let dir = TempDir::new().unwrap();
    let src = r#"{"a": [1.5, 2], "b": {"c": "d"}}"#;
    let file = fixture(&dir, "doc.json", src);

    let dump = strictjson()
        .arg("tokens")
        .arg(&file)
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let dump_path = dir.path().join("doc.tokens");
    fs::write(&dump_path, dump).unwrap();

    let direct = strictjson().arg("parse").arg(&file).assert().success();
    let replayed = strictjson().arg("replay").arg(&dump_path).assert().success();
    assert_eq!(direct.get_output().stdout, replayed.get_output().stdout);
}

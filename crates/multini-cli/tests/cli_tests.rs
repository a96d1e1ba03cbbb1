// Multini - duplicate-key INI configuration parsing
//
// Copyright (c) 2025 Multini contributors.
//
// SPDX-License-Identifier: Apache-2.0
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE file at the
// root of this repository or at: http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Black-box tests for the multini binary.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::tempdir;

fn multini_cmd() -> Command {
    Command::cargo_bin("multini").expect("Failed to find multini binary")
}

fn write_config(content: &str) -> (tempfile::TempDir, String) {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("test.conf");
    fs::write(&path, content).expect("Failed to write config");
    (dir, path.to_str().unwrap().to_string())
}

// ==================== validate ====================

#[test]
fn test_validate_valid_file() {
    let (_dir, path) = write_config("[web]\nport = 80\nport = 8080\n");
    multini_cmd()
        .args(["validate", &path])
        .assert()
        .success()
        .stdout(predicate::str::contains("Sections: 1"));
}

#[test]
fn test_validate_reports_every_malformed_line() {
    let (_dir, path) = write_config("[web]\nbogus one\nbogus two\n");
    multini_cmd()
        .args(["validate", &path])
        .assert()
        .failure()
        .stdout(predicate::str::contains("line 2"))
        .stdout(predicate::str::contains("line 3"));
}

#[test]
fn test_validate_strict_rejects_duplicates() {
    let (_dir, path) = write_config("[web]\nport = 80\nport = 8080\n");
    multini_cmd()
        .args(["validate", &path, "--strict"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("DuplicateOptionError"));
}

#[test]
fn test_validate_missing_file() {
    multini_cmd()
        .args(["validate", "/no/such/file.conf"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Cannot access file"));
}

// ==================== sections ====================

#[test]
fn test_sections_lists_names() {
    let (_dir, path) = write_config("[b]\nx = 1\n[a]\ny = 2\n");
    multini_cmd()
        .args(["sections", &path])
        .assert()
        .success()
        .stdout(predicate::str::diff("a\nb\n"));
}

#[test]
fn test_sections_excludes_defaults_bucket() {
    let (_dir, path) = write_config("[DEFAULT]\nshared = x\n[web]\nport = 80\n");
    multini_cmd()
        .args(["sections", &path])
        .assert()
        .success()
        .stdout(predicate::str::diff("web\n"));
}

// ==================== dump ====================

#[test]
fn test_dump_emits_buckets_json() {
    let (_dir, path) = write_config("[default]\nretries = 3\n[web]\nport = 80\nport = 8080\n");
    let output = multini_cmd()
        .args(["dump", &path])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let json: serde_json::Value = serde_json::from_slice(&output).expect("valid JSON");
    assert_eq!(json["default"]["retries"][0], "3");
    assert_eq!(json["rest"]["web"]["port"][0], "80");
    assert_eq!(json["rest"]["web"]["port"][1], "8080");
}

#[test]
fn test_dump_pretty_prints() {
    let (_dir, path) = write_config("[web]\nport = 80\n");
    multini_cmd()
        .args(["dump", &path, "--pretty"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\n  "));
}

#[test]
fn test_dump_fails_on_malformed_input() {
    let (_dir, path) = write_config("[web]\nbogus\n");
    multini_cmd().args(["dump", &path]).assert().failure();
}

// ==================== completion ====================

#[test]
fn test_completion_bash() {
    multini_cmd()
        .args(["completion", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("multini"));
}

#[test]
fn test_completion_unknown_shell() {
    multini_cmd()
        .args(["completion", "tcsh"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unsupported shell"));
}

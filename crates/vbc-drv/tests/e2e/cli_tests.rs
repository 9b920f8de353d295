//! CLI interface tests: help/version output and the four subcommands.

use assert_cmd::Command;
use predicates::prelude::*;
use std::io::Write;
use tempfile::NamedTempFile;

fn vbc_bin() -> std::path::PathBuf {
    std::path::PathBuf::from(env!("CARGO_BIN_EXE_vbc"))
}

fn source_file(source: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("failed to create temp file");
    write!(file, "{source}").expect("failed to write temp source");
    file
}

#[test]
fn help_output_lists_subcommands() {
    let mut cmd = Command::new(vbc_bin());
    cmd.arg("--help");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("tokens"))
        .stdout(predicate::str::contains("parse"))
        .stdout(predicate::str::contains("compile"))
        .stdout(predicate::str::contains("run"));
}

#[test]
fn version_flag_succeeds() {
    let mut cmd = Command::new(vbc_bin());
    cmd.arg("--version");
    cmd.assert().success();
}

#[test]
fn tokens_subcommand_prints_one_line_per_token() {
    let file = source_file("fn main\nret zero\n");
    let mut cmd = Command::new(vbc_bin());
    cmd.arg("tokens").arg(file.path());
    cmd.assert().success().stdout(predicate::str::contains("Fn"));
}

#[test]
fn parse_subcommand_prints_the_syntax_tree() {
    let file = source_file("fn main\nret zero\n");
    let mut cmd = Command::new(vbc_bin());
    cmd.arg("parse").arg(file.path());
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("FunctionDefinition"));
}

#[test]
fn compile_subcommand_writes_llir_to_requested_output() {
    let file = source_file("fn main\nret zero\n");
    let output = NamedTempFile::new().expect("failed to create temp output path");

    let mut cmd = Command::new(vbc_bin());
    cmd.arg("compile")
        .arg(file.path())
        .arg("-o")
        .arg(output.path());
    cmd.assert().success();

    let ir = std::fs::read_to_string(output.path()).expect("IR output should exist");
    assert!(ir.contains("define double @main("));
}

#[test]
fn compile_subcommand_defaults_output_path_to_ll_extension() {
    let dir = tempfile::tempdir().expect("failed to create temp dir");
    let input = dir.path().join("program.vb");
    std::fs::write(&input, "fn main\nret zero\n").expect("failed to write source");

    let mut cmd = Command::new(vbc_bin());
    cmd.arg("compile").arg(&input);
    cmd.assert().success();

    assert!(dir.path().join("program.ll").exists());
}

#[test]
fn malformed_source_fails_with_a_diagnostic_on_stderr() {
    let file = source_file("fn\n");
    let mut cmd = Command::new(vbc_bin());
    cmd.arg("parse").arg(file.path());
    cmd.assert().failure().stderr(predicate::str::contains("error"));
}

#[test]
fn missing_input_file_fails_with_a_diagnostic() {
    let mut cmd = Command::new(vbc_bin());
    cmd.arg("tokens").arg("/nonexistent/path/does-not-exist.vb");
    cmd.assert().failure().stderr(predicate::str::contains("error"));
}

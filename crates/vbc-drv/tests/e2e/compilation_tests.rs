//! Compilation scenarios through the `compile` subcommand: arithmetic,
//! control flow, functions, and the failure path for bad input.

use assert_cmd::Command;
use predicates::prelude::*;
use std::io::Write;
use tempfile::NamedTempFile;

fn vbc_bin() -> std::path::PathBuf {
    std::path::PathBuf::from(env!("CARGO_BIN_EXE_vbc"))
}

fn compile(source: &str) -> String {
    let mut input = NamedTempFile::new().expect("failed to create temp input");
    write!(input, "{source}").expect("failed to write source");
    let output = NamedTempFile::new().expect("failed to create temp output");

    Command::new(vbc_bin())
        .arg("compile")
        .arg(input.path())
        .arg("-o")
        .arg(output.path())
        .assert()
        .success();

    std::fs::read_to_string(output.path()).expect("IR output should exist")
}

#[test]
fn arithmetic_expression_lowers_to_fadd_fmul() {
    let ir = compile("fn main\nret one plus two times three\n");
    assert!(ir.contains("fmul double"));
    assert!(ir.contains("fadd double"));
}

#[test]
fn if_else_emits_then_else_and_end_labels() {
    let ir = compile(
        "fn classify a\n\
         if a gt zero\n\
         ret one\n\
         else\n\
         ret zero\n\
         done\n",
    );
    assert!(ir.contains("then0:"));
    assert!(ir.contains("else1:"));
    assert!(ir.contains("end2:"));
}

#[test]
fn while_loop_emits_start_body_end_labels() {
    let ir = compile(
        "fn count_down n\n\
         let x n\n\
         while x gt zero\n\
         dec x\n\
         done\n\
         ret x\n",
    );
    assert!(ir.contains("while_start0:"));
    assert!(ir.contains("while_body1:"));
    assert!(ir.contains("while_end2:"));
}

#[test]
fn repeat_loop_emits_loop_start_body_end_labels() {
    let ir = compile(
        "fn total\n\
         let sum zero\n\
         repeat five times\n\
         inc sum\n\
         done\n\
         ret sum\n",
    );
    assert!(ir.contains("loop_start0:"));
    assert!(ir.contains("loop_body1:"));
    assert!(ir.contains("loop_end2:"));
}

#[test]
fn functions_calling_each_other_both_appear_in_output() {
    let ir = compile("fn helper a\nret a plus one\nfn main\nret call helper five\n");
    assert!(ir.contains("define double @helper("));
    assert!(ir.contains("define double @main("));
    assert!(ir.contains("call double @helper("));
}

#[test]
fn out_with_a_string_literal_reaches_the_string_table() {
    let ir = compile("fn main\nout \"hello\"\nret zero\n");
    assert!(ir.contains("@.str0"));
    assert!(ir.contains("@.fmt_str"));
}

#[test]
fn malformed_source_fails_to_compile() {
    let mut input = NamedTempFile::new().expect("failed to create temp input");
    write!(input, "fn main\nret plus\n").expect("failed to write source");

    Command::new(vbc_bin())
        .arg("compile")
        .arg(input.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("error"));
}

//! Structural checks on emitted IR for a few small, representative programs
//! — not byte-for-byte snapshots, since the exact register numbering is an
//! implementation detail already covered by `vbc-gen`'s own unit tests.

use assert_cmd::Command;
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
fn preamble_declares_every_math_intrinsic_once() {
    let ir = compile("fn main\nret zero\n");
    for intrinsic in [
        "llvm.fabs.f64",
        "llvm.sqrt.f64",
        "llvm.floor.f64",
        "llvm.ceil.f64",
        "llvm.sin.f64",
        "llvm.cos.f64",
        "llvm.pow.f64",
        "llvm.minnum.f64",
        "llvm.maxnum.f64",
    ] {
        assert_eq!(
            ir.matches(intrinsic).count(),
            1,
            "{intrinsic} should be declared exactly once"
        );
    }
    assert!(ir.contains("declare i32 @printf(i8*, ...)"));
}

#[test]
fn function_with_no_explicit_return_gets_a_trailing_zero() {
    let ir = compile("fn main\nlet x one\n");
    assert!(ir.contains("ret double 0.0"));
}

#[test]
fn math_sqrt_call_dispatches_to_the_sqrt_intrinsic() {
    let ir = compile("fn main\nret math sqrt two\n");
    assert!(ir.contains("call double @llvm.sqrt.f64(double"));
}

//! Synthesizes a `main` entry point that calls every function in a program
//! with a fixed argument vector and prints its result, so `vbc run` has
//! something to link and execute without the language itself having an
//! entry-point convention.
//!
//! Grounded on the bootstrap driver's own harness generator: first parameter
//! is always `5.0`, second is `3.0`, every parameter after that is `1.0`,
//! regardless of the function's actual arity.
//!
//! The result format diverges from the original in one place: the original
//! prints with `%.0f` (zero decimal places), which can't reproduce fractional
//! results like `math sqrt`'s. This harness uses `%g`, matching the emitter's
//! own number-format constant, so a result such as `2.23607` prints in full.

use std::fmt::Write as _;

use vbc_par::Program;

const FIRST_ARG: f64 = 5.0;
const SECOND_ARG: f64 = 3.0;
const REST_ARG: f64 = 1.0;

/// Emits a standalone IR module defining `main`, meant to be linked
/// alongside the program's own emitted IR.
pub fn emit_harness(program: &Program) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "declare i32 @printf(i8*, ...)");
    let _ = writeln!(out);
    let _ = writeln!(out, "@.fmt = private constant [9 x i8] c\"%s = %g\\0A\\00\"");
    for (index, function) in program.functions.iter().enumerate() {
        let name = function.name.as_str();
        let _ = writeln!(
            out,
            "@.name{index} = private constant [{} x i8] c\"{name}\\00\"",
            name.len() + 1
        );
    }
    let _ = writeln!(out);
    let _ = writeln!(out, "define i32 @main() {{");
    let _ = writeln!(out, "entry:");

    for (index, function) in program.functions.iter().enumerate() {
        let args = test_arguments(function.params.len());
        let joined = args
            .iter()
            .map(|v| format!("double {v:.1}"))
            .collect::<Vec<_>>()
            .join(", ");
        let _ = writeln!(
            out,
            "  %r{index} = call double @{}({joined})",
            function.name.as_str()
        );
        let _ = writeln!(
            out,
            "  %fmt{index} = getelementptr [9 x i8], [9 x i8]* @.fmt, i32 0, i32 0"
        );
        let _ = writeln!(
            out,
            "  %nm{index} = getelementptr [{} x i8], [{} x i8]* @.name{index}, i32 0, i32 0",
            function.name.as_str().len() + 1,
            function.name.as_str().len() + 1
        );
        let _ = writeln!(
            out,
            "  call i32 (i8*, ...) @printf(i8* %fmt{index}, i8* %nm{index}, double %r{index})"
        );
    }

    let _ = writeln!(out, "  ret i32 0");
    let _ = writeln!(out, "}}");
    out
}

fn test_arguments(arity: usize) -> Vec<f64> {
    let mut args = Vec::with_capacity(arity);
    for i in 0..arity {
        args.push(match i {
            0 => FIRST_ARG,
            1 => SECOND_ARG,
            _ => REST_ARG,
        });
    }
    args
}

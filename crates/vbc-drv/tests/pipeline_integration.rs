//! Checks the pieces `run_run` assembles before invoking `clang`: the
//! emitted program body and the synthesized harness combine into one
//! self-consistent module. Doesn't invoke `clang` itself — that's covered
//! by `vbc-gen`'s own `linker` module.

use vbc_lex::Lexer;
use vbc_par::Parser;

fn parse(source: &str) -> vbc_par::Program {
    let tokens = Lexer::tokenize(source).expect("source must lex");
    Parser::new(tokens).parse().expect("source must parse")
}

#[test]
fn harness_calls_reference_functions_the_body_actually_defines() {
    let program = parse("fn add a b\nret a plus b\n");
    let body_ir = vbc_gen::Emitter::emit_program(&program).expect("should emit");
    let harness_ir = vbc_drv::harness::emit_harness(&program);

    assert!(body_ir.contains("define double @add("));
    assert!(harness_ir.contains("call double @add("));
}

#[test]
fn harness_and_body_together_declare_printf_exactly_twice() {
    let program = parse("fn main\nret zero\n");
    let body_ir = vbc_gen::Emitter::emit_program(&program).expect("should emit");
    let harness_ir = vbc_drv::harness::emit_harness(&program);

    let combined = format!("{body_ir}\n{harness_ir}");
    assert_eq!(combined.matches("declare i32 @printf").count(), 2);
}

#[test]
fn harness_main_is_the_only_main_in_the_combined_module() {
    let program = parse("fn helper\nret zero\nfn other\nret one\n");
    let body_ir = vbc_gen::Emitter::emit_program(&program).expect("should emit");
    let harness_ir = vbc_drv::harness::emit_harness(&program);

    assert!(!body_ir.contains("@main("));
    assert!(harness_ir.contains("define i32 @main()"));
}

#[test]
fn harness_format_string_can_print_fractional_results() {
    let program = parse("fn m x\nret math sqrt x\n");
    let body_ir = vbc_gen::Emitter::emit_program(&program).expect("should emit");
    let harness_ir = vbc_drv::harness::emit_harness(&program);

    assert!(body_ir.contains("call double @llvm.sqrt.f64("));
    assert!(harness_ir.contains("call double @m("));
    assert!(harness_ir.contains("c\"%s = %g\\0A\\00\""));
}

#[test]
fn multi_function_program_round_trips_through_run_compile() {
    let dir = tempfile::tempdir().expect("failed to create temp dir");
    let input = dir.path().join("multi.vb");
    std::fs::write(
        &input,
        "fn square x\nret x times x\nfn main\nret call square three\n",
    )
    .unwrap();

    let output_path = vbc_drv::run_compile(&input, None).expect("should compile");
    let ir = std::fs::read_to_string(&output_path).unwrap();
    assert!(ir.contains("define double @square("));
    assert!(ir.contains("call double @square("));
}

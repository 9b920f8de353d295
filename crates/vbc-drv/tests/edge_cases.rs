//! Edge cases exercised directly against the driver library API, without
//! going through the CLI process boundary.

use std::path::Path;

fn write_temp(source: &str) -> tempfile::NamedTempFile {
    use std::io::Write;
    let mut file = tempfile::NamedTempFile::new().expect("failed to create temp file");
    write!(file, "{source}").expect("failed to write source");
    file
}

#[test]
fn compile_rejects_reading_a_missing_file() {
    let result = vbc_drv::run_compile(Path::new("/nonexistent/does-not-exist.vb"), None);
    assert!(result.is_err());
}

#[test]
fn parse_reports_an_unknown_identifier_error_from_emission() {
    let file = write_temp("fn main\nret bogus\n");
    let output = tempfile::NamedTempFile::new().expect("failed to create temp output");
    let result = vbc_drv::run_compile(file.path(), Some(output.path().to_path_buf()));
    assert!(matches!(result, Err(vbc_drv::DriverError::Gen(_))));
}

#[test]
fn malformed_syntax_surfaces_as_a_parse_error() {
    let file = write_temp("fn main\nif\n");
    let output = tempfile::NamedTempFile::new().expect("failed to create temp output");
    let result = vbc_drv::run_compile(file.path(), Some(output.path().to_path_buf()));
    assert!(matches!(result, Err(vbc_drv::DriverError::Parse(_))));
}

#[test]
fn empty_function_body_still_gets_a_synthetic_return() {
    let file = write_temp("fn main\n");
    let output = tempfile::NamedTempFile::new().expect("failed to create temp output");
    vbc_drv::run_compile(file.path(), Some(output.path().to_path_buf())).expect("should compile");
    let ir = std::fs::read_to_string(output.path()).unwrap();
    assert!(ir.contains("ret double 0.0"));
}

#[test]
fn positional_parameter_words_resolve_to_the_matching_argument_register() {
    let file = write_temp("fn pick a b c d\nret third\n");
    let output = tempfile::NamedTempFile::new().expect("failed to create temp output");
    vbc_drv::run_compile(file.path(), Some(output.path().to_path_buf())).expect("should compile");
    let ir = std::fs::read_to_string(output.path()).unwrap();
    assert!(ir.contains("ret double %arg2"));
}

#[test]
fn string_literal_with_a_quote_is_hex_escaped_in_the_string_table() {
    let file = write_temp("fn main\nout \"say \\\"hi\\\"\"\nret zero\n");
    let output = tempfile::NamedTempFile::new().expect("failed to create temp output");
    vbc_drv::run_compile(file.path(), Some(output.path().to_path_buf())).expect("should compile");
    let ir = std::fs::read_to_string(output.path()).unwrap();
    assert!(ir.contains("\\22"));
}

#[test]
fn compile_defaults_output_path_next_to_the_input() {
    let dir = tempfile::tempdir().expect("failed to create temp dir");
    let input = dir.path().join("prog.vb");
    std::fs::write(&input, "fn main\nret zero\n").unwrap();

    let output_path = vbc_drv::run_compile(&input, None).expect("should compile");
    assert_eq!(output_path, dir.path().join("prog.ll"));
    assert!(output_path.exists());
}

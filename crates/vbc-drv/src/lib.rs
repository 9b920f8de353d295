//! Driver library: wires the lexer, parser, and IR emitter together into the
//! four operations the command line exposes, plus the `run` mode's harness
//! synthesis and `clang` invocation.

pub mod error;
pub mod harness;

use std::fmt::Write as _;
use std::path::{Path, PathBuf};
use std::process::ExitStatus;

use tracing::{debug, info};
use vbc_lex::Lexer;
use vbc_par::{Parser, Program};

pub use error::{DriverError, Result};

fn read_source(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).map_err(|source| DriverError::Read {
        path: path.display().to_string(),
        source,
    })
}

fn write_output(path: &Path, contents: &str) -> Result<()> {
    std::fs::write(path, contents).map_err(|source| DriverError::Write {
        path: path.display().to_string(),
        source,
    })
}

fn parse_source(source: &str) -> Result<Program> {
    let tokens = Lexer::tokenize(source)?;
    debug!(count = tokens.len(), "lexed source");
    let program = Parser::new(tokens).parse()?;
    debug!(
        functions = program.functions.len(),
        types = program.types.len(),
        "parsed program"
    );
    Ok(program)
}

/// `vbc tokens FILE` — lex the file and print one token per line.
pub fn run_tokens(file: &Path) -> Result<()> {
    let source = read_source(file)?;
    let tokens = Lexer::tokenize(&source)?;
    info!(count = tokens.len(), "lexed source");
    for token in &tokens {
        println!("{:?}", token);
    }
    Ok(())
}

/// `vbc parse FILE` — lex and parse the file and print the resulting tree.
pub fn run_parse(file: &Path) -> Result<()> {
    let source = read_source(file)?;
    let program = parse_source(&source)?;
    println!("{:#?}", program);
    Ok(())
}

/// `vbc compile FILE [-o OUTPUT]` — emit textual LLIR to `output`, defaulting
/// to the input path with its extension replaced by `.ll`.
pub fn run_compile(file: &Path, output: Option<PathBuf>) -> Result<PathBuf> {
    let source = read_source(file)?;
    let program = parse_source(&source)?;
    let ir = vbc_gen::Emitter::emit_program(&program)?;
    let output = output.unwrap_or_else(|| file.with_extension("ll"));
    write_output(&output, &ir)?;
    info!(path = %output.display(), "wrote LLIR");
    Ok(output)
}

/// `vbc run FILE` — compile, synthesize a test harness `main`, link with
/// `clang`, and execute the result, propagating its exit status.
pub fn run_run(file: &Path) -> Result<ExitStatus> {
    let source = read_source(file)?;
    let program = parse_source(&source)?;
    let body_ir = vbc_gen::Emitter::emit_program(&program)?;
    let harness_ir = harness::emit_harness(&program);

    let mut combined = body_ir.clone();
    let _ = write!(combined, "\n{harness_ir}");

    let dir = tempfile::tempdir().map_err(|source| DriverError::Write {
        path: "<temp dir>".to_string(),
        source,
    })?;
    let ir_path = dir.path().join("body.ll");
    let harness_path = dir.path().join("harness.ll");
    let combined_path = dir.path().join("combined.ll");
    let bin_path = dir.path().join("a.out");
    write_output(&ir_path, &body_ir)?;
    write_output(&harness_path, &harness_ir)?;
    write_output(&combined_path, &combined)?;

    info!(ir = %combined_path.display(), "invoking clang");
    vbc_gen::linker::compile(&combined_path, &bin_path)?;
    let status = vbc_gen::linker::run(&bin_path)?;
    Ok(status)
}

/// Initializes `tracing` output: `info` by default, `debug` when `verbose`
/// is set or `VBC_LOG` is present in the environment.
pub fn init_logging(verbose: bool) {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let filter = EnvFilter::try_from_env("VBC_LOG").unwrap_or_else(|_| {
        if verbose {
            EnvFilter::new("debug")
        } else {
            EnvFilter::new("info")
        }
    });

    let subscriber = fmt::layer().with_target(false).with_thread_ids(false);

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(subscriber)
        .try_init();
}

//! Command-line entry point: four subcommands over the lex/parse/emit/link
//! pipeline.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};

/// Compiler for the bootstrap language, emitting textual LLVM IR.
#[derive(Parser, Debug)]
#[command(name = "vbc", author, version, about, propagate_version = true)]
struct Cli {
    /// Enable debug-level logging.
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Lex a source file and print its tokens.
    Tokens { file: PathBuf },
    /// Lex and parse a source file and print its syntax tree.
    Parse { file: PathBuf },
    /// Lex, parse, and emit textual LLVM IR for a source file.
    Compile {
        file: PathBuf,
        /// Where to write the emitted IR (default: input path with a `.ll` extension).
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Compile, link with clang, and run the result.
    Run { file: PathBuf },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    vbc_drv::init_logging(cli.verbose);

    let result = match &cli.command {
        Commands::Tokens { file } => vbc_drv::run_tokens(file).map(|_| ExitCode::SUCCESS),
        Commands::Parse { file } => vbc_drv::run_parse(file).map(|_| ExitCode::SUCCESS),
        Commands::Compile { file, output } => {
            vbc_drv::run_compile(file, output.clone()).map(|_| ExitCode::SUCCESS)
        }
        Commands::Run { file } => vbc_drv::run_run(file).map(exit_code_of),
    };

    match result {
        Ok(code) => code,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn exit_code_of(status: std::process::ExitStatus) -> ExitCode {
    match status.code() {
        Some(code) => ExitCode::from(code as u8),
        None => ExitCode::FAILURE,
    }
}

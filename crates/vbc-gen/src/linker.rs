//! Invokes the external native toolchain on combined LLIR text.
//!
//! `clang` accepts textual LLVM IR directly, so there is no separate
//! object-file or flag-assembly step here: one `clang` invocation both
//! compiles and links the combined module into a native executable.

use std::path::Path;
use std::process::{Command, ExitStatus};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LinkError {
    #[error("failed to invoke clang: {0}")]
    Spawn(#[source] std::io::Error),
    #[error("clang exited with status {0}")]
    ClangFailed(ExitStatus),
    #[error("failed to run linked executable: {0}")]
    RunSpawn(#[source] std::io::Error),
}

pub type Result<T> = std::result::Result<T, LinkError>;

/// Compiles a combined LLIR text file into a native executable at `output`.
pub fn compile(ir_path: &Path, output: &Path) -> Result<()> {
    let status = Command::new("clang")
        .arg("-w")
        .arg(ir_path)
        .arg("-o")
        .arg(output)
        .status()
        .map_err(LinkError::Spawn)?;
    if !status.success() {
        return Err(LinkError::ClangFailed(status));
    }
    Ok(())
}

/// Runs a previously linked executable, propagating its exit status.
pub fn run(executable: &Path) -> Result<ExitStatus> {
    Command::new(executable).status().map_err(LinkError::RunSpawn)
}

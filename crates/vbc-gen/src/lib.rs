//! Lowers a parsed program directly to textual LLVM IR.
//!
//! One pass over the tree: a preamble of math intrinsics and format
//! constants, a string-literal table in document order, then one IR
//! function per source function. `linker` hands the combined output to
//! `clang` for compile-and-run mode.

pub mod emitter;
pub mod error;
pub mod linker;

pub use emitter::Emitter;
pub use error::{GenError, Result};

//! End-to-end tests driving the `vbc` binary as a subprocess, covering the
//! full pipeline from source text to emitted IR (and, where `clang` is
//! available, a linked executable).

mod compilation_tests;
mod cli_tests;
mod snapshot_tests;
//! Error type for lexical analysis failures.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum LexError {
    #[error("{line}:{column}: unexpected character '{ch}'")]
    UnexpectedChar { ch: char, line: u32, column: u32 },

    #[error("{line}:{column}: unterminated string literal")]
    UnterminatedString { line: u32, column: u32 },
}

pub type Result<T> = std::result::Result<T, LexError>;

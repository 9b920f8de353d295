//! Error type for syntax analysis failures.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ParseError {
    #[error("{line}:{column}: expected {expected}, found {found}")]
    UnexpectedToken {
        expected: String,
        found: String,
        line: u32,
        column: u32,
    },

    #[error("{line}:{column}: expected item (fn or type), found {found}")]
    ExpectedItem {
        found: String,
        line: u32,
        column: u32,
    },

    #[error("{line}:{column}: expected expression, found {found}")]
    ExpectedExpr {
        found: String,
        line: u32,
        column: u32,
    },
}

pub type Result<T> = std::result::Result<T, ParseError>;

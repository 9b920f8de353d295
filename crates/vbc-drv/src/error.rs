//! Top-level error type for the driver, nesting each pipeline stage's own
//! error type.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum DriverError {
    #[error("could not read '{path}': {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("could not write '{path}': {source}")]
    Write {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Lex(#[from] vbc_lex::LexError),

    #[error(transparent)]
    Parse(#[from] vbc_par::ParseError),

    #[error(transparent)]
    Gen(#[from] vbc_gen::GenError),

    #[error(transparent)]
    Link(#[from] vbc_gen::linker::LinkError),
}

pub type Result<T> = std::result::Result<T, DriverError>;

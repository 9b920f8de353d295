//! Error type for IR emission failures.

use thiserror::Error;

/// The only failure mode the emitter can hit on its own: a name referenced in
/// an expression that is neither a parameter nor a prior `let` in the same
/// function. Operator words are a closed enum by the time the tree reaches
/// here, so there is no "unknown operator" case to represent.
#[derive(Debug, Error)]
pub enum GenError {
    #[error("unknown identifier '{name}'")]
    UnknownIdentifier { name: String },
}

pub type Result<T> = std::result::Result<T, GenError>;

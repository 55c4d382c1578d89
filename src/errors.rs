//! Error types shared by the symbol map and the SAT bridge.

use thiserror::Error;

use crate::types::Lit;

/// A token or literal outside the fixed symbol alphabet.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LookupError {
    #[error("unknown symbol '{0}'")]
    UnknownSymbol(String),

    #[error("no symbol for literal {0}")]
    UnknownLiteral(Lit),
}

/// Anything that keeps the SAT solver from answering.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SolverFailure {
    #[error("solver backend failed: {0}")]
    Backend(String),

    #[error(transparent)]
    Lookup(#[from] LookupError),
}

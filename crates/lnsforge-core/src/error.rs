//! Error types for LNSForge

use thiserror::Error;

use crate::domain::VarId;

/// Raised when restricting a variable's domain empties it.
///
/// The model signals this from [`IntVariables::instantiate_to`](crate::IntVariables::instantiate_to);
/// neighborhoods pass it through untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("Contradiction: cannot instantiate {var} to {value}")]
pub struct Contradiction {
    /// Variable whose domain would become empty.
    pub var: VarId,
    /// Value that was being assigned.
    pub value: i32,
}

impl Contradiction {
    pub fn new(var: VarId, value: i32) -> Self {
        Self { var, value }
    }
}

/// Main error type for LNSForge operations
#[derive(Debug, Error, PartialEq)]
pub enum LnsForgeError {
    /// Error in neighborhood configuration
    #[error("Configuration error: {0}")]
    Config(String),

    /// A snapshot value lies outside the range fixed at construction
    #[error("Value {value} of {var} is outside [{min}, {max}]")]
    ValueOutOfRange {
        var: VarId,
        value: i32,
        min: i32,
        max: i32,
    },

    /// A loaded solution carries no value for a variable
    #[error("Solution has no value for {0}")]
    MissingValue(VarId),

    /// A variable was not instantiated when the solution was recorded
    #[error("Variable {0} is not instantiated")]
    Uninstantiated(VarId),

    /// Freezing a variable failed
    #[error(transparent)]
    Contradiction(#[from] Contradiction),
}

/// Result type alias for LNSForge operations
pub type Result<T> = std::result::Result<T, LnsForgeError>;

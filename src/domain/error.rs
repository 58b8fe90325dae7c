//! Domain-level errors (no external dependencies)

use thiserror::Error;

/// Domain errors represent violations of the expression-tree rules.
/// These are independent of configuration and CLI concerns.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("invalid operator: '{0}' (expected one of + - * /)")]
    InvalidOperator(char),

    #[error("operator '{operator}' needs at least one operand")]
    InsufficientOperands { operator: char },

    #[error("no open operation to close")]
    NoOpenOperation,

    #[error("operation '{0}' was never closed")]
    UnclosedOperation(char),

    #[error("expression already has a root node")]
    MultipleRoots,

    #[error("expression is empty")]
    EmptyTree,
}

/// Result type for domain operations.
pub type DomainResult<T> = Result<T, DomainError>;

//! Differentiation and propagation errors.

use ef_core::{CoreError, ValueKind};
use ef_quantity::QuantityError;
use thiserror::Error;

pub type PropagateResult<T> = Result<T, PropagateError>;

/// Errors surfaced by the differentiator and the propagator.
///
/// The `Output*` variants are domain errors: the wrapped function itself is
/// unsuitable for propagation ("f(num) -> num, f(arr) -> arr" is violated).
/// Everything else is a call-site mistake.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PropagateError {
    /// No named parameters were supplied.
    #[error("No parameters supplied")]
    MissingParameters,

    /// A derivative was requested for a name absent from the point.
    #[error("Unknown parameter: {name}")]
    UnknownParameter { name: String },

    /// Array-valued parameters must all share one length.
    #[error("Array parameter {name} has length {got}, expected {expected}")]
    ShapeMismatch {
        name: String,
        expected: usize,
        got: usize,
    },

    /// The wrapped function's output kind does not mirror its input kind.
    #[error("Function output must mirror its input: expected {expected} output, got {got}")]
    OutputKindMismatch { expected: ValueKind, got: ValueKind },

    /// The wrapped function's output length does not mirror its input length.
    #[error("Function output must mirror its input: expected length {expected}, got {got}")]
    OutputLengthMismatch { expected: usize, got: usize },

    #[error(transparent)]
    Quantity(#[from] QuantityError),

    #[error(transparent)]
    Core(#[from] CoreError),
}

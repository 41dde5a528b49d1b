//! Quantity construction errors.

use ef_core::{CoreError, ValueKind};
use thiserror::Error;

pub type QuantityResult<T> = Result<T, QuantityError>;

/// Errors that prevent a quantity from coming into existence.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum QuantityError {
    /// Value and uncertainty must be of the same kind.
    #[error("Value and uncertainty must share a kind: got {value} and {uncertainty}")]
    KindMismatch {
        value: ValueKind,
        uncertainty: ValueKind,
    },

    /// Both arrays must be of the same shape.
    #[error(
        "Value and uncertainty arrays must share a length: got {value_len} and {uncertainty_len}"
    )]
    ShapeMismatch {
        value_len: usize,
        uncertainty_len: usize,
    },

    #[error(transparent)]
    Core(#[from] CoreError),
}

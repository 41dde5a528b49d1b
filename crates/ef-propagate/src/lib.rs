//! ef-propagate: uncertainty propagation engine for errorflow.
//!
//! Adapts a plain numeric function of named arguments into one that accepts
//! exact values and measured quantities, estimating local sensitivities by
//! finite differences and combining input uncertainties in quadrature. This
//! is a first-order approximation for independent, uncorrelated errors: it
//! is accurate when uncertainties are small against the function's local
//! curvature.
//!
//! # Example
//!
//! ```
//! use ef_propagate::{Args, Point, propagate};
//! use ef_quantity::Quantity;
//!
//! let square = |p: &Point| p["x"].powi(2);
//! let args = Args::new().with("x", Quantity::new(3.0, 0.1).unwrap());
//! let energy = propagate(square, &args).unwrap().into_quantity().unwrap();
//!
//! assert!((energy.value().as_scalar().unwrap() - 9.0).abs() < 1e-9);
//! ```

pub mod args;
pub mod derivative;
pub mod error;
pub mod propagate;

// Re-exports for ergonomics
pub use args::{Args, Argument, Point};
pub use derivative::{
    ARRAY_SIZE, DELTA, DiffConfig, DiffMethod, STEP, partial_derivative, partial_derivatives,
};
pub use error::{PropagateError, PropagateResult};
pub use propagate::{Propagated, Propagator, propagate};

//! Finite-difference partial derivatives over named parameter sets.

use nalgebra::DVector;

use ef_core::{CoreError, Value, ValueKind, gradient, linspace};

use crate::args::Point;
use crate::error::{PropagateError, PropagateResult};

/// Half-width of the sampled-gradient window.
pub const DELTA: f64 = 0.1;
/// Sample count of the sampled-gradient window.
pub const ARRAY_SIZE: usize = 100;
/// Perturbation step for the difference methods.
pub const STEP: f64 = 1e-5;

/// Derivative estimation method.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DiffMethod {
    /// Evaluate across a uniform sample window and take the midpoint of its
    /// numerical gradient.
    SampledGradient,
    /// One-sided step: `(f(x + h) - f(x)) / h`.
    ForwardDifference,
    /// Centered step: `(f(x + h) - f(x - h)) / 2h`.
    CentralDifference,
}

/// Differentiator configuration.
pub struct DiffConfig {
    /// Estimation method
    pub method: DiffMethod,
    /// Half-width of the sampled-gradient window
    pub window: f64,
    /// Sample count of the sampled-gradient window
    pub samples: usize,
    /// Step size for the difference methods
    pub step: f64,
}

impl Default for DiffConfig {
    fn default() -> Self {
        Self {
            method: DiffMethod::CentralDifference,
            window: DELTA,
            samples: ARRAY_SIZE,
            step: STEP,
        }
    }
}

/// Estimate the partial derivative of `f` with respect to every parameter at
/// `point`, in input order.
pub fn partial_derivatives<F>(f: &F, point: &Point, config: &DiffConfig) -> PropagateResult<Point>
where
    F: Fn(&Point) -> Value,
{
    if point.is_empty() {
        return Err(PropagateError::MissingParameters);
    }
    let mut derivatives = Point::new();
    for name in point.names() {
        derivatives.insert(name, partial_derivative(f, point, name, config)?);
    }
    Ok(derivatives)
}

/// Estimate the partial derivative of `f` with respect to `target` alone,
/// every other parameter held fixed.
///
/// Array-valued points are differentiated one element at a time: the whole
/// point is sliced to a single element, the scalar estimate is taken, and
/// results are reassembled in element order.
pub fn partial_derivative<F>(
    f: &F,
    point: &Point,
    target: &str,
    config: &DiffConfig,
) -> PropagateResult<Value>
where
    F: Fn(&Point) -> Value,
{
    if point.is_empty() {
        return Err(PropagateError::MissingParameters);
    }
    if point.get(target).is_none() {
        return Err(PropagateError::UnknownParameter {
            name: target.to_string(),
        });
    }

    match point.array_len()? {
        None => scalar_derivative(f, point, target, config).map(Value::Scalar),
        Some(len) => {
            let mut out = DVector::zeros(len);
            for i in 0..len {
                let sliced = point.slice(i);
                out[i] = scalar_derivative(f, &sliced, target, config)?;
            }
            Ok(Value::Array(out))
        }
    }
}

fn scalar_derivative<F>(
    f: &F,
    point: &Point,
    target: &str,
    config: &DiffConfig,
) -> PropagateResult<f64>
where
    F: Fn(&Point) -> Value,
{
    // callers slice array-valued points down to scalars before getting here
    debug_assert!(point[target].is_scalar());
    let base = point[target].get(0);

    match config.method {
        DiffMethod::SampledGradient => {
            if config.samples < 2 {
                return Err(CoreError::InvalidArg {
                    what: "sampled gradient needs at least two samples",
                }
                .into());
            }
            let xs = linspace(base - config.window, base + config.window, config.samples);
            let dx = xs[1] - xs[0];

            // one probe point, with only the target ever overwritten
            let mut probe = point.clone();
            let mut ys = DVector::zeros(xs.len());
            for (i, &x) in xs.iter().enumerate() {
                probe.insert(target, x);
                ys[i] = expect_scalar(f(&probe))?;
            }
            let g = gradient(&ys, dx)?;
            Ok(g[xs.len() / 2])
        }
        DiffMethod::ForwardDifference => {
            let f0 = expect_scalar(f(point))?;
            let mut probe = point.clone();
            probe.insert(target, base + config.step);
            let f1 = expect_scalar(f(&probe))?;
            Ok((f1 - f0) / config.step)
        }
        DiffMethod::CentralDifference => {
            let mut hi = point.clone();
            hi.insert(target, base + config.step);
            let mut lo = point.clone();
            lo.insert(target, base - config.step);
            Ok((expect_scalar(f(&hi))? - expect_scalar(f(&lo))?) / (2.0 * config.step))
        }
    }
}

fn expect_scalar(value: Value) -> PropagateResult<f64> {
    match value {
        Value::Scalar(v) => Ok(v),
        Value::Array(_) => Err(PropagateError::OutputKindMismatch {
            expected: ValueKind::Scalar,
            got: ValueKind::Array,
        }),
    }
}

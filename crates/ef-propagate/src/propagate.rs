//! Uncertainty propagation through plain numeric functions.

use tracing::{debug, trace};

use ef_core::{Value, ValueKind};
use ef_quantity::Quantity;

use crate::args::{Args, Point};
use crate::derivative::{DiffConfig, partial_derivative};
use crate::error::{PropagateError, PropagateResult};

/// Result of a propagated call: the raw output when every argument was
/// exact, a fresh quantity when any argument carried uncertainty.
#[derive(Clone, Debug, PartialEq)]
pub enum Propagated {
    Exact(Value),
    Uncertain(Quantity),
}

impl Propagated {
    /// The nominal output value, whichever side it sits on.
    pub fn value(&self) -> &Value {
        match self {
            Propagated::Exact(v) => v,
            Propagated::Uncertain(q) => q.value(),
        }
    }

    pub fn into_quantity(self) -> Option<Quantity> {
        match self {
            Propagated::Exact(_) => None,
            Propagated::Uncertain(q) => Some(q),
        }
    }
}

/// Adapts a plain numeric function into an uncertainty-aware one.
///
/// Stateless: every call is independent, and identical named inputs produce
/// identical outputs.
pub struct Propagator<F> {
    f: F,
    config: DiffConfig,
}

impl<F> Propagator<F>
where
    F: Fn(&Point) -> Value,
{
    pub fn new(f: F) -> Self {
        Self {
            f,
            config: DiffConfig::default(),
        }
    }

    pub fn with_config(f: F, config: DiffConfig) -> Self {
        Self { f, config }
    }

    /// Evaluate the wrapped function at `args`, propagating uncertainties.
    ///
    /// Exact-only argument sets pass straight through. Otherwise the nominal
    /// output is checked to mirror the input kind and shape, sensitivities
    /// are estimated for the uncertain arguments, and the contributions are
    /// combined in quadrature into a fresh [`Quantity`].
    pub fn propagate(&self, args: &Args) -> PropagateResult<Propagated> {
        if args.is_empty() {
            return Err(PropagateError::MissingParameters);
        }

        let point = args.to_point();
        let uncertain = args.iter().filter(|(_, a)| a.is_uncertain()).count();
        debug!(
            parameters = args.len(),
            uncertain, "propagating uncertainties"
        );

        // Exact-only calls return the raw output; no quantity is built.
        if uncertain == 0 {
            return Ok(Propagated::Exact((self.f)(&point)));
        }

        let input_len = point.array_len()?;
        let nominal = (self.f)(&point);
        check_output_mirrors_input(&nominal, input_len)?;

        // Quadrature over the uncertain arguments only; exact arguments have
        // zero sensitivity by construction and are skipped outright.
        let mut sum_of_squares = nominal.zeros_like();
        for (name, argument) in args.iter() {
            let Some(uncertainty) = argument.uncertainty() else {
                continue;
            };
            let derivative = partial_derivative(&self.f, &point, name, &self.config)?;
            trace!(parameter = name, "sensitivity estimated");
            let contribution = &derivative * uncertainty;
            sum_of_squares = &sum_of_squares + &contribution.powi(2);
        }

        let total = sum_of_squares.sqrt();
        Ok(Propagated::Uncertain(Quantity::new(nominal, total)?))
    }
}

/// f(num) -> num, f(arr) -> arr, same length.
fn check_output_mirrors_input(output: &Value, input_len: Option<usize>) -> PropagateResult<()> {
    match (input_len, output) {
        (None, Value::Scalar(_)) => Ok(()),
        (Some(expected), Value::Array(a)) if a.len() == expected => Ok(()),
        (Some(expected), Value::Array(a)) => Err(PropagateError::OutputLengthMismatch {
            expected,
            got: a.len(),
        }),
        (None, Value::Array(_)) => Err(PropagateError::OutputKindMismatch {
            expected: ValueKind::Scalar,
            got: ValueKind::Array,
        }),
        (Some(_), Value::Scalar(_)) => Err(PropagateError::OutputKindMismatch {
            expected: ValueKind::Array,
            got: ValueKind::Scalar,
        }),
    }
}

/// Propagate with the default configuration; the free-function counterpart
/// of [`Propagator::propagate`].
pub fn propagate<F>(f: F, args: &Args) -> PropagateResult<Propagated>
where
    F: Fn(&Point) -> Value,
{
    Propagator::new(f).propagate(args)
}

#[cfg(test)]
mod proptests {
    use super::*;
    use ef_core::{Tolerances, nearly_equal};
    use proptest::prelude::*;

    proptest! {
        // a linear function's sensitivity is its slope, so the propagated
        // uncertainty must come out as |a| * e
        #[test]
        fn linear_functions_propagate_exactly(
            a in -100.0f64..100.0,
            v in -100.0f64..100.0,
            e in 0.0f64..1.0,
        ) {
            let q = Quantity::new(v, e).unwrap();
            let args = Args::new().with("x", q);
            let result = propagate(move |p: &Point| a * &p["x"], &args).unwrap();
            let quantity = result.into_quantity().unwrap();
            let sigma = quantity.uncertainty().as_scalar().unwrap();
            let tol = Tolerances { abs: 1e-8, rel: 1e-6 };
            prop_assert!(nearly_equal(sigma, a.abs() * e, tol));
        }
    }
}

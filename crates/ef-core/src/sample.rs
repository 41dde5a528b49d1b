//! Uniform sampling and numerical gradients of sampled sequences.
//!
//! These are the only capabilities the differentiation layer needs from the
//! array backend: an inclusive evenly spaced sample and the gradient of a
//! sequence sampled at uniform spacing.

use nalgebra::DVector;

use crate::error::{CoreError, CoreResult};

/// `n` evenly spaced samples over `[start, stop]`, endpoints included.
///
/// `n == 1` collapses to `start`; `n == 0` yields an empty vector.
pub fn linspace(start: f64, stop: f64, n: usize) -> DVector<f64> {
    if n == 0 {
        return DVector::zeros(0);
    }
    if n == 1 {
        return DVector::from_element(1, start);
    }
    let dx = (stop - start) / (n - 1) as f64;
    DVector::from_fn(n, |i, _| start + dx * i as f64)
}

/// Numerical gradient of a sequence sampled at uniform spacing `dx`.
///
/// Central differences in the interior, one-sided differences at both ends.
/// Exact for linear sequences everywhere and for quadratics in the interior.
pub fn gradient(y: &DVector<f64>, dx: f64) -> CoreResult<DVector<f64>> {
    let n = y.len();
    if n < 2 {
        return Err(CoreError::InvalidArg {
            what: "gradient needs at least two samples",
        });
    }
    if dx == 0.0 {
        return Err(CoreError::InvalidArg {
            what: "gradient sample spacing must be nonzero",
        });
    }

    let mut g = DVector::zeros(n);
    g[0] = (y[1] - y[0]) / dx;
    for i in 1..n - 1 {
        g[i] = (y[i + 1] - y[i - 1]) / (2.0 * dx);
    }
    g[n - 1] = (y[n - 1] - y[n - 2]) / dx;
    Ok(g)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn linspace_endpoints_and_spacing() {
        let xs = linspace(2.9, 3.1, 100);
        assert_eq!(xs.len(), 100);
        assert!((xs[0] - 2.9).abs() < 1e-12);
        assert!((xs[99] - 3.1).abs() < 1e-12);

        let dx = xs[1] - xs[0];
        for i in 1..xs.len() {
            assert!((xs[i] - xs[i - 1] - dx).abs() < 1e-12);
        }
    }

    #[test]
    fn linspace_degenerate() {
        assert_eq!(linspace(1.0, 2.0, 0).len(), 0);
        let one = linspace(1.0, 2.0, 1);
        assert_eq!(one.len(), 1);
        assert_eq!(one[0], 1.0);
    }

    #[test]
    fn gradient_linear_is_exact() {
        // y = 3x + 1 sampled at dx = 0.5
        let y = DVector::from_fn(10, |i, _| 3.0 * (0.5 * i as f64) + 1.0);
        let g = gradient(&y, 0.5).unwrap();
        for i in 0..g.len() {
            assert!((g[i] - 3.0).abs() < 1e-12);
        }
    }

    #[test]
    fn gradient_quadratic_interior() {
        // y = x^2 sampled at dx = 0.1; central differences are exact on quadratics
        let dx = 0.1;
        let y = DVector::from_fn(21, |i, _| (dx * i as f64).powi(2));
        let g = gradient(&y, dx).unwrap();
        for i in 1..g.len() - 1 {
            let x = dx * i as f64;
            assert!((g[i] - 2.0 * x).abs() < 1e-10);
        }
    }

    #[test]
    fn gradient_rejects_short_input() {
        let y = DVector::from_element(1, 1.0);
        assert!(matches!(
            gradient(&y, 0.1),
            Err(CoreError::InvalidArg { .. })
        ));
    }

    #[test]
    fn gradient_rejects_zero_spacing() {
        let y = DVector::from_vec(vec![1.0, 2.0]);
        assert!(matches!(
            gradient(&y, 0.0),
            Err(CoreError::InvalidArg { .. })
        ));
    }
}

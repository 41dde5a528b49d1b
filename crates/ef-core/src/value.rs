//! Scalar / 1-D array payload shared by every layer of the system.
//!
//! Measured data is either a single reading or an ordered series of readings.
//! [`Value`] is the tagged union over those two kinds; higher-dimensional data
//! is unrepresentable because the array side is a [`DVector`].

use core::fmt;
use core::ops::{Add, Div, Mul, Sub};

use nalgebra::DVector;

use crate::error::{CoreError, CoreResult};
use crate::numeric::ensure_finite;

/// Numeric kind of a [`Value`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ValueKind {
    Scalar,
    Array,
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValueKind::Scalar => write!(f, "scalar"),
            ValueKind::Array => write!(f, "array"),
        }
    }
}

/// A scalar or a strictly 1-D array of `f64`.
///
/// Arithmetic is elementwise, with scalar operands broadcast across array
/// operands. Array-array operations require equal lengths; like the backend
/// vector type, they panic on a length mismatch, so callers validate shapes
/// up front where a mismatch is reachable.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Value {
    Scalar(f64),
    Array(DVector<f64>),
}

impl Value {
    pub fn kind(&self) -> ValueKind {
        match self {
            Value::Scalar(_) => ValueKind::Scalar,
            Value::Array(_) => ValueKind::Array,
        }
    }

    /// Element count; `None` for a scalar.
    pub fn len(&self) -> Option<usize> {
        match self {
            Value::Scalar(_) => None,
            Value::Array(a) => Some(a.len()),
        }
    }

    pub fn is_scalar(&self) -> bool {
        matches!(self, Value::Scalar(_))
    }

    pub fn is_array(&self) -> bool {
        matches!(self, Value::Array(_))
    }

    pub fn as_scalar(&self) -> Option<f64> {
        match self {
            Value::Scalar(v) => Some(*v),
            Value::Array(_) => None,
        }
    }

    pub fn as_array(&self) -> Option<&DVector<f64>> {
        match self {
            Value::Scalar(_) => None,
            Value::Array(a) => Some(a),
        }
    }

    /// Element at `index`; a scalar yields itself at every index.
    pub fn get(&self, index: usize) -> f64 {
        match self {
            Value::Scalar(v) => *v,
            Value::Array(a) => a[index],
        }
    }

    /// Apply `op` to every element, preserving kind.
    pub fn map(&self, op: impl Fn(f64) -> f64) -> Value {
        match self {
            Value::Scalar(v) => Value::Scalar(op(*v)),
            Value::Array(a) => Value::Array(a.map(op)),
        }
    }

    /// Combine two values elementwise, broadcasting scalars across arrays.
    pub fn zip_with(&self, other: &Value, op: impl Fn(f64, f64) -> f64) -> Value {
        match (self, other) {
            (Value::Scalar(a), Value::Scalar(b)) => Value::Scalar(op(*a, *b)),
            (Value::Scalar(a), Value::Array(b)) => Value::Array(b.map(|x| op(*a, x))),
            (Value::Array(a), Value::Scalar(b)) => Value::Array(a.map(|x| op(x, *b))),
            (Value::Array(a), Value::Array(b)) => {
                assert_eq!(a.len(), b.len(), "array operands must share a length");
                Value::Array(DVector::from_fn(a.len(), |i, _| op(a[i], b[i])))
            }
        }
    }

    pub fn zeros_like(&self) -> Value {
        self.map(|_| 0.0)
    }

    pub fn powi(&self, n: i32) -> Value {
        self.map(|v| v.powi(n))
    }

    pub fn powf(&self, n: f64) -> Value {
        self.map(|v| v.powf(n))
    }

    pub fn sqrt(&self) -> Value {
        self.map(f64::sqrt)
    }

    pub fn abs(&self) -> Value {
        self.map(f64::abs)
    }

    /// Every element must be finite.
    pub fn ensure_finite(&self, what: &'static str) -> CoreResult<()> {
        match self {
            Value::Scalar(v) => {
                ensure_finite(*v, what)?;
            }
            Value::Array(a) => {
                for &v in a.iter() {
                    ensure_finite(v, what)?;
                }
            }
        }
        Ok(())
    }

    /// Same kind, and same length if array-valued.
    pub fn ensure_same_shape(&self, other: &Value, what: &'static str) -> CoreResult<()> {
        if self.kind() != other.kind() {
            return Err(CoreError::KindMismatch {
                what,
                expected: self.kind(),
                got: other.kind(),
            });
        }
        if let (Some(expected), Some(got)) = (self.len(), other.len()) {
            if expected != got {
                return Err(CoreError::LengthMismatch {
                    what,
                    expected,
                    got,
                });
            }
        }
        Ok(())
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Scalar(v)
    }
}

impl From<DVector<f64>> for Value {
    fn from(a: DVector<f64>) -> Self {
        Value::Array(a)
    }
}

impl From<Vec<f64>> for Value {
    fn from(a: Vec<f64>) -> Self {
        Value::Array(DVector::from_vec(a))
    }
}

impl From<&[f64]> for Value {
    fn from(a: &[f64]) -> Self {
        Value::Array(DVector::from_column_slice(a))
    }
}

impl Add for &Value {
    type Output = Value;

    fn add(self, rhs: Self) -> Value {
        self.zip_with(rhs, |a, b| a + b)
    }
}

impl Sub for &Value {
    type Output = Value;

    fn sub(self, rhs: Self) -> Value {
        self.zip_with(rhs, |a, b| a - b)
    }
}

impl Mul for &Value {
    type Output = Value;

    fn mul(self, rhs: Self) -> Value {
        self.zip_with(rhs, |a, b| a * b)
    }
}

impl Div for &Value {
    type Output = Value;

    fn div(self, rhs: Self) -> Value {
        self.zip_with(rhs, |a, b| a / b)
    }
}

impl Add for Value {
    type Output = Value;

    fn add(self, rhs: Self) -> Value {
        &self + &rhs
    }
}

impl Sub for Value {
    type Output = Value;

    fn sub(self, rhs: Self) -> Value {
        &self - &rhs
    }
}

impl Mul for Value {
    type Output = Value;

    fn mul(self, rhs: Self) -> Value {
        &self * &rhs
    }
}

impl Div for Value {
    type Output = Value;

    fn div(self, rhs: Self) -> Value {
        &self / &rhs
    }
}

impl Add<f64> for &Value {
    type Output = Value;

    fn add(self, rhs: f64) -> Value {
        self.map(|v| v + rhs)
    }
}

impl Sub<f64> for &Value {
    type Output = Value;

    fn sub(self, rhs: f64) -> Value {
        self.map(|v| v - rhs)
    }
}

impl Mul<f64> for &Value {
    type Output = Value;

    fn mul(self, rhs: f64) -> Value {
        self.map(|v| v * rhs)
    }
}

impl Div<f64> for &Value {
    type Output = Value;

    fn div(self, rhs: f64) -> Value {
        self.map(|v| v / rhs)
    }
}

impl Mul<&Value> for f64 {
    type Output = Value;

    fn mul(self, rhs: &Value) -> Value {
        rhs.map(|v| self * v)
    }
}

impl Mul<Value> for f64 {
    type Output = Value;

    fn mul(self, rhs: Value) -> Value {
        self * &rhs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_and_len() {
        let s = Value::from(2.0);
        assert_eq!(s.kind(), ValueKind::Scalar);
        assert_eq!(s.len(), None);

        let a = Value::from(vec![1.0, 2.0, 3.0]);
        assert_eq!(a.kind(), ValueKind::Array);
        assert_eq!(a.len(), Some(3));
    }

    #[test]
    fn broadcasting_ops() {
        let s = Value::from(2.0);
        let a = Value::from(vec![1.0, 2.0, 3.0]);

        assert_eq!(&s * &a, Value::from(vec![2.0, 4.0, 6.0]));
        assert_eq!(&a + &s, Value::from(vec![3.0, 4.0, 5.0]));
        assert_eq!(&a - 1.0, Value::from(vec![0.0, 1.0, 2.0]));
        assert_eq!(3.0 * &s, Value::from(6.0));
    }

    #[test]
    fn elementwise_array_ops() {
        let a = Value::from(vec![1.0, 4.0]);
        let b = Value::from(vec![2.0, 2.0]);
        assert_eq!(&a * &b, Value::from(vec![2.0, 8.0]));
        assert_eq!(&a / &b, Value::from(vec![0.5, 2.0]));
    }

    #[test]
    #[should_panic(expected = "share a length")]
    fn mismatched_array_ops_panic() {
        let a = Value::from(vec![1.0, 2.0]);
        let b = Value::from(vec![1.0, 2.0, 3.0]);
        let _ = &a + &b;
    }

    #[test]
    fn powers_and_sqrt() {
        let a = Value::from(vec![4.0, 9.0]);
        assert_eq!(a.sqrt(), Value::from(vec![2.0, 3.0]));
        assert_eq!(Value::from(3.0).powi(2), Value::from(9.0));
    }

    #[test]
    fn ensure_same_shape_errors() {
        let s = Value::from(1.0);
        let a = Value::from(vec![1.0, 2.0]);
        let b = Value::from(vec![1.0, 2.0, 3.0]);

        assert!(matches!(
            s.ensure_same_shape(&a, "test"),
            Err(CoreError::KindMismatch { .. })
        ));
        assert!(matches!(
            a.ensure_same_shape(&b, "test"),
            Err(CoreError::LengthMismatch {
                expected: 2,
                got: 3,
                ..
            })
        ));
        assert!(a.ensure_same_shape(&a.clone(), "test").is_ok());
    }

    #[test]
    fn ensure_finite_detects_nan_element() {
        let a = Value::from(vec![1.0, f64::NAN]);
        assert!(matches!(
            a.ensure_finite("reading"),
            Err(CoreError::NonFinite { .. })
        ));
        assert!(Value::from(1.0).ensure_finite("reading").is_ok());
    }
}

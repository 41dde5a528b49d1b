//! A measured value paired with its absolute uncertainty.

use ef_core::Value;

use crate::error::{QuantityError, QuantityResult};

/// One measured or derived value with its absolute uncertainty.
///
/// Both fields are fixed at construction; the accessors hand out read-only
/// views and no mutating operation exists.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Quantity {
    value: Value,
    uncertainty: Value,
}

impl Quantity {
    /// Build a quantity from a measured value and its absolute uncertainty.
    ///
    /// Both inputs must be finite and share a kind; array inputs must also
    /// share a length.
    pub fn new(value: impl Into<Value>, uncertainty: impl Into<Value>) -> QuantityResult<Self> {
        let value = value.into();
        let uncertainty = uncertainty.into();

        value.ensure_finite("value")?;
        uncertainty.ensure_finite("uncertainty")?;

        if value.kind() != uncertainty.kind() {
            return Err(QuantityError::KindMismatch {
                value: value.kind(),
                uncertainty: uncertainty.kind(),
            });
        }
        if let (Some(value_len), Some(uncertainty_len)) = (value.len(), uncertainty.len()) {
            if value_len != uncertainty_len {
                return Err(QuantityError::ShapeMismatch {
                    value_len,
                    uncertainty_len,
                });
            }
        }

        Ok(Self { value, uncertainty })
    }

    /// A known constant: uncertainty identically zero, same shape as `value`.
    pub fn exact(value: impl Into<Value>) -> QuantityResult<Self> {
        let value = value.into();
        let uncertainty = value.zeros_like();
        Self::new(value, uncertainty)
    }

    pub fn value(&self) -> &Value {
        &self.value
    }

    pub fn uncertainty(&self) -> &Value {
        &self.uncertainty
    }

    /// `uncertainty / value` elementwise; where `value` is exactly zero, the
    /// absolute uncertainty is returned at that position instead.
    pub fn relative_uncertainty(&self) -> Value {
        self.uncertainty
            .zip_with(&self.value, |e, v| if v == 0.0 { e } else { e / v })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ef_core::ValueKind;

    #[test]
    fn scalar_construction_and_accessors() {
        let q = Quantity::new(3.0, 0.1).unwrap();
        assert_eq!(q.value(), &Value::Scalar(3.0));
        assert_eq!(q.uncertainty(), &Value::Scalar(0.1));
    }

    #[test]
    fn array_construction_requires_equal_lengths() {
        assert!(Quantity::new(vec![1.0, 2.0], vec![0.1, 0.2]).is_ok());
        assert!(matches!(
            Quantity::new(vec![1.0, 2.0], vec![0.1]),
            Err(QuantityError::ShapeMismatch {
                value_len: 2,
                uncertainty_len: 1
            })
        ));
    }

    #[test]
    fn kinds_must_match() {
        assert!(matches!(
            Quantity::new(1.0, vec![0.1]),
            Err(QuantityError::KindMismatch {
                value: ValueKind::Scalar,
                uncertainty: ValueKind::Array
            })
        ));
    }

    #[test]
    fn non_finite_input_is_rejected() {
        assert!(matches!(
            Quantity::new(f64::NAN, 0.1),
            Err(QuantityError::Core(_))
        ));
        assert!(matches!(
            Quantity::new(1.0, f64::INFINITY),
            Err(QuantityError::Core(_))
        ));
    }

    #[test]
    fn exact_has_zero_uncertainty() {
        let q = Quantity::exact(vec![1.0, 2.0]).unwrap();
        assert_eq!(q.uncertainty(), &Value::from(vec![0.0, 0.0]));

        let s = Quantity::exact(4.2).unwrap();
        assert_eq!(s.uncertainty(), &Value::Scalar(0.0));
    }

    #[test]
    fn relative_uncertainty_divides_elementwise() {
        let q = Quantity::new(vec![2.0, 4.0], vec![0.2, 0.1]).unwrap();
        assert_eq!(q.relative_uncertainty(), Value::from(vec![0.1, 0.025]));
    }

    #[test]
    fn relative_uncertainty_guards_division_by_zero() {
        let q = Quantity::new(vec![2.0, 0.0], vec![0.2, 0.3]).unwrap();
        assert_eq!(q.relative_uncertainty(), Value::from(vec![0.1, 0.3]));

        let zero = Quantity::new(0.0, 0.5).unwrap();
        assert_eq!(zero.relative_uncertainty(), Value::Scalar(0.5));
    }
}

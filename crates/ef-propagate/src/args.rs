//! Named parameter sets: call arguments and evaluation points.

use core::ops::Index;

use ef_core::Value;
use ef_quantity::Quantity;

use crate::error::{PropagateError, PropagateResult};

/// A named argument to a propagated function: either exact (a plain value,
/// zero uncertainty) or uncertain (a measured quantity).
#[derive(Clone, Debug, PartialEq)]
pub enum Argument {
    Exact(Value),
    Uncertain(Quantity),
}

impl Argument {
    /// The underlying plain value.
    pub fn value(&self) -> &Value {
        match self {
            Argument::Exact(v) => v,
            Argument::Uncertain(q) => q.value(),
        }
    }

    /// The absolute uncertainty; `None` for an exact argument.
    pub fn uncertainty(&self) -> Option<&Value> {
        match self {
            Argument::Exact(_) => None,
            Argument::Uncertain(q) => Some(q.uncertainty()),
        }
    }

    pub fn is_uncertain(&self) -> bool {
        matches!(self, Argument::Uncertain(_))
    }
}

impl From<Quantity> for Argument {
    fn from(q: Quantity) -> Self {
        Argument::Uncertain(q)
    }
}

impl From<Value> for Argument {
    fn from(v: Value) -> Self {
        Argument::Exact(v)
    }
}

impl From<f64> for Argument {
    fn from(v: f64) -> Self {
        Argument::Exact(Value::Scalar(v))
    }
}

impl From<Vec<f64>> for Argument {
    fn from(a: Vec<f64>) -> Self {
        Argument::Exact(Value::from(a))
    }
}

/// Insertion-ordered named arguments for one propagated call.
///
/// Arguments are always named; binding a name twice replaces the earlier
/// value.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Args {
    entries: Vec<(String, Argument)>,
}

impl Args {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, name: impl Into<String>, argument: impl Into<Argument>) -> Self {
        self.insert(name, argument);
        self
    }

    pub fn insert(&mut self, name: impl Into<String>, argument: impl Into<Argument>) {
        let name = name.into();
        let argument = argument.into();
        match self.entries.iter_mut().find(|(n, _)| *n == name) {
            Some((_, slot)) => *slot = argument,
            None => self.entries.push((name, argument)),
        }
    }

    pub fn get(&self, name: &str) -> Option<&Argument> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, a)| a)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Argument)> {
        self.entries.iter().map(|(n, a)| (n.as_str(), a))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The plain evaluation point: every argument reduced to its value.
    pub fn to_point(&self) -> Point {
        let mut point = Point::new();
        for (name, argument) in self.iter() {
            point.insert(name, argument.value().clone());
        }
        point
    }
}

/// Insertion-ordered named plain values: the point a function is evaluated
/// at.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Point {
    entries: Vec<(String, Value)>,
}

impl Point {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(name, value);
        self
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<Value>) {
        let name = name.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(n, _)| *n == name) {
            Some((_, slot)) => *slot = value,
            None => self.entries.push((name, value)),
        }
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.entries.iter().map(|(n, v)| (n.as_str(), v))
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(n, _)| n.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The common array length across entries, `None` if every entry is a
    /// scalar. Ragged array lengths are a shape error.
    pub fn array_len(&self) -> PropagateResult<Option<usize>> {
        let mut seen: Option<usize> = None;
        for (name, value) in self.iter() {
            if let Some(len) = value.len() {
                match seen {
                    None => seen = Some(len),
                    Some(expected) if expected != len => {
                        return Err(PropagateError::ShapeMismatch {
                            name: name.to_string(),
                            expected,
                            got: len,
                        });
                    }
                    Some(_) => {}
                }
            }
        }
        Ok(seen)
    }

    /// Slice every entry down to the element at `index`; scalars pass
    /// through unchanged.
    pub fn slice(&self, index: usize) -> Point {
        Point {
            entries: self
                .entries
                .iter()
                .map(|(name, value)| (name.clone(), Value::Scalar(value.get(index))))
                .collect(),
        }
    }
}

impl Index<&str> for Point {
    type Output = Value;

    fn index(&self, name: &str) -> &Value {
        match self.get(name) {
            Some(value) => value,
            None => panic!("no parameter named {name}"),
        }
    }
}

//! ef-quantity: the measured-quantity type for errorflow.
//!
//! A [`Quantity`] pairs a measured value with its absolute uncertainty,
//! scalar or 1-D array valued, and is immutable once constructed. Display
//! formatting rounds the uncertainty to one significant figure and factors
//! both numbers by its power of ten.

pub mod display;
pub mod error;
pub mod quantity;

pub use display::DISPLAY_ITEM_LIMIT;
pub use error::{QuantityError, QuantityResult};
pub use quantity::Quantity;

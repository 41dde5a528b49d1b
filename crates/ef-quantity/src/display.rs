//! Display formatting for quantities.
//!
//! The uncertainty is rounded to one significant figure, the value is rounded
//! to the same decimal place, and both are factored by the uncertainty's
//! power of ten: `(90 ± 6) × 10⁻¹`. Array-valued quantities render the first
//! and last [`DISPLAY_ITEM_LIMIT`] elements around an ellipsis.

use core::fmt;

use ef_core::Value;

use crate::quantity::Quantity;

/// Elements shown at each end of an abridged array rendering.
pub const DISPLAY_ITEM_LIMIT: usize = 2;

const SUPERSCRIPT_DIGITS: [char; 10] = ['⁰', '¹', '²', '³', '⁴', '⁵', '⁶', '⁷', '⁸', '⁹'];

fn round_to_sig_figs(x: f64, figures: usize) -> f64 {
    format!("{:.*e}", figures.saturating_sub(1), x)
        .parse()
        .unwrap_or(x)
}

/// Decompose into (mantissa, exponent) with one digit before the point.
fn to_scientific(x: f64) -> (f64, i32) {
    let formatted = format!("{x:E}");
    match formatted.split_once('E') {
        Some((mantissa, exponent)) => {
            (mantissa.parse().unwrap_or(x), exponent.parse().unwrap_or(0))
        }
        None => (x, 0),
    }
}

fn superscript(exponent: i32) -> String {
    let mut out = String::new();
    out.push(if exponent < 0 { '⁻' } else { '⁺' });
    for digit in exponent.unsigned_abs().to_string().chars() {
        out.push(SUPERSCRIPT_DIGITS[digit as usize - '0' as usize]);
    }
    out
}

fn format_measurement(value: f64, uncertainty: f64) -> String {
    let rounded = round_to_sig_figs(uncertainty, 1);
    let (mantissa, order) = to_scientific(rounded);
    let scale = 10f64.powi(order);
    let mut out = format!("({} ± {})", (value / scale).round(), mantissa);
    if order != 0 {
        out.push_str(" × 10");
        out.push_str(&superscript(order));
    }
    out
}

impl Quantity {
    /// Render with a unit suffix; pass `""` for a bare rendering.
    pub fn display(&self, units: &str) -> String {
        let body = match (self.value(), self.uncertainty()) {
            (Value::Scalar(v), Value::Scalar(e)) => format_measurement(*v, *e),
            (Value::Array(v), Value::Array(e)) => {
                let items: Vec<String> = if v.len() <= 2 * DISPLAY_ITEM_LIMIT {
                    (0..v.len())
                        .map(|i| format_measurement(v[i], e[i]))
                        .collect()
                } else {
                    let head = (0..DISPLAY_ITEM_LIMIT).map(|i| format_measurement(v[i], e[i]));
                    let tail = (v.len() - DISPLAY_ITEM_LIMIT..v.len())
                        .map(|i| format_measurement(v[i], e[i]));
                    head.chain(["...".to_string()]).chain(tail).collect()
                };
                format!("[ {} ]", items.join("  "))
            }
            // constructors guarantee matching kinds
            _ => unreachable!("value and uncertainty share a kind"),
        };
        if units.is_empty() {
            body
        } else {
            format!("{body} {units}")
        }
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display(""))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rounds_uncertainty_to_one_significant_figure() {
        assert_eq!(round_to_sig_figs(0.0618, 1), 0.06);
        assert_eq!(round_to_sig_figs(251.0, 1), 300.0);
    }

    #[test]
    fn scientific_decomposition() {
        assert_eq!(to_scientific(0.6), (6.0, -1));
        assert_eq!(to_scientific(2.0), (2.0, 0));
        assert_eq!(to_scientific(0.0), (0.0, 0));
    }

    #[test]
    fn superscript_rendering() {
        assert_eq!(superscript(-1), "⁻¹");
        assert_eq!(superscript(12), "⁺¹²");
    }

    #[test]
    fn scalar_display() {
        let q = Quantity::new(9.0, 0.6).unwrap();
        assert_eq!(q.display("J"), "(90 ± 6) × 10⁻¹ J");

        let q = Quantity::new(340.3125, 2.0).unwrap();
        assert_eq!(format!("{q}"), "(340 ± 2)");
    }

    #[test]
    fn long_arrays_are_abridged() {
        let q = Quantity::new(vec![1.0, 2.0, 3.0, 4.0, 5.0], vec![0.1; 5]).unwrap();
        let rendered = q.display("");
        assert!(rendered.starts_with("[ "));
        assert!(rendered.contains("..."));
        // two head and two tail items
        assert_eq!(rendered.matches('±').count(), 4);
    }

    #[test]
    fn short_arrays_render_in_full() {
        let q = Quantity::new(vec![1.0, 2.0, 3.0], vec![0.1; 3]).unwrap();
        let rendered = q.display("m");
        assert!(!rendered.contains("..."));
        assert_eq!(rendered.matches('±').count(), 3);
        assert!(rendered.ends_with(" m"));
    }
}

//! # Number Formatting
//!
//! Shortest round-trip rendering of numbers spliced into GLSL.
//!
//! ## Example
//!
//! ```rust
//! use csg_irmf::format::number;
//!
//! assert_eq!(number(2.0), "2");
//! assert_eq!(number(9.5), "9.5");
//! assert_eq!(number(-0.0), "0");
//! assert_eq!(number(1.0e-7), "1e-7");
//! ```

/// Format a number without a trailing `.0` for integral values.
///
/// Negative zero prints as `0`. Magnitudes below `1e-4` or from `1e21`
/// upward use exponent notation.
pub fn number(value: f64) -> String {
    let value = value + 0.0;
    if value != 0.0 && value.is_finite() {
        let exponent = value.abs().log10().floor();
        if !(-4.0..21.0).contains(&exponent) {
            return format!("{value:e}");
        }
    }
    format!("{value}")
}

/// Format numbers separated by `", "`.
pub fn numbers(values: &[f64]) -> String {
    values
        .iter()
        .map(|value| number(*value))
        .collect::<Vec<_>>()
        .join(", ")
}

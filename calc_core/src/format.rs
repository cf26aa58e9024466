//! Result formatting
//!
//! Results are rounded to [`RESULT_DECIMAL_PLACES`] fractional digits and then
//! written in their shortest round-trip decimal form, so float noise such as
//! `0.30000000000000004` never reaches the display.

/// Number of fractional digits kept in a calculation result
pub const RESULT_DECIMAL_PLACES: usize = 10;

/// Round `value` to `places` fractional digits.
///
/// Goes through the fixed-point decimal text rather than scaling by a power
/// of ten, so halfway cases follow the decimal expansion of the double.
pub fn round_to_places(value: f64, places: usize) -> f64 {
    format!("{:.*}", places, value).parse().unwrap_or(value)
}

/// Format a calculation result for the display.
///
/// # Example
/// ```
/// use calc_core::format::format_result;
///
/// assert_eq!(format_result(0.1 + 0.2), "0.3");
/// assert_eq!(format_result(10.0), "10");
/// assert_eq!(format_result(-2.5), "-2.5");
/// ```
pub fn format_result(value: f64) -> String {
    let rounded = round_to_places(value, RESULT_DECIMAL_PLACES);
    // -0 would otherwise print as "-0"
    if rounded == 0.0 {
        return "0".to_string();
    }
    rounded.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_float_noise_removed() {
        assert_eq!(format_result(0.1 + 0.2), "0.3");
        assert_eq!(format_result(1.1 * 3.0), "3.3");
    }

    #[test]
    fn test_integers_have_no_fraction() {
        assert_eq!(format_result(20.0), "20");
        assert_eq!(format_result(-7.0), "-7");
        assert_eq!(format_result(1e15), "1000000000000000");
    }

    #[test]
    fn test_ten_decimal_places() {
        assert_eq!(format_result(1.03 / 3.0), "0.3433333333");
        assert_eq!(format_result(2.0 / 3.0), "0.6666666667");
    }

    #[test]
    fn test_tiny_values_round_to_zero() {
        assert_eq!(format_result(1e-12), "0");
        assert_eq!(format_result(-1e-12), "0");
        assert_eq!(format_result(-0.0), "0");
    }

    #[test]
    fn test_round_to_places() {
        assert_eq!(round_to_places(1.23456, 2), 1.23);
        assert_eq!(round_to_places(-0.125, 0), -0.0);
    }
}

//! Quantity Input Coercion
//!
//! Permissive by policy: anything that is not a finite positive number
//! (blank, "abc", "0", "-2", "NaN") becomes one serving instead of being
//! rejected.

pub const DEFAULT_QUANTITY: f64 = 1.0;

pub fn coerce_quantity(input: Option<&str>) -> f64 {
    input
        .map(str::trim)
        .and_then(|raw| raw.parse::<f64>().ok())
        .filter(|qty| qty.is_finite() && *qty > 0.0)
        .unwrap_or(DEFAULT_QUANTITY)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_inputs_become_one() {
        let inputs = [
            None,
            Some(""),
            Some("   "),
            Some("abc"),
            Some("0"),
            Some("-3"),
            Some("NaN"),
            Some("inf"),
            Some("2abc"),
        ];
        for input in inputs {
            assert_eq!(coerce_quantity(input), 1.0, "input {:?}", input);
        }
    }

    #[test]
    fn test_valid_inputs_pass_through() {
        assert_eq!(coerce_quantity(Some("2")), 2.0);
        assert_eq!(coerce_quantity(Some(" 0.5 ")), 0.5);
        assert_eq!(coerce_quantity(Some("1.25")), 1.25);
    }
}

//! Number formatting shared by the parser (numeric property keys) and the
//! runtime (number-to-string conversion).

/// Format a number the way the language prints it: integral values without
/// a fractional part, `NaN`, `Infinity` and `-Infinity` spelled out.
pub fn format_number(n: f64) -> String {
    if n.is_nan() {
        return "NaN".to_string();
    }
    if n.is_infinite() {
        return if n > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if n == 0.0 {
        // -0 prints as 0
        return "0".to_string();
    }
    if n.fract() == 0.0 && n.abs() < 1e21 {
        return format!("{n:.0}");
    }
    n.to_string()
}

#[cfg(test)]
mod tests {
    use super::format_number;

    #[test]
    fn integral_values_drop_fraction() {
        assert_eq!(format_number(3.0), "3");
        assert_eq!(format_number(-42.0), "-42");
        assert_eq!(format_number(-0.0), "0");
    }

    #[test]
    fn fractions_and_specials() {
        assert_eq!(format_number(2.5), "2.5");
        assert_eq!(format_number(f64::NAN), "NaN");
        assert_eq!(format_number(f64::NEG_INFINITY), "-Infinity");
    }
}

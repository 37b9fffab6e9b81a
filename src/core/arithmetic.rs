//! Single binary operations over readout text, and rendering results back.

use super::event::Operator;

/// Apply `operator` to two operand texts.
///
/// An absent operator yields positive infinity. Operands are parsed with
/// [`parse_operand`].
///
/// ```rust
/// use calcstate::core::{evaluate, Operator};
///
/// assert_eq!(evaluate(Some("6."), Some("3."), Some(Operator::Add)), 9.0);
/// assert_eq!(evaluate(Some("6."), Some("3."), None), f64::INFINITY);
/// ```
pub fn evaluate(operand1: Option<&str>, operand2: Option<&str>, operator: Option<Operator>) -> f64 {
    let lhs = parse_operand(operand1);
    let rhs = parse_operand(operand2);
    match operator {
        Some(Operator::Add) => lhs + rhs,
        Some(Operator::Subtract) => lhs - rhs,
        Some(Operator::Divide) => lhs / rhs,
        Some(Operator::Multiply) => lhs * rhs,
        None => f64::INFINITY,
    }
}

/// Parse readout text as a number.
///
/// A trailing decimal point is accepted (`"12."` is twelve). Absent or blank
/// text is zero; anything unparsable, such as a lone `"-"`, is NaN.
pub fn parse_operand(text: Option<&str>) -> f64 {
    let Some(text) = text.map(str::trim) else {
        return 0.0;
    };
    if text.is_empty() {
        return 0.0;
    }
    text.parse::<f64>().unwrap_or(f64::NAN)
}

/// Render a number as readout text in shortest round-trip form.
///
/// Integers have no decimal point, magnitudes from `1e21` up or below `1e-6`
/// use exponent notation, and negative zero renders as `0`.
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if value == 0.0 {
        return "0".to_string();
    }

    let magnitude = value.abs();
    if !(1e-6..1e21).contains(&magnitude) {
        let formatted = format!("{value:e}");
        // `{:e}` omits the sign on positive exponents.
        return match formatted.split_once('e') {
            Some((mantissa, exponent)) if !exponent.starts_with('-') => {
                format!("{mantissa}e+{exponent}")
            }
            _ => formatted,
        };
    }
    format!("{value}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn evaluate_applies_each_operator() {
        assert_eq!(evaluate(Some("6."), Some("3."), Some(Operator::Add)), 9.0);
        assert_eq!(evaluate(Some("6."), Some("3."), Some(Operator::Subtract)), 3.0);
        assert_eq!(evaluate(Some("6."), Some("3."), Some(Operator::Divide)), 2.0);
        assert_eq!(evaluate(Some("6."), Some("3."), Some(Operator::Multiply)), 18.0);
    }

    #[test]
    fn missing_operator_is_infinite() {
        assert_eq!(evaluate(Some("1."), Some("2."), None), f64::INFINITY);
    }

    #[test]
    fn division_by_zero_is_not_an_error() {
        assert_eq!(
            evaluate(Some("5."), Some("0."), Some(Operator::Divide)),
            f64::INFINITY
        );
        assert!(evaluate(Some("0."), Some("0."), Some(Operator::Divide)).is_nan());
    }

    #[test]
    fn parse_operand_handles_readout_forms() {
        assert_eq!(parse_operand(Some("12.")), 12.0);
        assert_eq!(parse_operand(Some("-0.5")), -0.5);
        assert_eq!(parse_operand(Some("1.25")), 1.25);
        assert_eq!(parse_operand(Some("Infinity")), f64::INFINITY);
        assert_eq!(parse_operand(Some("1e+21")), 1e21);
        assert_eq!(parse_operand(None), 0.0);
        assert_eq!(parse_operand(Some("")), 0.0);
        assert!(parse_operand(Some("-")).is_nan());
        assert!(parse_operand(Some("NaN")).is_nan());
    }

    #[test]
    fn format_number_matches_readout_conventions() {
        assert_eq!(format_number(9.0), "9");
        assert_eq!(format_number(0.5), "0.5");
        assert_eq!(format_number(-12.75), "-12.75");
        assert_eq!(format_number(0.1 + 0.2), "0.30000000000000004");
        assert_eq!(format_number(-0.0), "0");
        assert_eq!(format_number(f64::INFINITY), "Infinity");
        assert_eq!(format_number(f64::NEG_INFINITY), "-Infinity");
        assert_eq!(format_number(f64::NAN), "NaN");
    }

    #[test]
    fn format_number_switches_to_exponent_form() {
        assert_eq!(format_number(1e21), "1e+21");
        assert_eq!(format_number(1.5e-7), "1.5e-7");
        assert_eq!(format_number(123456789012345680000.0), "123456789012345680000");
        assert_eq!(format_number(0.000001), "0.000001");
    }
}

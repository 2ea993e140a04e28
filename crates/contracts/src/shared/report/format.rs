//! Cell formatting shared by the results table, the comparison view and exports

use crate::domain::a001_material::NumericValue;

/// Groups the integer part with commas and keeps at most `max_decimals`
/// fractional digits, trailing zeros dropped.
///
/// ```
/// use contracts::shared::report::format::format_grouped;
/// assert_eq!(format_grouped(14000.0, 3), "14,000");
/// assert_eq!(format_grouped(-1234.5, 3), "-1,234.5");
/// ```
pub fn format_grouped(value: f64, max_decimals: usize) -> String {
    let formatted = format!("{:.*}", max_decimals, value);
    let (integer_part, decimal_part) = match formatted.split_once('.') {
        Some((i, d)) => (i, d.trim_end_matches('0')),
        None => (formatted.as_str(), ""),
    };

    let (sign, digits) = match integer_part.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", integer_part),
    };

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    // "-0" после округления
    let sign = if grouped.chars().all(|c| c == '0') && decimal_part.is_empty() {
        ""
    } else {
        sign
    };

    if decimal_part.is_empty() {
        format!("{}{}", sign, grouped)
    } else {
        format!("{}{}.{}", sign, grouped, decimal_part)
    }
}

/// Number with grouping when it coerces, the raw text otherwise
pub fn format_number(value: Option<&NumericValue>) -> String {
    match value {
        None => String::new(),
        Some(v) => match v.as_f64() {
            Some(n) => format_grouped(n, 3),
            None => v.raw(),
        },
    }
}

/// Raw value without grouping (water absorption is shown as stored)
pub fn format_raw(value: Option<&NumericValue>) -> String {
    value.map(NumericValue::raw).unwrap_or_default()
}

/// "lo° to hi°", a single bound, or empty
pub fn format_temp_range(low: Option<&NumericValue>, high: Option<&NumericValue>) -> String {
    let lo = format_raw(low);
    let hi = format_raw(high);
    let lo = lo.trim();
    let hi = hi.trim();
    match (lo.is_empty(), hi.is_empty()) {
        (true, true) => String::new(),
        (false, false) => format!("{}° to {}°", lo, hi),
        (false, true) => format!("{}°", lo),
        (true, false) => format!("{}°", hi),
    }
}

pub fn format_yes_no(value: bool) -> &'static str {
    if value {
        "Yes"
    } else {
        "No"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_grouped() {
        assert_eq!(format_grouped(0.0, 3), "0");
        assert_eq!(format_grouped(999.0, 3), "999");
        assert_eq!(format_grouped(1000.0, 3), "1,000");
        assert_eq!(format_grouped(1234567.0, 3), "1,234,567");
        assert_eq!(format_grouped(0.25, 3), "0.25");
        assert_eq!(format_grouped(1234.5678, 3), "1,234.568");
        assert_eq!(format_grouped(-40.0, 3), "-40");
        assert_eq!(format_grouped(-0.0001, 3), "0");
    }

    #[test]
    fn test_format_number_falls_back_to_raw() {
        assert_eq!(format_number(Some(&NumericValue::Number(14000.0))), "14,000");
        assert_eq!(format_number(Some(&NumericValue::from("12,000"))), "12,000");
        assert_eq!(format_number(Some(&NumericValue::from("n/a"))), "n/a");
        assert_eq!(format_number(None), "");
    }

    #[test]
    fn test_format_temp_range() {
        let lo = NumericValue::Number(-50.0);
        let hi = NumericValue::Number(480.0);
        assert_eq!(format_temp_range(Some(&lo), Some(&hi)), "-50° to 480°");
        assert_eq!(format_temp_range(Some(&lo), None), "-50°");
        assert_eq!(format_temp_range(None, Some(&hi)), "480°");
        assert_eq!(format_temp_range(None, Some(&NumericValue::from(""))), "");
        assert_eq!(format_temp_range(None, None), "");
    }
}

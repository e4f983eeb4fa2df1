/// Placeholder shown for any value the backend omitted.
pub const PLACEHOLDER: &str = "--";

/// Two-decimal rendering for optional prices and metrics. Non-finite
/// values count as missing.
pub fn format_price(value: Option<f64>) -> String {
    match value {
        Some(v) if v.is_finite() => format!("{:.2}", v),
        _ => PLACEHOLDER.to_string(),
    }
}

/// Signed percent rendering for optional return fractions (0.0123 -> "+1.23%").
pub fn format_percent(value: Option<f64>) -> String {
    match value {
        Some(v) if v.is_finite() => format!("{:+.2}%", v * 100.0),
        _ => PLACEHOLDER.to_string(),
    }
}

pub fn format_count(value: Option<u64>) -> String {
    value
        .map(|v| v.to_string())
        .unwrap_or_else(|| PLACEHOLDER.to_string())
}

pub fn format_text(value: Option<&str>) -> String {
    match value {
        Some(s) if !s.trim().is_empty() => s.to_string(),
        _ => PLACEHOLDER.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finite_numbers_get_two_decimals() {
        assert_eq!(format_price(Some(101.5)), "101.50");
        assert_eq!(format_price(Some(0.005)), "0.01");
        assert_eq!(format_price(Some(-3.14159)), "-3.14");
        assert_eq!(format_price(Some(0.0)), "0.00");
    }

    #[test]
    fn missing_or_non_finite_numbers_render_placeholder() {
        assert_eq!(format_price(None), "--");
        assert_eq!(format_price(Some(f64::NAN)), "--");
        assert_eq!(format_price(Some(f64::INFINITY)), "--");
        assert_eq!(format_price(Some(f64::NEG_INFINITY)), "--");
    }

    #[test]
    fn percent_is_signed_and_scaled() {
        assert_eq!(format_percent(Some(0.0123)), "+1.23%");
        assert_eq!(format_percent(Some(-0.005)), "-0.50%");
        assert_eq!(format_percent(None), "--");
    }

    #[test]
    fn counts_and_text_share_the_placeholder() {
        assert_eq!(format_count(Some(1258)), "1258");
        assert_eq!(format_count(None), "--");
        assert_eq!(format_text(Some("BUY")), "BUY");
        assert_eq!(format_text(Some("   ")), "--");
        assert_eq!(format_text(None), "--");
    }
}

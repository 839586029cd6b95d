//! Formatting utilities used for CLI and export outputs.

/// "Xh Ym" as shown in the report totals; "0h 0m" for zero or negative.
pub fn format_minutes_hm(total_minutes: i64) -> String {
    if total_minutes <= 0 {
        return "0h 0m".to_string();
    }
    format!("{}h {}m", total_minutes / 60, total_minutes % 60)
}

/// Counter reading for messages.
/// With `keep_decimal`, integral values keep one decimal ("100.0"), as
/// readings are typed on the meter; otherwise they print bare ("8").
pub fn fmt_reading(value: f64, keep_decimal: bool) -> String {
    if value.fract() == 0.0 && value.is_finite() {
        if keep_decimal {
            format!("{:.1}", value)
        } else {
            format!("{:.0}", value)
        }
    } else {
        format!("{}", value)
    }
}

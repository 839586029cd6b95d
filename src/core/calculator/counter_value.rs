//! Meter readings typed by hand ("9341.0", "9 395,3").

use regex::Regex;
use std::sync::LazyLock;

static NON_NUMERIC: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[^0-9.,]").unwrap());

/// Parses a counter reading.
///
/// - empty text is "no reading" and yields `Some(0.0)`;
/// - everything except digits, `.` and `,` is dropped, `,` becomes `.`;
/// - nothing left, a lone separator, a malformed number or one too large
///   for `f64` yields `None`.
pub fn parse_counter_value(text: &str) -> Option<f64> {
    if text.is_empty() {
        return Some(0.0);
    }

    let cleaned = NON_NUMERIC.replace_all(text, "").replace(',', ".");
    if cleaned.is_empty() || cleaned == "." {
        return None;
    }

    cleaned.parse::<f64>().ok().filter(|v| v.is_finite())
}

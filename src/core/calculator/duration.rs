//! Free-text stop durations ("1h 30", "2H", "45", "1:15") to minutes.

use regex::Regex;
use std::sync::LazyLock;

static NOISE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[^0-9Hh:·\s]").unwrap());

/// `[H sep] M`: optional hour group, separator, mandatory minutes.
static HOURS_MINUTES: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?:([0-9]{1,2})\s?[Hh:·]\s?)?([0-9]{1,2})$").unwrap());

/// `H h`: whole hours.
static HOURS_ONLY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([0-9]{1,2})\s?[Hh]$").unwrap());

/// Bare number of minutes.
static MINUTES_ONLY: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^([0-9]+)$").unwrap());

fn group_value(caps: &regex::Captures<'_>, idx: usize) -> i64 {
    caps.get(idx)
        .and_then(|m| m.as_str().parse::<i64>().ok())
        .unwrap_or(0)
}

/// Parses a duration into minutes. Unrecognised text yields 0, never an
/// error; the result is never negative.
pub fn parse_duration_to_minutes(text: &str) -> i64 {
    if text.is_empty() {
        return 0;
    }

    let cleaned = NOISE.replace_all(text, "");
    let cleaned = cleaned.trim();

    if let Some(caps) = HOURS_MINUTES.captures(cleaned) {
        return group_value(&caps, 1) * 60 + group_value(&caps, 2);
    }

    if let Some(caps) = HOURS_ONLY.captures(cleaned) {
        return group_value(&caps, 1) * 60;
    }

    if let Some(caps) = MINUTES_ONLY.captures(cleaned) {
        return group_value(&caps, 1);
    }

    if !cleaned.is_empty() {
        log::debug!("unrecognised duration {:?}, counted as 0", text);
    }
    0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hours_and_minutes() {
        assert_eq!(parse_duration_to_minutes("1h 30"), 90);
        assert_eq!(parse_duration_to_minutes("1:15"), 75);
        assert_eq!(parse_duration_to_minutes("2·05"), 125);
        assert_eq!(parse_duration_to_minutes("1 H 5"), 65);
    }

    #[test]
    fn whole_hours() {
        assert_eq!(parse_duration_to_minutes("1H"), 60);
        assert_eq!(parse_duration_to_minutes("12 h"), 720);
    }

    #[test]
    fn bare_minutes() {
        assert_eq!(parse_duration_to_minutes("45"), 45);
        assert_eq!(parse_duration_to_minutes("120"), 120);
    }

    #[test]
    fn noise_is_stripped_before_matching() {
        assert_eq!(parse_duration_to_minutes("1h30min"), 90);
        assert_eq!(parse_duration_to_minutes(" 45 mn "), 45);
    }

    #[test]
    fn fallback_is_zero() {
        assert_eq!(parse_duration_to_minutes(""), 0);
        assert_eq!(parse_duration_to_minutes("abc"), 0);
        assert_eq!(parse_duration_to_minutes("1h30h"), 0);
        assert_eq!(parse_duration_to_minutes("123:45"), 0);
        assert_eq!(parse_duration_to_minutes("99999999999999999999999"), 0);
    }
}

//! Per-row counter validation, including shift continuity.

use super::Limits;
use super::counter_value::parse_counter_value;
use crate::models::counter::Counter;
use crate::models::shift::Shift;
use crate::models::summary::CounterIssue;

/// End reading the row's start must match, if one is known.
///
/// Premier follows the previous day's Troisième (supplied from outside);
/// the other shifts look for the first other row of the same group holding
/// their predecessor shift. Blank readings count as unknown.
pub fn expected_predecessor_end<'a>(
    row: &Counter,
    group: &'a [Counter],
    previous_day_end: Option<&'a str>,
) -> Option<&'a str> {
    let value = match row.shift? {
        Shift::Premier => previous_day_end,
        shift => {
            let prev = shift.predecessor()?;
            group
                .iter()
                .find(|c| c.shift == Some(prev) && c.id != row.id)
                .map(|c| c.end.as_str())
        }
    };
    value.filter(|v| !v.is_empty())
}

/// Validates one counter row against its group. First failing rule wins;
/// `None` means the row is valid.
pub fn validate_counter(
    row: &Counter,
    group: &[Counter],
    previous_day_end: Option<&str>,
    limits: &Limits,
) -> Option<CounterIssue> {
    let start_text = row.start.as_str();
    let end_text = row.end.as_str();
    let has_start = !start_text.is_empty();
    let has_end = !end_text.is_empty();

    if (has_start || has_end) && row.shift.is_none() {
        return Some(CounterIssue::MissingShift);
    }

    // no shift and nothing typed yet
    let shift = row.shift?;

    let start = parse_counter_value(start_text);
    let end = parse_counter_value(end_text);

    if has_start && start.is_none() {
        return Some(CounterIssue::InvalidStart);
    }
    if has_end && end.is_none() {
        return Some(CounterIssue::InvalidEnd);
    }
    let (start, end) = (start?, end?);

    // a blank side reads as 0.0
    if end < start {
        return Some(CounterIssue::EndBeforeStart);
    }

    let hours = end - start;
    if hours > limits.max_hours_per_shift {
        return Some(CounterIssue::ExceedsMaxDuration {
            max_hours: limits.max_hours_per_shift,
            hours,
        });
    }

    if has_start
        && let Some(expected) =
            expected_predecessor_end(row, group, previous_day_end).and_then(parse_counter_value)
        && start != expected
    {
        return Some(CounterIssue::PredecessorMismatch {
            start,
            expected,
            shift,
        });
    }

    None
}

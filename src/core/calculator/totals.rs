//! Downtime/operating totals and counter group totals.

use super::counter_value::parse_counter_value;
use super::duration::parse_duration_to_minutes;
use super::TOTAL_PERIOD_MINUTES;
use crate::models::RowId;
use crate::models::counter::Counter;
use crate::models::stop::Stop;
use crate::models::summary::StopTotals;
use std::collections::BTreeMap;

/// Totals over the default 24-hour period.
pub fn compute_totals(stops: &[Stop]) -> StopTotals {
    compute_totals_for_period(stops, TOTAL_PERIOD_MINUTES)
}

/// Operating time = period − downtime, clamped at zero.
pub fn compute_totals_for_period(stops: &[Stop], period_minutes: i64) -> StopTotals {
    let total_downtime_minutes: i64 = stops
        .iter()
        .map(|s| parse_duration_to_minutes(&s.duration))
        .fold(0, i64::saturating_add);

    StopTotals {
        total_downtime_minutes,
        operating_minutes: period_minutes.saturating_sub(total_downtime_minutes).max(0),
    }
}

/// Total counted time of a group, in minutes.
///
/// Rows listed in `errors` and rows whose end is below their start
/// contribute nothing; a blank reading counts as 0.0. Readings are hours; the sum is
/// converted once, truncating toward zero.
pub fn compute_counter_total<V>(counters: &[Counter], errors: &BTreeMap<RowId, V>) -> i64 {
    let total_hours: f64 = counters
        .iter()
        .filter(|c| !errors.contains_key(&c.id))
        .filter_map(|c| {
            let start = parse_counter_value(&c.start)?;
            let end = parse_counter_value(&c.end)?;
            (end >= start).then_some(end - start)
        })
        .sum();

    (total_hours * 60.0) as i64
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::shift::Shift;
    use crate::models::summary::CounterIssue;

    fn stops(durations: &[&str]) -> Vec<Stop> {
        durations.iter().map(|d| Stop::new(d, "")).collect()
    }

    #[test]
    fn downtime_and_operating_time() {
        let t = compute_totals(&stops(&["1h", "30"]));
        assert_eq!(t.total_downtime_minutes, 90);
        assert_eq!(t.operating_minutes, 1350);
    }

    #[test]
    fn operating_time_never_negative() {
        let t = compute_totals(&stops(&["20h", "5h", "abc"]));
        assert_eq!(t.total_downtime_minutes, 1500);
        assert_eq!(t.operating_minutes, 0);
    }

    #[test]
    fn operating_plus_downtime_is_the_period() {
        for input in [vec![], vec!["1:15"], vec!["24h"], vec!["8h", "45", "2 h 10"]] {
            let t = compute_totals(&stops(&input));
            assert!(t.total_downtime_minutes <= TOTAL_PERIOD_MINUTES);
            assert_eq!(
                t.operating_minutes + t.total_downtime_minutes,
                TOTAL_PERIOD_MINUTES
            );
        }
    }

    #[test]
    fn counter_total_skips_rows_with_errors() {
        let ok = Counter::new(Some(Shift::Premier), "100", "107.5");
        let flagged = Counter::new(Some(Shift::Deuxieme), "107.5", "110");
        let mut errors = BTreeMap::new();
        errors.insert(flagged.id.clone(), CounterIssue::EndBeforeStart);

        assert_eq!(compute_counter_total(&[ok, flagged], &errors), 450);
    }

    #[test]
    fn counter_total_truncates_toward_zero() {
        // 0.01 h = 0.6 min
        let c = Counter::new(Some(Shift::Premier), "10", "10.01");
        let none: BTreeMap<RowId, CounterIssue> = BTreeMap::new();
        assert_eq!(compute_counter_total(&[c], &none), 0);
    }

    #[test]
    fn blank_start_counts_from_zero() {
        let c = Counter::new(Some(Shift::Premier), "", "5");
        let none: BTreeMap<RowId, CounterIssue> = BTreeMap::new();
        assert_eq!(compute_counter_total(&[c], &none), 300);
    }

    #[test]
    fn reversed_rows_count_zero() {
        let blank_end = Counter::new(Some(Shift::Premier), "10", "");
        let reversed = Counter::new(Some(Shift::Deuxieme), "12", "11");
        let none: BTreeMap<RowId, CounterIssue> = BTreeMap::new();
        assert_eq!(compute_counter_total(&[blank_end, reversed], &none), 0);
    }

    #[test]
    fn huge_durations_saturate() {
        let t = compute_totals(&stops(&["9223372036854775807", "9223372036854775807"]));
        assert_eq!(t.total_downtime_minutes, i64::MAX);
        assert_eq!(t.operating_minutes, 0);
    }
}

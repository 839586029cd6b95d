use crate::core::calculator::Limits;
use crate::core::calculator::counter_check::validate_counter;
use crate::core::calculator::stock_check::validate_stock_entry;
use crate::core::calculator::totals::{compute_counter_total, compute_totals_for_period};
use crate::models::counter::{Counter, CounterGroup};
use crate::models::report::{ActivityReport, DailyReport};
use crate::models::stock_entry::StockEntry;
use crate::models::summary::{CounterGroupSummary, DailySummary, ReportSummary, StockSummary};
use std::collections::BTreeMap;

pub struct Core;

impl Core {
    /// Full recalculation of an activity report. Pure: the same report
    /// always yields the same summary.
    pub fn recalculate(report: &ActivityReport, limits: &Limits) -> ReportSummary {
        let stops = compute_totals_for_period(&report.stops, limits.period_minutes);

        let vibrator = Self::counter_group(
            &report.vibrator,
            report.external_predecessor(CounterGroup::Vibrator),
            limits,
        );
        let liaison = Self::counter_group(
            &report.liaison,
            report.external_predecessor(CounterGroup::Liaison),
            limits,
        );
        let stock = Self::stock_summary(&report.stock);

        log::debug!(
            "recalculated: downtime={} operating={} vibrator={}min ({} issues) liaison={}min ({} issues) stock issues={}",
            stops.total_downtime_minutes,
            stops.operating_minutes,
            vibrator.total_minutes,
            vibrator.errors.len(),
            liaison.total_minutes,
            liaison.errors.len(),
            stock.errors.len(),
        );

        ReportSummary {
            stops,
            vibrator,
            liaison,
            stock,
        }
    }

    /// Validates every row of a counter group and totals the valid ones.
    pub fn counter_group(
        counters: &[Counter],
        previous_day_end: Option<&str>,
        limits: &Limits,
    ) -> CounterGroupSummary {
        let mut errors = BTreeMap::new();

        for counter in counters {
            if let Some(issue) = validate_counter(counter, counters, previous_day_end, limits) {
                log::trace!("counter {}: {}", counter.id, issue);
                errors.insert(counter.id.clone(), issue);
            }
        }

        let total_minutes = compute_counter_total(counters, &errors);
        let over_limit = total_minutes > limits.period_minutes;
        if over_limit {
            log::warn!(
                "counter total {} min exceeds the {} min period",
                total_minutes,
                limits.period_minutes
            );
        }

        CounterGroupSummary {
            has_errors: !errors.is_empty() || over_limit,
            errors,
            total_minutes,
            over_limit,
        }
    }

    pub fn stock_summary(entries: &[StockEntry]) -> StockSummary {
        let errors: BTreeMap<_, _> = entries
            .iter()
            .filter_map(|e| validate_stock_entry(e).map(|issue| (e.id.clone(), issue)))
            .collect();

        StockSummary {
            has_errors: !errors.is_empty(),
            errors,
        }
    }

    /// Per-module totals of the two-module daily report.
    pub fn daily_totals(report: &DailyReport, limits: &Limits) -> DailySummary {
        DailySummary {
            module1: compute_totals_for_period(&report.module1, limits.period_minutes),
            module2: compute_totals_for_period(&report.module2, limits.period_minutes),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::shift::Shift;
    use crate::models::stop::Stop;
    use crate::models::summary::{CounterIssue, StockIssue};

    fn report() -> ActivityReport {
        ActivityReport {
            previous_day_end: Some("9341.0".into()),
            stops: vec![Stop::new("1h", "Panne"), Stop::new("30", "Nettoyage")],
            vibrator: vec![
                Counter::new(Some(Shift::Premier), "9341", "9348"),
                Counter::new(Some(Shift::Deuxieme), "9348", "9355.5"),
                Counter::new(Some(Shift::Troisieme), "9355", "9360"),
            ],
            liaison: vec![Counter::new(Some(Shift::Premier), "100.5", "105.75")],
            stock: vec![StockEntry::default()],
            ..ActivityReport::default()
        }
    }

    #[test]
    fn end_to_end_totals_and_errors() {
        let r = report();
        let s = Core::recalculate(&r, &Limits::default());

        assert_eq!(s.stops.total_downtime_minutes, 90);
        assert_eq!(s.stops.operating_minutes, 1350);

        // 3rd shift starts at 9355 but 2nd ended at 9355.5
        assert_eq!(s.vibrator.errors.len(), 1);
        assert!(matches!(
            s.vibrator.errors.get(&r.vibrator[2].id),
            Some(CounterIssue::PredecessorMismatch { .. })
        ));
        assert!(s.vibrator.has_errors);
        // 7h + 7.5h
        assert_eq!(s.vibrator.total_minutes, 870);

        // liaison has no external predecessor
        assert!(s.liaison.errors.is_empty());
        assert_eq!(s.liaison.total_minutes, 315);
        assert!(!s.liaison.has_errors);

        assert!(!s.stock.has_errors);
        assert!(!s.can_submit());
        assert_eq!(s.blocking_groups(), vec!["vibrator"]);
    }

    #[test]
    fn recalculation_is_idempotent() {
        let r = report();
        let limits = Limits::default();
        assert_eq!(Core::recalculate(&r, &limits), Core::recalculate(&r, &limits));
    }

    #[test]
    fn over_limit_is_a_group_flag_only() {
        let counters = vec![
            Counter::new(Some(Shift::Premier), "0", "8"),
            Counter::new(Some(Shift::Deuxieme), "8", "16"),
            Counter::new(Some(Shift::Troisieme), "16", "24"),
        ];
        let limits = Limits {
            period_minutes: 1200,
            ..Limits::default()
        };
        let s = Core::counter_group(&counters, None, &limits);

        assert_eq!(s.total_minutes, 1440);
        assert!(s.errors.is_empty());
        assert!(s.over_limit);
        assert!(s.has_errors);
    }

    #[test]
    fn full_day_is_not_over_limit() {
        let counters = vec![
            Counter::new(Some(Shift::Premier), "0", "8"),
            Counter::new(Some(Shift::Deuxieme), "8", "16"),
            Counter::new(Some(Shift::Troisieme), "16", "24"),
        ];
        let s = Core::counter_group(&counters, None, &Limits::default());
        assert_eq!(s.total_minutes, 1440);
        assert!(!s.has_errors);
    }

    #[test]
    fn blank_start_row_counts_in_group_total() {
        let counters = vec![Counter::new(Some(Shift::Premier), "", "5")];
        let s = Core::counter_group(&counters, None, &Limits::default());
        assert!(s.errors.is_empty());
        assert_eq!(s.total_minutes, 300);
    }

    #[test]
    fn stock_flag_follows_entries() {
        let entries = vec![
            StockEntry::default(),
            StockEntry {
                quantity: "5".into(),
                ..StockEntry::default()
            },
        ];
        let s = Core::stock_summary(&entries);
        assert!(s.has_errors);
        assert_eq!(s.errors.get(&entries[1].id), Some(&StockIssue::MissingShift));
    }

    #[test]
    fn daily_modules_are_independent() {
        let daily = DailyReport {
            date: None,
            module1: vec![Stop::new("2h", "")],
            module2: vec![Stop::new("25h", "")],
        };
        let s = Core::daily_totals(&daily, &Limits::default());
        assert_eq!(s.module1.operating_minutes, 1320);
        assert_eq!(s.module2.total_downtime_minutes, 1500);
        assert_eq!(s.module2.operating_minutes, 0);
    }
}

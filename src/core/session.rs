//! Mutation front doors of the activity and daily reports.
//!
//! Every add/update/delete replaces the affected row list and recomputes
//! the whole summary before returning, so the error state can never go
//! stale. Rows are never edited in place: updates go through the pure
//! `with` reducers of each row type.

use crate::core::calculator::Limits;
use crate::core::logic::Core;
use crate::errors::{AppError, AppResult};
use crate::models::counter::{Counter, CounterField, CounterGroup};
use crate::models::report::{ActivityReport, DailyModule, DailyReport};
use crate::models::stock_entry::{StockEntry, StockField};
use crate::models::stop::{Stop, StopField};
use crate::models::summary::{DailySummary, ReportSummary};
use crate::models::{Row, RowId};

pub struct ReportSession {
    report: ActivityReport,
    limits: Limits,
    summary: ReportSummary,
}

fn unknown(group: &str, id: &str) -> AppError {
    AppError::UnknownRow {
        group: group.to_string(),
        id: id.to_string(),
    }
}

/// New list with the row `id` replaced by `update(row)`.
fn replace_row<T: Row>(
    rows: &[T],
    group: &str,
    id: &str,
    update: impl FnOnce(&T) -> T,
) -> AppResult<Vec<T>> {
    let pos = rows
        .iter()
        .position(|r| r.id() == id)
        .ok_or_else(|| unknown(group, id))?;

    let mut out = rows.to_vec();
    out[pos] = update(&rows[pos]);
    Ok(out)
}

/// New list without the row `id`.
fn remove_row<T: Row>(rows: &[T], group: &str, id: &str) -> AppResult<Vec<T>> {
    if !rows.iter().any(|r| r.id() == id) {
        return Err(unknown(group, id));
    }
    Ok(rows.iter().filter(|r| r.id() != id).cloned().collect())
}

impl ReportSession {
    pub fn new(report: ActivityReport, limits: Limits) -> Self {
        let summary = Core::recalculate(&report, &limits);
        Self {
            report,
            limits,
            summary,
        }
    }

    pub fn report(&self) -> &ActivityReport {
        &self.report
    }

    pub fn summary(&self) -> &ReportSummary {
        &self.summary
    }

    pub fn into_report(self) -> ActivityReport {
        self.report
    }

    pub fn can_submit(&self) -> bool {
        self.summary.can_submit()
    }

    fn recalculate(&mut self) {
        self.summary = Core::recalculate(&self.report, &self.limits);
    }

    pub fn set_previous_day_end(&mut self, value: Option<String>) {
        self.report.previous_day_end = value;
        self.recalculate();
    }

    // ---------------------------
    // Stops
    // ---------------------------
    pub fn add_stop(&mut self) -> RowId {
        let stop = Stop::default();
        let id = stop.id.clone();
        self.report.stops.push(stop);
        self.recalculate();
        id
    }

    pub fn update_stop(&mut self, id: &str, change: StopField) -> AppResult<()> {
        self.report.stops = replace_row(&self.report.stops, "stops", id, |s| s.with(change))?;
        self.recalculate();
        Ok(())
    }

    pub fn delete_stop(&mut self, id: &str) -> AppResult<()> {
        self.report.stops = remove_row(&self.report.stops, "stops", id)?;
        self.recalculate();
        Ok(())
    }

    // ---------------------------
    // Counters
    // ---------------------------
    pub fn add_counter(&mut self, group: CounterGroup) -> RowId {
        let counter = Counter::default();
        let id = counter.id.clone();
        self.report.counters_mut(group).push(counter);
        self.recalculate();
        id
    }

    pub fn update_counter(
        &mut self,
        group: CounterGroup,
        id: &str,
        change: CounterField,
    ) -> AppResult<()> {
        let rows = replace_row(self.report.counters(group), group.as_str(), id, |c| {
            c.with(change)
        })?;
        *self.report.counters_mut(group) = rows;
        self.recalculate();
        Ok(())
    }

    pub fn delete_counter(&mut self, group: CounterGroup, id: &str) -> AppResult<()> {
        let rows = remove_row(self.report.counters(group), group.as_str(), id)?;
        *self.report.counters_mut(group) = rows;
        self.recalculate();
        Ok(())
    }

    // ---------------------------
    // Stock
    // ---------------------------
    pub fn add_stock_entry(&mut self) -> RowId {
        let entry = StockEntry::default();
        let id = entry.id.clone();
        self.report.stock.push(entry);
        self.recalculate();
        id
    }

    pub fn update_stock_entry(&mut self, id: &str, change: StockField) -> AppResult<()> {
        self.report.stock = replace_row(&self.report.stock, "stock", id, |e| e.with(change))?;
        self.recalculate();
        Ok(())
    }

    pub fn delete_stock_entry(&mut self, id: &str) -> AppResult<()> {
        self.report.stock = remove_row(&self.report.stock, "stock", id)?;
        self.recalculate();
        Ok(())
    }
}

/// Daily two-module stop report; totals are recomputed after each mutation.
pub struct DailySession {
    report: DailyReport,
    limits: Limits,
    summary: DailySummary,
}

impl DailySession {
    pub fn new(report: DailyReport, limits: Limits) -> Self {
        let summary = Core::daily_totals(&report, &limits);
        Self {
            report,
            limits,
            summary,
        }
    }

    pub fn report(&self) -> &DailyReport {
        &self.report
    }

    pub fn summary(&self) -> &DailySummary {
        &self.summary
    }

    fn recalculate(&mut self) {
        self.summary = Core::daily_totals(&self.report, &self.limits);
    }

    pub fn add_stop(&mut self, module: DailyModule) -> RowId {
        let stop = Stop::default();
        let id = stop.id.clone();
        self.report.stops_mut(module).push(stop);
        self.recalculate();
        id
    }

    pub fn update_stop(
        &mut self,
        module: DailyModule,
        id: &str,
        change: StopField,
    ) -> AppResult<()> {
        let rows = replace_row(self.report.stops(module), module.as_str(), id, |s| {
            s.with(change)
        })?;
        *self.report.stops_mut(module) = rows;
        self.recalculate();
        Ok(())
    }

    pub fn delete_stop(&mut self, module: DailyModule, id: &str) -> AppResult<()> {
        let rows = remove_row(self.report.stops(module), module.as_str(), id)?;
        *self.report.stops_mut(module) = rows;
        self.recalculate();
        Ok(())
    }
}

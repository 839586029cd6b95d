// src/export/model.rs

use crate::models::counter::{Counter, CounterGroup};
use crate::models::report::ActivityReport;
use crate::models::stock_entry::StockEntry;
use crate::models::stop::Stop;
use crate::models::summary::{CounterGroupSummary, ReportSummary, StockSummary};
use chrono::NaiveDate;
use serde::Serialize;

/// Flat row for CSV / JSON export. Columns not used by a group stay empty.
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct RowExport {
    pub group: String,
    pub id: String,
    pub shift: String,
    pub duration: String,
    pub nature: String,
    pub start: String,
    pub end: String,
    pub park: String,
    pub product_type: String,
    pub quantity: String,
    pub start_time: String,
    pub status: String,
    pub message: String,
}

/// Full export document: the summary plus one line per row.
#[derive(Serialize, Clone, Debug)]
pub struct ReportExport {
    pub date: Option<NaiveDate>,
    pub can_submit: bool,
    pub summary: ReportSummary,
    pub rows: Vec<RowExport>,
}

fn blank(group: &str, id: &str) -> RowExport {
    RowExport {
        group: group.to_string(),
        id: id.to_string(),
        shift: String::new(),
        duration: String::new(),
        nature: String::new(),
        start: String::new(),
        end: String::new(),
        park: String::new(),
        product_type: String::new(),
        quantity: String::new(),
        start_time: String::new(),
        status: "ok".to_string(),
        message: String::new(),
    }
}

fn with_status(mut row: RowExport, message: Option<String>) -> RowExport {
    if let Some(m) = message {
        row.status = "error".to_string();
        row.message = m;
    }
    row
}

fn stop_row(s: &Stop) -> RowExport {
    RowExport {
        duration: s.duration.clone(),
        nature: s.nature.clone(),
        ..blank("stops", &s.id)
    }
}

fn counter_row(group: CounterGroup, c: &Counter, summary: &CounterGroupSummary) -> RowExport {
    let row = RowExport {
        shift: c.shift.map(|s| s.label().to_string()).unwrap_or_default(),
        start: c.start.clone(),
        end: c.end.clone(),
        ..blank(group.as_str(), &c.id)
    };
    with_status(row, summary.errors.get(&c.id).map(|e| e.to_string()))
}

fn stock_row(e: &StockEntry, summary: &StockSummary) -> RowExport {
    let row = RowExport {
        shift: e.shift.map(|s| s.label().to_string()).unwrap_or_default(),
        park: e.park.map(|p| p.label().to_string()).unwrap_or_default(),
        product_type: e
            .product_type
            .map(|t| t.label().to_string())
            .unwrap_or_default(),
        quantity: e.quantity.clone(),
        start_time: e.start_time.clone(),
        ..blank("stock", &e.id)
    };
    with_status(row, summary.errors.get(&e.id).map(|i| i.to_string()))
}

/// Rows in display order: stops, vibrator, liaison, stock.
pub(crate) fn report_rows(report: &ActivityReport, summary: &ReportSummary) -> Vec<RowExport> {
    let mut rows: Vec<RowExport> = report.stops.iter().map(stop_row).collect();
    rows.extend(
        report
            .vibrator
            .iter()
            .map(|c| counter_row(CounterGroup::Vibrator, c, &summary.vibrator)),
    );
    rows.extend(
        report
            .liaison
            .iter()
            .map(|c| counter_row(CounterGroup::Liaison, c, &summary.liaison)),
    );
    rows.extend(report.stock.iter().map(|e| stock_row(e, &summary.stock)));
    rows
}

impl ReportExport {
    pub fn build(report: &ActivityReport, summary: &ReportSummary) -> Self {
        Self {
            date: report.date,
            can_submit: summary.can_submit(),
            summary: summary.clone(),
            rows: report_rows(report, summary),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::calculator::Limits;
    use crate::core::logic::Core;
    use crate::models::shift::Shift;

    #[test]
    fn rows_carry_their_validation_message() {
        let report = ActivityReport {
            stops: vec![Stop::new("1h", "Panne")],
            vibrator: vec![Counter::new(None, "10", "")],
            liaison: vec![],
            stock: vec![StockEntry {
                shift: Some(Shift::Premier),
                quantity: "4".into(),
                ..StockEntry::default()
            }],
            ..ActivityReport::default()
        };
        let summary = Core::recalculate(&report, &Limits::default());
        let export = ReportExport::build(&report, &summary);

        assert_eq!(export.rows.len(), 3);
        assert_eq!(export.rows[0].group, "stops");
        assert_eq!(export.rows[0].duration, "1h");
        assert_eq!(export.rows[1].status, "error");
        assert_eq!(export.rows[1].message, "Veuillez sélectionner un poste.");
        assert_eq!(export.rows[2].shift, "1er");
        assert_eq!(export.rows[2].status, "ok");
        assert!(!export.can_submit);
    }
}

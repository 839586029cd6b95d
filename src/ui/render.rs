//! Text rendering of a recalculated report for the terminal.

use crate::models::counter::{Counter, CounterGroup};
use crate::models::report::{ActivityReport, DailyReport};
use crate::models::shift::Shift;
use crate::models::stock_entry::StockEntry;
use crate::models::stop::Stop;
use crate::models::summary::{CounterGroupSummary, DailySummary, ReportSummary, StockSummary};
use crate::ui::messages::colors_enabled;
use crate::utils::colors::{RED, color_for_status, paint};
use crate::utils::format_minutes_hm;
use crate::utils::table::{Column, Table};

fn or_dash(s: &str) -> String {
    if s.is_empty() {
        "--".to_string()
    } else {
        s.to_string()
    }
}

fn status_cell(message: Option<String>) -> String {
    let colors = colors_enabled();
    match message {
        Some(m) => paint(&m, RED, colors),
        None => paint("OK", color_for_status(false), colors),
    }
}

pub fn stops_table(stops: &[Stop]) -> String {
    let mut t = Table::new(vec![
        Column::new("#", 3),
        Column::new("Durée", 12),
        Column::new("Nature", 24),
    ]);
    for (i, s) in stops.iter().enumerate() {
        t.add_row(vec![
            (i + 1).to_string(),
            or_dash(&s.duration),
            or_dash(&s.nature),
        ]);
    }
    t.render()
}

pub fn counters_table(counters: &[Counter], summary: &CounterGroupSummary) -> String {
    let mut t = Table::new(vec![
        Column::new("#", 3),
        Column::new("Poste", 6),
        Column::new("Début", 12),
        Column::new("Fin", 12),
        Column::new("Statut", 10),
    ]);
    let colors = colors_enabled();
    for (i, c) in counters.iter().enumerate() {
        let issue = summary.errors.get(&c.id);
        // highlight the reading the issue is about
        let start = if issue.is_some_and(|e| e.concerns_start()) {
            paint(&or_dash(&c.start), RED, colors)
        } else {
            or_dash(&c.start)
        };
        let end = if issue.is_some_and(|e| e.concerns_end()) {
            paint(&or_dash(&c.end), RED, colors)
        } else {
            or_dash(&c.end)
        };

        t.add_row(vec![
            (i + 1).to_string(),
            c.shift.map(|s| s.label().to_string()).unwrap_or_else(|| "--".into()),
            start,
            end,
            status_cell(issue.map(|e| e.to_string())),
        ]);
    }
    t.render()
}

pub fn stock_table(entries: &[StockEntry], summary: &StockSummary) -> String {
    let mut t = Table::new(vec![
        Column::new("#", 3),
        Column::new("Poste", 6),
        Column::new("PARK", 7),
        Column::new("Type", 7),
        Column::new("Quantité", 9),
        Column::new("Heure", 6),
        Column::new("Statut", 10),
    ]);
    for (i, e) in entries.iter().enumerate() {
        t.add_row(vec![
            (i + 1).to_string(),
            e.shift.map(|s| s.label().to_string()).unwrap_or_else(|| "--".into()),
            e.park.map(|p| p.label().to_string()).unwrap_or_else(|| "--".into()),
            e.product_type
                .map(|p| p.label().to_string())
                .unwrap_or_else(|| "--".into()),
            or_dash(&e.quantity),
            or_dash(&e.start_time),
            status_cell(summary.errors.get(&e.id).map(|i| i.to_string())),
        ]);
    }
    t.render()
}

fn group_footer(group: CounterGroup, summary: &CounterGroupSummary) -> String {
    let mut out = format!(
        "Total {}: {}",
        group.as_str(),
        format_minutes_hm(summary.total_minutes)
    );
    if summary.over_limit {
        out.push_str(" (dépasse 24h)");
    }
    out
}

/// Full text of an activity report and its summary.
pub fn render_report(report: &ActivityReport, summary: &ReportSummary) -> String {
    let mut out = String::new();

    if report.date.is_some() {
        out.push_str(&format!("Rapport d'activité du {}\n\n", report.date_str()));
    }

    out.push_str("Arrêts\n");
    out.push_str(&stops_table(&report.stops));
    out.push_str(&format!(
        "Temps d'arrêt total: {}\nTemps de fonctionnement estimé: {}\n\n",
        format_minutes_hm(summary.stops.total_downtime_minutes),
        format_minutes_hm(summary.stops.operating_minutes)
    ));

    let legend: Vec<String> = Shift::ALL
        .iter()
        .map(|s| format!("{} {}", s.label(), s.window_str()))
        .collect();
    out.push_str(&format!("Postes: {}\n\n", legend.join(" | ")));

    for (group, group_summary) in [
        (CounterGroup::Vibrator, &summary.vibrator),
        (CounterGroup::Liaison, &summary.liaison),
    ] {
        out.push_str(group.title());
        out.push('\n');
        out.push_str(&counters_table(report.counters(group), group_summary));
        out.push_str(&group_footer(group, group_summary));
        out.push_str("\n\n");
    }

    out.push_str("Stock\n");
    out.push_str(&stock_table(&report.stock, &summary.stock));
    out
}

pub fn render_daily(report: &DailyReport, summary: &DailySummary) -> String {
    let mut out = String::new();
    for (title, stops, totals) in [
        ("Module 1 - Arrêts", &report.module1, &summary.module1),
        ("Module 2 - Arrêts", &report.module2, &summary.module2),
    ] {
        out.push_str(title);
        out.push('\n');
        out.push_str(&stops_table(stops));
        out.push_str(&format!(
            "Arrêt: {} | Fonctionnement: {}\n\n",
            format_minutes_hm(totals.total_downtime_minutes),
            format_minutes_hm(totals.operating_minutes)
        ));
    }
    out
}

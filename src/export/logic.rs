// src/export/logic.rs

use crate::errors::AppResult;
use crate::export::ExportFormat;
use crate::export::fs_utils::ensure_writable;
use crate::export::json_csv::{export_csv, export_json};
use crate::export::model::ReportExport;
use crate::models::report::ActivityReport;
use crate::models::summary::ReportSummary;
use crate::ui::messages::warning;
use std::path::Path;

/// High-level export logic.
pub struct ExportLogic;

impl ExportLogic {
    /// Writes the report rows and their validation state to `file`.
    pub fn export(
        report: &ActivityReport,
        summary: &ReportSummary,
        format: ExportFormat,
        file: &Path,
        force: bool,
    ) -> AppResult<()> {
        ensure_writable(file, force)?;

        if !summary.can_submit() {
            warning(format!(
                "Exporting a report with errors in: {}",
                summary.blocking_groups().join(", ")
            ));
        }

        let doc = ReportExport::build(report, summary);
        match format {
            ExportFormat::Json => export_json(&doc, file),
            ExportFormat::Csv => export_csv(&doc, file),
        }
    }
}

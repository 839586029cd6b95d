//! Output of a recalculation: totals, per-row issues and group flags.

use super::RowId;
use super::shift::Shift;
use crate::utils::formatting::fmt_reading;
use serde::{Serialize, Serializer};
use std::collections::BTreeMap;
use std::fmt;
use thiserror::Error;

/// Validation problem found on a counter row.
#[derive(Debug, Clone, PartialEq)]
pub enum CounterIssue {
    MissingShift,
    InvalidStart,
    InvalidEnd,
    EndBeforeStart,
    ExceedsMaxDuration {
        max_hours: f64,
        hours: f64,
    },
    PredecessorMismatch {
        start: f64,
        expected: f64,
        shift: Shift,
    },
}

impl fmt::Display for CounterIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CounterIssue::MissingShift => write!(f, "Veuillez sélectionner un poste."),
            CounterIssue::InvalidStart => write!(f, "Début invalide."),
            CounterIssue::InvalidEnd => write!(f, "Fin invalide."),
            CounterIssue::EndBeforeStart => write!(f, "Fin < Début."),
            CounterIssue::ExceedsMaxDuration { max_hours, hours } => write!(
                f,
                "Durée max ({} h) dépassée ({:.2}h).",
                fmt_reading(*max_hours, false),
                hours
            ),
            CounterIssue::PredecessorMismatch {
                start,
                expected,
                shift,
            } => write!(
                f,
                "Début ({}) doit correspondre à Fin ({}) du {} Poste.",
                fmt_reading(*start, true),
                fmt_reading(*expected, true),
                shift.predecessor_label()
            ),
        }
    }
}

impl CounterIssue {
    /// The issue concerns the start reading (UI highlights that field).
    pub fn concerns_start(&self) -> bool {
        matches!(
            self,
            CounterIssue::InvalidStart | CounterIssue::PredecessorMismatch { .. }
        )
    }

    pub fn concerns_end(&self) -> bool {
        matches!(
            self,
            CounterIssue::InvalidEnd
                | CounterIssue::EndBeforeStart
                | CounterIssue::ExceedsMaxDuration { .. }
        )
    }
}

impl Serialize for CounterIssue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

/// Validation problem found on a stock entry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StockIssue {
    #[error("Veuillez sélectionner un poste.")]
    MissingShift,
}

impl Serialize for StockIssue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StopTotals {
    pub total_downtime_minutes: i64,
    pub operating_minutes: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CounterGroupSummary {
    pub errors: BTreeMap<RowId, CounterIssue>,
    pub total_minutes: i64,
    /// Group total exceeds the period; not attributed to any row.
    pub over_limit: bool,
    pub has_errors: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct StockSummary {
    pub errors: BTreeMap<RowId, StockIssue>,
    pub has_errors: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportSummary {
    pub stops: StopTotals,
    pub vibrator: CounterGroupSummary,
    pub liaison: CounterGroupSummary,
    pub stock: StockSummary,
}

impl ReportSummary {
    /// Submission is disabled while any group-level flag is set.
    pub fn can_submit(&self) -> bool {
        !self.vibrator.has_errors && !self.liaison.has_errors && !self.stock.has_errors
    }

    /// Names of the groups currently blocking submission.
    pub fn blocking_groups(&self) -> Vec<&'static str> {
        let mut out = Vec::new();
        if self.vibrator.has_errors {
            out.push("vibrator");
        }
        if self.liaison.has_errors {
            out.push("liaison");
        }
        if self.stock.has_errors {
            out.push("stock");
        }
        out
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DailySummary {
    pub module1: StopTotals,
    pub module2: StopTotals,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn max_duration_message_has_two_decimals() {
        let issue = CounterIssue::ExceedsMaxDuration {
            max_hours: 8.0,
            hours: 8.0100001,
        };
        assert_eq!(issue.to_string(), "Durée max (8 h) dépassée (8.01h).");
    }

    #[test]
    fn mismatch_message_names_both_values() {
        let issue = CounterIssue::PredecessorMismatch {
            start: 99.9,
            expected: 100.0,
            shift: Shift::Deuxieme,
        };
        assert_eq!(
            issue.to_string(),
            "Début (99.9) doit correspondre à Fin (100.0) du 1er Poste."
        );
        assert!(issue.concerns_start());
    }
}

use super::shift::Shift;
use super::{RowId, new_row_id};
use serde::{Deserialize, Serialize};

/// A meter reading pair (start, end) bounding one shift's usage.
/// Readings are expressed in hours, as shown by the instrument.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Counter {
    #[serde(default = "new_row_id")]
    pub id: RowId,
    #[serde(default)]
    pub shift: Option<Shift>,
    #[serde(default)]
    pub start: String,
    #[serde(default)]
    pub end: String,
}

/// Field-keyed change applied to a Counter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CounterField {
    Shift(Option<Shift>),
    Start(String),
    End(String),
}

/// The two independently validated counter groups of an activity report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CounterGroup {
    Vibrator,
    Liaison,
}

impl CounterGroup {
    pub fn as_str(&self) -> &'static str {
        match self {
            CounterGroup::Vibrator => "vibrator",
            CounterGroup::Liaison => "liaison",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            CounterGroup::Vibrator => "Compteurs Vibreur",
            CounterGroup::Liaison => "Compteurs Liaison",
        }
    }
}

impl Default for Counter {
    fn default() -> Self {
        Self {
            id: new_row_id(),
            shift: None,
            start: String::new(),
            end: String::new(),
        }
    }
}

impl Counter {
    pub fn new(shift: Option<Shift>, start: &str, end: &str) -> Self {
        Self {
            shift,
            start: start.to_string(),
            end: end.to_string(),
            ..Self::default()
        }
    }

    pub fn with(&self, change: CounterField) -> Self {
        match change {
            CounterField::Shift(shift) => Self {
                shift,
                ..self.clone()
            },
            CounterField::Start(start) => Self {
                start,
                ..self.clone()
            },
            CounterField::End(end) => Self {
                end,
                ..self.clone()
            },
        }
    }
}

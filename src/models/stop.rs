use super::{RowId, new_row_id};
use serde::{Deserialize, Serialize};

/// One downtime interval ("arrêt") recorded for the 24-hour period.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stop {
    #[serde(default = "new_row_id")]
    pub id: RowId,
    /// Free text, e.g. "1h 30", "45", "2H".
    #[serde(default)]
    pub duration: String,
    /// Cause of the stop.
    #[serde(default)]
    pub nature: String,
}

/// Field-keyed change applied to a Stop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StopField {
    Duration(String),
    Nature(String),
}

impl Default for Stop {
    fn default() -> Self {
        Self {
            id: new_row_id(),
            duration: String::new(),
            nature: String::new(),
        }
    }
}

impl Stop {
    pub fn new(duration: &str, nature: &str) -> Self {
        Self {
            duration: duration.to_string(),
            nature: nature.to_string(),
            ..Self::default()
        }
    }

    /// Returns a new row with the change applied; `self` is left untouched.
    pub fn with(&self, change: StopField) -> Self {
        match change {
            StopField::Duration(duration) => Self {
                duration,
                ..self.clone()
            },
            StopField::Nature(nature) => Self {
                nature,
                ..self.clone()
            },
        }
    }
}

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

/// One of the three 8-hour work periods ("poste") covering a 24-hour cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Shift {
    Premier,   // 06:30 - 14:30
    Deuxieme,  // 14:30 - 22:30
    Troisieme, // 22:30 - 06:30 (starts the previous evening)
}

impl Shift {
    pub const ALL: [Shift; 3] = [Shift::Premier, Shift::Deuxieme, Shift::Troisieme];

    pub fn label(&self) -> &'static str {
        match self {
            Shift::Premier => "1er",
            Shift::Deuxieme => "2ème",
            Shift::Troisieme => "3ème",
        }
    }

    /// (start, end) of the shift window.
    pub fn window(&self) -> (NaiveTime, NaiveTime) {
        let (start, end) = match self {
            Shift::Premier => ((6, 30), (14, 30)),
            Shift::Deuxieme => ((14, 30), (22, 30)),
            Shift::Troisieme => ((22, 30), (6, 30)),
        };
        (
            NaiveTime::from_hms_opt(start.0, start.1, 0).unwrap_or(NaiveTime::MIN),
            NaiveTime::from_hms_opt(end.0, end.1, 0).unwrap_or(NaiveTime::MIN),
        )
    }

    pub fn window_str(&self) -> String {
        let (start, end) = self.window();
        format!("{} - {}", start.format("%H:%M"), end.format("%H:%M"))
    }

    /// Shift whose end reading this shift's start reading must match.
    /// `None` for Premier: its predecessor is the previous day's Troisième,
    /// which lives outside the report.
    pub fn predecessor(&self) -> Option<Shift> {
        match self {
            Shift::Premier => None,
            Shift::Deuxieme => Some(Shift::Premier),
            Shift::Troisieme => Some(Shift::Deuxieme),
        }
    }

    /// Label used in continuity messages.
    pub fn predecessor_label(&self) -> &'static str {
        match self {
            Shift::Premier => "3ème (veille)",
            Shift::Deuxieme => "1er",
            Shift::Troisieme => "2ème",
        }
    }

    /// Accepts the enum name, the display label or the shift number.
    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_lowercase().as_str() {
            "premier" | "1er" | "1" => Some(Shift::Premier),
            "deuxieme" | "deuxième" | "2ème" | "2eme" | "2" => Some(Shift::Deuxieme),
            "troisieme" | "troisième" | "3ème" | "3eme" | "3" => Some(Shift::Troisieme),
            _ => None,
        }
    }
}

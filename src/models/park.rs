use serde::{Deserialize, Serialize};

/// Storage location of a stock entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Park {
    Park1,
    Park2,
    Park3,
}

impl Park {
    pub fn label(&self) -> &'static str {
        match self {
            Park::Park1 => "PARK 1",
            Park::Park2 => "PARK 2",
            Park::Park3 => "PARK 3",
        }
    }

    /// Helper: convert input code from CLI ("park1", "PARK 2", "3")
    pub fn from_code(code: &str) -> Option<Self> {
        let c: String = code
            .chars()
            .filter(|c| !c.is_whitespace())
            .collect::<String>()
            .to_uppercase();
        match c.as_str() {
            "PARK1" | "1" => Some(Park::Park1),
            "PARK2" | "2" => Some(Park::Park2),
            "PARK3" | "3" => Some(Park::Park3),
            _ => None,
        }
    }
}

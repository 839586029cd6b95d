use serde::{Deserialize, Serialize};

/// Product type of a stock entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum StockType {
    Normal,
    Oceane,
    Pb30,
}

impl StockType {
    pub fn label(&self) -> &'static str {
        match self {
            StockType::Normal => "NORMAL",
            StockType::Oceane => "OCEANE",
            StockType::Pb30 => "PB30",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_uppercase().as_str() {
            "NORMAL" => Some(StockType::Normal),
            "OCEANE" | "OCÉANE" => Some(StockType::Oceane),
            "PB30" => Some(StockType::Pb30),
            _ => None,
        }
    }
}

use super::park::Park;
use super::shift::Shift;
use super::stock_type::StockType;
use super::{RowId, new_row_id};
use serde::{Deserialize, Serialize};

/// A stock movement line. Inputs cascade: shift → park → type → quantity,
/// with `start_time` as an alternative to the park/type/quantity triple.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StockEntry {
    #[serde(default = "new_row_id")]
    pub id: RowId,
    #[serde(default)]
    pub shift: Option<Shift>,
    #[serde(default)]
    pub park: Option<Park>,
    #[serde(default)]
    pub product_type: Option<StockType>,
    #[serde(default)]
    pub quantity: String,
    #[serde(default)]
    pub start_time: String,
}

/// Field-keyed change applied to a StockEntry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StockField {
    Shift(Option<Shift>),
    Park(Option<Park>),
    ProductType(Option<StockType>),
    Quantity(String),
    StartTime(String),
}

impl Default for StockEntry {
    fn default() -> Self {
        Self {
            id: new_row_id(),
            shift: None,
            park: None,
            product_type: None,
            quantity: String::new(),
            start_time: String::new(),
        }
    }
}

impl StockEntry {
    /// Returns a new entry with the change applied and every dependent
    /// field reset.
    pub fn with(&self, change: StockField) -> Self {
        match change {
            StockField::Shift(shift) => Self {
                shift,
                park: None,
                product_type: None,
                quantity: String::new(),
                start_time: String::new(),
                ..self.clone()
            },
            StockField::Park(park) => Self {
                park,
                product_type: None,
                quantity: String::new(),
                start_time: String::new(),
                ..self.clone()
            },
            StockField::ProductType(product_type) => Self {
                product_type,
                quantity: String::new(),
                start_time: String::new(),
                ..self.clone()
            },
            StockField::Quantity(quantity) => Self {
                quantity,
                ..self.clone()
            },
            // start_time and the park/type/quantity triple are exclusive
            StockField::StartTime(start_time) => Self {
                start_time,
                park: None,
                product_type: None,
                quantity: String::new(),
                ..self.clone()
            },
        }
    }

    /// True when any input depending on the shift has been filled in.
    pub fn has_shift_dependent_input(&self) -> bool {
        self.park.is_some()
            || self.product_type.is_some()
            || !self.quantity.is_empty()
            || !self.start_time.is_empty()
    }
}

pub mod counter;
pub mod park;
pub mod report;
pub mod shift;
pub mod stock_entry;
pub mod stock_type;
pub mod stop;
pub mod summary;

use std::collections::HashSet;

/// Rows are identified by a generated id, unique within their list.
pub type RowId = String;

/// Fresh row id (UUID v4).
pub fn new_row_id() -> RowId {
    uuid::Uuid::new_v4().to_string()
}

/// Common access to the generated id of a report row.
pub trait Row: Clone {
    fn id(&self) -> &str;
}

/// First id used by more than one row of the list.
pub fn duplicate_id<T: Row>(rows: &[T]) -> Option<&str> {
    let mut seen = HashSet::new();
    rows.iter().map(Row::id).find(|id| !seen.insert(*id))
}

impl Row for stop::Stop {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Row for counter::Counter {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Row for stock_entry::StockEntry {
    fn id(&self) -> &str {
        &self.id
    }
}

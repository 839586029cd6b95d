use crate::models::stock_entry::StockEntry;
use crate::models::summary::StockIssue;

/// Any shift-dependent input without a shift is invalid.
pub fn validate_stock_entry(entry: &StockEntry) -> Option<StockIssue> {
    if entry.shift.is_none() && entry.has_shift_dependent_input() {
        return Some(StockIssue::MissingShift);
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::park::Park;
    use crate::models::shift::Shift;

    #[test]
    fn blank_entry_is_valid() {
        assert_eq!(validate_stock_entry(&StockEntry::default()), None);
    }

    #[test]
    fn inputs_without_shift_are_rejected() {
        let entry = StockEntry {
            start_time: "07:10".into(),
            ..StockEntry::default()
        };
        assert_eq!(validate_stock_entry(&entry), Some(StockIssue::MissingShift));

        let entry = StockEntry {
            park: Some(Park::Park3),
            ..StockEntry::default()
        };
        assert_eq!(validate_stock_entry(&entry), Some(StockIssue::MissingShift));
    }

    #[test]
    fn shift_makes_entry_valid() {
        let entry = StockEntry {
            shift: Some(Shift::Deuxieme),
            park: Some(Park::Park1),
            quantity: "30".into(),
            ..StockEntry::default()
        };
        assert_eq!(validate_stock_entry(&entry), None);
    }
}

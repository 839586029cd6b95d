//! Pure rule evaluation over report rows. Nothing here fails: malformed
//! input degrades to a zero contribution or a row issue.

pub mod counter_check;
pub mod counter_value;
pub mod duration;
pub mod stock_check;
pub mod totals;

/// Maximum span of a single shift, in counter units (hours).
pub const MAX_HOURS_PER_SHIFT: f64 = 8.0;

/// Minutes in the 24-hour reporting period.
pub const TOTAL_PERIOD_MINUTES: i64 = 24 * 60;

/// Ceilings applied during validation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Limits {
    pub max_hours_per_shift: f64,
    pub period_minutes: i64,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            max_hours_per_shift: MAX_HOURS_PER_SHIFT,
            period_minutes: TOTAL_PERIOD_MINUTES,
        }
    }
}

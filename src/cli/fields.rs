//! Translation of `--field/--value` pairs into typed row changes.

use crate::errors::{AppError, AppResult};
use crate::models::counter::CounterField;
use crate::models::park::Park;
use crate::models::shift::Shift;
use crate::models::stock_entry::StockField;
use crate::models::stock_type::StockType;
use crate::models::stop::StopField;

fn invalid(field: &str, value: &str) -> AppError {
    AppError::InvalidValue {
        field: field.to_string(),
        value: value.to_string(),
    }
}

fn is_clear(value: &str) -> bool {
    value.trim().is_empty() || value.trim().eq_ignore_ascii_case("none")
}

/// Optional selection: empty/"none" clears it, anything else must parse.
fn selection<T>(field: &str, value: &str, parse: fn(&str) -> Option<T>) -> AppResult<Option<T>> {
    if is_clear(value) {
        return Ok(None);
    }
    parse(value).map(Some).ok_or_else(|| invalid(field, value))
}

pub fn stop_change(field: &str, value: &str) -> AppResult<StopField> {
    match field {
        "duration" => Ok(StopField::Duration(value.to_string())),
        "nature" => Ok(StopField::Nature(value.to_string())),
        _ => Err(invalid("field", field)),
    }
}

pub fn counter_change(field: &str, value: &str) -> AppResult<CounterField> {
    match field {
        "shift" => Ok(CounterField::Shift(selection(field, value, Shift::from_code)?)),
        "start" => Ok(CounterField::Start(value.to_string())),
        "end" => Ok(CounterField::End(value.to_string())),
        _ => Err(invalid("field", field)),
    }
}

pub fn stock_change(field: &str, value: &str) -> AppResult<StockField> {
    match field {
        "shift" => Ok(StockField::Shift(selection(field, value, Shift::from_code)?)),
        "park" => Ok(StockField::Park(selection(field, value, Park::from_code)?)),
        "type" | "product-type" => Ok(StockField::ProductType(selection(
            field,
            value,
            StockType::from_code,
        )?)),
        "quantity" => Ok(StockField::Quantity(value.to_string())),
        "start-time" | "start_time" => Ok(StockField::StartTime(value.to_string())),
        _ => Err(invalid("field", field)),
    }
}

use super::{open_daily_session, open_session, save_and_show, save_daily_and_show};
use crate::cli::fields::{counter_change, stock_change, stop_change};
use crate::cli::parser::{Commands, RowGroup};
use crate::config::Config;
use crate::errors::AppResult;
use crate::models::counter::CounterGroup;

/// Apply one field change to a row, then recalculate and save.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Set {
        file,
        group,
        row,
        field,
        value,
    } = cmd
    {
        let field = field.to_lowercase();

        if let Some(module) = group.daily_module() {
            let mut session = open_daily_session(file, cfg)?;
            session.update_stop(module, row, stop_change(&field, value)?)?;
            return save_daily_and_show(file, &session);
        }

        let mut session = open_session(file, cfg)?;
        match group {
            RowGroup::Vibrator => session.update_counter(
                CounterGroup::Vibrator,
                row,
                counter_change(&field, value)?,
            )?,
            RowGroup::Liaison => session.update_counter(
                CounterGroup::Liaison,
                row,
                counter_change(&field, value)?,
            )?,
            RowGroup::Stock => session.update_stock_entry(row, stock_change(&field, value)?)?,
            _ => session.update_stop(row, stop_change(&field, value)?)?,
        }

        save_and_show(file, &session)?;
    }
    Ok(())
}

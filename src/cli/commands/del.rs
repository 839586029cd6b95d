use super::{open_daily_session, open_session, save_and_show, save_daily_and_show};
use crate::cli::parser::{Commands, RowGroup};
use crate::config::Config;
use crate::errors::AppResult;
use crate::models::counter::CounterGroup;
use crate::ui::messages::success;

/// Delete a row, then recalculate and save.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Del { file, group, row } = cmd {
        if let Some(module) = group.daily_module() {
            let mut session = open_daily_session(file, cfg)?;
            session.delete_stop(module, row)?;
            save_daily_and_show(file, &session)?;
        } else {
            let mut session = open_session(file, cfg)?;
            match group {
                RowGroup::Vibrator => session.delete_counter(CounterGroup::Vibrator, row)?,
                RowGroup::Liaison => session.delete_counter(CounterGroup::Liaison, row)?,
                RowGroup::Stock => session.delete_stock_entry(row)?,
                _ => session.delete_stop(row)?,
            }
            save_and_show(file, &session)?;
        }

        success(format!("Row {} deleted from {}", row, group.as_str()));
    }
    Ok(())
}

use super::{open_daily_session, open_session, save_and_show, save_daily_and_show};
use crate::cli::parser::{Commands, RowGroup};
use crate::config::Config;
use crate::errors::AppResult;
use crate::models::counter::CounterGroup;
use crate::ui::messages::success;

/// Append a blank row and print its id.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Add { file, group } = cmd {
        let id = if let Some(module) = group.daily_module() {
            let mut session = open_daily_session(file, cfg)?;
            let id = session.add_stop(module);
            save_daily_and_show(file, &session)?;
            id
        } else {
            let mut session = open_session(file, cfg)?;
            let id = match group {
                RowGroup::Vibrator => session.add_counter(CounterGroup::Vibrator),
                RowGroup::Liaison => session.add_counter(CounterGroup::Liaison),
                RowGroup::Stock => session.add_stock_entry(),
                _ => session.add_stop(),
            };
            save_and_show(file, &session)?;
            id
        };

        success(format!("Row added to {}: {}", group.as_str(), id));
    }
    Ok(())
}

use super::open_daily_session;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::render::render_daily;

/// Handle the `daily` command (two-module stop report)
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Daily { file } = cmd {
        let session = open_daily_session(file, cfg)?;
        println!("{}", render_daily(session.report(), session.summary()));
    }
    Ok(())
}

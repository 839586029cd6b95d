pub mod add;
pub mod check;
pub mod config;
pub mod daily;
pub mod del;
pub mod export;
pub mod init;
pub mod new;
pub mod set;

use crate::config::Config;
use crate::core::report_file;
use crate::core::session::{DailySession, ReportSession};
use crate::errors::AppResult;
use crate::ui::messages::{success, warning};
use crate::ui::render::{render_daily, render_report};
use crate::utils::path::expand_tilde;

/// Load a report file and recalculate it.
pub(crate) fn open_session(file: &str, cfg: &Config) -> AppResult<ReportSession> {
    let report = report_file::load_activity_report(&expand_tilde(file))?;
    Ok(ReportSession::new(report, cfg.limits()))
}

/// Save the session's report back to `file` and print the new state.
pub(crate) fn save_and_show(file: &str, session: &ReportSession) -> AppResult<()> {
    report_file::save(&expand_tilde(file), session.report())?;
    print_summary(session);
    Ok(())
}

pub(crate) fn print_summary(session: &ReportSession) {
    println!("{}", render_report(session.report(), session.summary()));

    if session.can_submit() {
        success("Report can be submitted");
    } else {
        warning(format!(
            "Submission blocked by: {}",
            session.summary().blocking_groups().join(", ")
        ));
    }
}

/// Load a daily report file and total it.
pub(crate) fn open_daily_session(file: &str, cfg: &Config) -> AppResult<DailySession> {
    let report = report_file::load_daily_report(&expand_tilde(file))?;
    Ok(DailySession::new(report, cfg.limits()))
}

pub(crate) fn save_daily_and_show(file: &str, session: &DailySession) -> AppResult<()> {
    report_file::save(&expand_tilde(file), session.report())?;
    println!("{}", render_daily(session.report(), session.summary()));
    Ok(())
}

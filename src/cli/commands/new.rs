use crate::cli::parser::Commands;
use crate::core::report_file;
use crate::errors::{AppError, AppResult};
use crate::models::report::{ActivityReport, DailyReport};
use crate::ui::messages::success;
use crate::utils::date;
use crate::utils::path::expand_tilde;

/// Create an empty report: one blank row per group (or per module).
pub fn handle(cmd: &Commands) -> AppResult<()> {
    if let Commands::New {
        file,
        date: date_arg,
        previous_end,
        daily,
        force,
    } = cmd
    {
        let path = expand_tilde(file);
        if path.exists() && !*force {
            return Err(AppError::Other(format!(
                "{} already exists (use --force to overwrite)",
                path.display()
            )));
        }

        let d = match date_arg {
            Some(s) => Some(date::parse_date(s).ok_or_else(|| AppError::InvalidDate(s.clone()))?),
            None => Some(date::today()),
        };

        if *daily {
            let report = DailyReport {
                date: d,
                ..DailyReport::default()
            };
            report_file::save(&path, &report)?;
        } else {
            let report = ActivityReport::new(d, previous_end.clone());
            report_file::save(&path, &report)?;
        }
        success(format!("Report created: {}", path.display()));
    }
    Ok(())
}

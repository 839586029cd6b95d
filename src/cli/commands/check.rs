use super::{open_session, print_summary};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::{AppError, AppResult};

/// Recalculate a report file and print it.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Check { file, strict } = cmd {
        let session = open_session(file, cfg)?;
        print_summary(&session);

        if *strict && !session.can_submit() {
            return Err(AppError::SubmissionBlocked(
                session.summary().blocking_groups().join(", "),
            ));
        }
    }
    Ok(())
}

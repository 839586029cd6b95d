use super::open_session;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::export::ExportLogic;
use crate::utils::path::expand_tilde;

/// Handle the `export` command
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        file,
        format,
        out,
        force,
    } = cmd
    {
        let session = open_session(file, cfg)?;
        let fmt = format.unwrap_or(cfg.default_export);

        ExportLogic::export(
            session.report(),
            session.summary(),
            fmt,
            &expand_tilde(out),
            *force,
        )?;
    }
    Ok(())
}

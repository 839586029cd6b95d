use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};
use crate::utils::path::expand_tilde;

/// Handle the `init` command
pub fn handle(cmd: &Commands, config_path: Option<&str>) -> AppResult<()> {
    if let Commands::Init { force } = cmd {
        let path = config_path
            .map(expand_tilde)
            .unwrap_or_else(Config::config_file);

        if Config::init_all(&path, *force)? {
            success(format!("Config file: {}", path.display()));
        } else {
            info(format!(
                "Config file already exists: {} (use --force to overwrite)",
                path.display()
            ));
        }
    }
    Ok(())
}

use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::render::template::default_template;
use crate::ui::messages::success;
use crate::utils::fs::write_atomic;

/// Handle the `init` subcommand
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Init { force } = cmd {
        let path = cfg.readme_path();

        if path.exists() && !*force {
            return Err(AppError::Write(format!(
                "{} already exists (use --force to overwrite)",
                path.display()
            )));
        }

        write_atomic(&path, &default_template())?;
        success(format!("README skeleton written: {}", path.display()));
    }
    Ok(())
}

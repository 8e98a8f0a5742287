use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::SyncLogic;
use crate::errors::AppResult;
use crate::ui::messages::success;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Sync {
        csv_url,
        upstream_url,
        dry_run,
    } = cmd
    {
        let mut cfg = cfg.clone();
        if let Some(url) = csv_url {
            cfg.csv_url = Some(url.clone());
        }
        if let Some(url) = upstream_url {
            cfg.upstream_url = Some(url.clone());
        }

        let outcome = SyncLogic::run(&cfg, *dry_run)?;
        if *dry_run {
            print!("{}", outcome.document);
        } else if outcome.written {
            success(format!(
                "{} updated ({} listings)",
                cfg.readme_path().display(),
                outcome.listings
            ));
        }
    }
    Ok(())
}

use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;

/// Handle the `config` subcommand
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Config { print_config } = cmd
        && *print_config
    {
        // gli URL delle sorgenti sono segreti: non stamparli in chiaro
        let mut shown = cfg.clone();
        shown.csv_url = shown.csv_url.as_ref().map(|_| "<set>".to_string());
        shown.upstream_url = shown.upstream_url.as_ref().map(|_| "<set>".to_string());
        println!("📄 Current configuration:\n");
        println!("{}", shown.to_yaml()?);
    }
    Ok(())
}

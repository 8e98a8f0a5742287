use clap::{Parser, Subcommand};

/// Command-line interface definition for readme-sync
#[derive(Parser)]
#[command(
    name = "readme-sync",
    version = env!("CARGO_PKG_VERSION"),
    about = "Sync a README listings table with a published Google Sheet CSV export",
    long_about = None
)]
pub struct Cli {
    /// Path to a YAML configuration file (default: ./readme-sync.yaml if present)
    #[arg(global = true, long = "config", value_name = "FILE")]
    pub config: Option<String>,

    /// README file to update (overrides the configuration)
    #[arg(global = true, long = "readme", value_name = "FILE")]
    pub readme: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Fetch the sheet and rewrite the listings table in the README
    Sync {
        /// Published CSV export URL of the sheet
        #[arg(long = "csv-url", env = "SHEET_CSV_URL", hide_env_values = true)]
        csv_url: Option<String>,

        /// Optional upstream README to merge listings from
        #[arg(long = "upstream-url", env = "DATA_SOURCE_URL", hide_env_values = true)]
        upstream_url: Option<String>,

        /// Print the composed README to stdout instead of writing it
        #[arg(long = "dry-run")]
        dry_run: bool,
    },

    /// Write a README skeleton containing the listing markers
    Init {
        /// Overwrite an existing README
        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Show the effective configuration
    Config {
        /// Print the effective configuration as YAML
        #[arg(long = "print", help = "Print the effective configuration")]
        print_config: bool,
    },
}

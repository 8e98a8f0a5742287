use crate::errors::{AppError, AppResult};
use crate::utils::path::expand_tilde;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// File looked up in the working directory when `--config` is not given.
pub const DEFAULT_CONFIG_FILE: &str = "readme-sync.yaml";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Published CSV export of the sheet
    #[serde(default)]
    pub csv_url: Option<String>,
    /// Optional second source (README with HTML tables)
    #[serde(default)]
    pub upstream_url: Option<String>,
    #[serde(default = "default_upstream_section")]
    pub upstream_section: String,
    #[serde(default = "default_readme")]
    pub readme: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    #[serde(default)]
    pub retries: u32,
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

fn default_upstream_section() -> String {
    "## 🔧 Hardware Engineering".to_string()
}
fn default_readme() -> String {
    "README.md".to_string()
}
fn default_timeout_secs() -> u64 {
    30
}
fn default_user_agent() -> String {
    format!("readme-sync/{}", env!("CARGO_PKG_VERSION"))
}

impl Default for Config {
    fn default() -> Self {
        Self {
            csv_url: None,
            upstream_url: None,
            upstream_section: default_upstream_section(),
            readme: default_readme(),
            timeout_secs: default_timeout_secs(),
            retries: 0,
            user_agent: default_user_agent(),
        }
    }
}

impl Config {
    /// Load configuration.
    ///
    /// - explicit path → must exist and parse
    /// - no path → `readme-sync.yaml` in the working directory if present, defaults otherwise
    pub fn load(path: Option<&str>) -> AppResult<Self> {
        match path {
            Some(p) => {
                let path = expand_tilde(p);
                if !path.exists() {
                    return Err(AppError::Config(format!(
                        "configuration file not found: {}",
                        path.display()
                    )));
                }
                Self::from_file(&path)
            }
            None => {
                let path = PathBuf::from(DEFAULT_CONFIG_FILE);
                if path.exists() {
                    Self::from_file(&path)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    pub fn from_file(path: &Path) -> AppResult<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            AppError::Config(format!("failed to read {}: {e}", path.display()))
        })?;
        Self::from_yaml(&content)
    }

    pub fn from_yaml(content: &str) -> AppResult<Self> {
        // an empty file is a valid "all defaults" config
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(content)
            .map_err(|e| AppError::Config(format!("invalid configuration: {e}")))
    }

    pub fn to_yaml(&self) -> AppResult<String> {
        serde_yaml::to_string(self)
            .map_err(|e| AppError::Config(format!("failed to serialize configuration: {e}")))
    }

    /// Path of the README, with `~/` expanded
    pub fn readme_path(&self) -> PathBuf {
        expand_tilde(&self.readme)
    }

    /// The CSV URL, or a configuration error if none was supplied anywhere
    pub fn require_csv_url(&self) -> AppResult<&str> {
        match self.csv_url.as_deref().map(str::trim) {
            Some(url) if !url.is_empty() => Ok(url),
            _ => Err(AppError::Config(
                "no CSV URL configured (use --csv-url, SHEET_CSV_URL or csv_url in the config file)"
                    .to_string(),
            )),
        }
    }

    /// Upstream URL, treating blank strings as "not configured"
    pub fn upstream(&self) -> Option<&str> {
        self.upstream_url
            .as_deref()
            .map(str::trim)
            .filter(|u| !u.is_empty())
    }
}

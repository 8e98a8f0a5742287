use crate::config::Config;
use crate::errors::AppResult;
use crate::models::Listing;
use crate::render::{compose, render_table};
use crate::render::template::default_template;
use crate::sources::{HttpFetcher, sheet, upstream};
use crate::ui::messages::{info, warning};
use crate::utils::date::{format_timestamp, now_utc};
use crate::utils::fs::{read_optional, write_atomic};
use chrono::{DateTime, Utc};

/// Result of one sync run.
#[derive(Debug)]
pub struct SyncOutcome {
    pub document: String,
    pub listings: usize,
    pub written: bool,
}

pub struct SyncLogic;

impl SyncLogic {
    /// Fetch → parse → render → compose → write.
    ///
    /// The README is written only as the very last step; any earlier failure
    /// leaves it exactly as it was. With `dry_run` nothing is written and no
    /// progress is printed, the caller gets the composed document back.
    pub fn run(cfg: &Config, dry_run: bool) -> AppResult<SyncOutcome> {
        let csv_url = cfg.require_csv_url()?;
        let fetcher = HttpFetcher::new(cfg)?;
        let say = |msg: String| {
            if !dry_run {
                info(msg)
            }
        };

        // 1️⃣ sheet
        say("Fetching data from Google Sheet...".to_string());
        let csv_text = fetcher.get_text(csv_url)?;
        let sheet_listings = sheet::parse_listings(&csv_text)?;
        say(format!("Found {} listings from Google Sheet", sheet_listings.len()));

        // 2️⃣ upstream (optional)
        let upstream_listings = match cfg.upstream() {
            Some(url) => {
                say("Fetching upstream listings...".to_string());
                let doc = fetcher.get_text(url)?;
                match upstream::parse_document(&doc, &cfg.upstream_section) {
                    Some(found) => {
                        say(format!("Found {} upstream listings", found.len()));
                        found
                    }
                    None => {
                        warning(format!(
                            "Section '{}' not found in upstream document",
                            cfg.upstream_section
                        ));
                        Vec::new()
                    }
                }
            }
            None => Vec::new(),
        };

        let listings = super::merge::merge_listings(sheet_listings, upstream_listings);
        say(format!("Total: {} listings", listings.len()));

        // 3️⃣ compose against the current README (or the built-in skeleton)
        let path = cfg.readme_path();
        let template = read_optional(&path)?.unwrap_or_else(default_template);
        let document = Self::build_document(&template, &listings, &now_utc())?;

        if dry_run {
            return Ok(SyncOutcome {
                document,
                listings: listings.len(),
                written: false,
            });
        }

        // 4️⃣ persist
        write_atomic(&path, &document)?;

        Ok(SyncOutcome {
            document,
            listings: listings.len(),
            written: true,
        })
    }

    /// Pure part of the job: render the listings and substitute them into `template`.
    pub fn build_document(
        template: &str,
        listings: &[Listing],
        now: &DateTime<Utc>,
    ) -> AppResult<String> {
        let table = render_table(listings);
        compose(template, &table, &format_timestamp(now))
    }
}

//! Blocking HTTP client used by both listing sources.

use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::warning;
use reqwest::Url;
use reqwest::blocking::Client;
use reqwest::header::{ACCEPT, HeaderMap, HeaderValue, USER_AGENT};
use std::time::Duration;

pub struct HttpFetcher {
    client: Client,
    retries: u32,
}

impl HttpFetcher {
    pub fn new(cfg: &Config) -> AppResult<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(
            USER_AGENT,
            HeaderValue::from_str(&cfg.user_agent)
                .map_err(|e| AppError::Config(format!("invalid user_agent: {e}")))?,
        );
        headers.insert(ACCEPT, HeaderValue::from_static("text/csv, text/plain, */*"));

        let client = Client::builder()
            .timeout(Duration::from_secs(cfg.timeout_secs))
            .default_headers(headers)
            .build()
            .map_err(|e| AppError::Fetch(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            client,
            retries: cfg.retries,
        })
    }

    /// GET `url` and return the body as text.
    ///
    /// Network errors, non-2xx statuses and empty bodies are all `AppError::Fetch`.
    /// With `retries > 0` the request is re-issued that many extra times before giving up.
    pub fn get_text(&self, url: &str) -> AppResult<String> {
        let parsed = Url::parse(url)
            .map_err(|e| AppError::Fetch(format!("invalid URL '{}': {e}", redact(url))))?;

        let mut attempt = 0;
        loop {
            match self.get_once(&parsed) {
                Ok(body) => return Ok(body),
                Err(e) if attempt < self.retries => {
                    attempt += 1;
                    warning(format!("{e} (retry {attempt}/{})", self.retries));
                }
                Err(e) => return Err(e),
            }
        }
    }

    fn get_once(&self, url: &Url) -> AppResult<String> {
        let target = redact(url.as_str());

        let resp = self
            .client
            .get(url.clone())
            .send()
            .map_err(|e| AppError::Fetch(format!("request to {target} failed: {}", e.without_url())))?;

        let status = resp.status();
        if !status.is_success() {
            return Err(AppError::Fetch(format!("{target} returned HTTP {status}")));
        }

        let body = resp
            .text()
            .map_err(|e| AppError::Fetch(format!("failed to read body from {target}: {}", e.without_url())))?;

        if body.trim().is_empty() {
            return Err(AppError::Fetch(format!("{target} returned an empty body")));
        }
        Ok(body)
    }
}

/// Strip path and query from a URL so secrets in published-sheet links never reach the logs.
pub fn redact(url: &str) -> String {
    match Url::parse(url) {
        Ok(u) => match (u.host_str(), u.port()) {
            (Some(host), Some(port)) => format!("{}://{host}:{port}/…", u.scheme()),
            (Some(host), None) => format!("{}://{host}/…", u.scheme()),
            _ => format!("{}:…", u.scheme()),
        },
        Err(_) => "<invalid url>".to_string(),
    }
}

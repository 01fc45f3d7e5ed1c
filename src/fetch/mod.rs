// src/fetch/mod.rs

use anyhow::{Context, Result};
use reqwest::blocking::Client;
use std::time::Duration;
use tracing::debug;
use url::Url;

/// Base of the wiki; per-series pages hang off `/wiki/Series_{N}`.
static WIKI_BASE: &str = "https://the-chase.fandom.com";

/// The old compiled multi-series page. The fragment is part of the recorded
/// source URL; servers ignore it.
pub static COMPILED_PAGE_URL: &str =
    "https://the-chase.fandom.com/wiki/The_Chase_(List_of_Issues)#Series_1_-_June_29.2C_2009_-_July_10.2C_2009_-_10_Episodes";

/// Per-request timeout so a stalled fetch cannot hang the run forever.
const HTTP_TIMEOUT: Duration = Duration::from_secs(30);

/// Build the blocking client used for the whole run.
pub fn build_client() -> Result<Client> {
    Client::builder()
        .timeout(HTTP_TIMEOUT)
        .build()
        .context("building HTTP client")
}

/// URL of the current-format page for one series.
pub fn series_page_url(series: u32) -> String {
    format!("{}/wiki/Series_{}", WIKI_BASE, series)
}

/// Fetch one page and return its body text. Any network or HTTP-status
/// failure is fatal to the run.
pub fn page_text(client: &Client, url_str: &str) -> Result<String> {
    let url = Url::parse(url_str).with_context(|| format!("invalid URL {}", url_str))?;
    debug!(%url, "fetching page");
    client
        .get(url.as_str())
        .send()
        .with_context(|| format!("GET {} failed", url))?
        .error_for_status()
        .with_context(|| format!("non-success status from {}", url))?
        .text()
        .with_context(|| format!("reading body from {}", url))
}

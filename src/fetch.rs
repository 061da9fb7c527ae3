use std::time::Duration;

use anyhow::{Context, Result};
use indicatif::ProgressBar;
use tracing::info;

const USER_AGENT: &str = "pagetext/0.1";
const FETCH_TIMEOUT: Duration = Duration::from_secs(30);

/// Downloads the page at `url` and returns its markup as text.
///
/// Non-2xx statuses are errors. Body decoding honors the charset the response
/// declares.
pub fn fetch_html(url: &str) -> Result<String> {
    let client = reqwest::blocking::Client::builder()
        .user_agent(USER_AGENT)
        .timeout(FETCH_TIMEOUT)
        .build()
        .context("Failed to build HTTP client")?;

    let spinner = ProgressBar::new_spinner();
    spinner.set_message(format!("Fetching {url}"));
    spinner.enable_steady_tick(Duration::from_millis(100));

    let result = client
        .get(url)
        .send()
        .and_then(|response| response.error_for_status())
        .and_then(|response| response.text());
    spinner.finish_and_clear();

    let html = result.with_context(|| format!("Failed to fetch {url}"))?;
    info!("Fetched {url} ({} bytes)", html.len());
    Ok(html)
}

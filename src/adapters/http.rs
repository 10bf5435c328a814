use crate::utils::error::{Result, ScrapeError};
use reqwest::Client;

/// Fetches `url` and returns the full response body as text.
///
/// Non-success statuses are reported as errors rather than scraped.
pub async fn fetch_page(client: &Client, url: &str) -> Result<String> {
    tracing::debug!("Making HTTP request to: {}", url);
    let response = client.get(url).send().await?;

    let status = response.status();
    tracing::debug!("HTTP response status: {}", status);

    if !status.is_success() {
        return Err(ScrapeError::HttpStatusError {
            url: url.to_string(),
            status: status.as_u16(),
        });
    }

    let body = response.text().await?;
    tracing::debug!("Received {} bytes of HTML", body.len());
    Ok(body)
}

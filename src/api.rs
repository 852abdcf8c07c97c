use std::time::Duration;

use log::debug;
use reqwest::header::{self, HeaderMap, HeaderValue};
use reqwest::StatusCode;
use reqwest::Url;
use thiserror::Error;

/// kworb rejects requests without a plausible browser User-Agent.
const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 \
                          (KHTML, like Gecko) Chrome/124.0.0.0 Safari/537.36";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

pub fn reqwest_client() -> reqwest::Result<reqwest::Client> {
    let mut headers = HeaderMap::new();
    headers.insert(
        header::ACCEPT,
        HeaderValue::from_static("text/html,application/xhtml+xml,application/xml;q=0.9,*/*;q=0.8"),
    );
    headers.insert(
        header::ACCEPT_LANGUAGE,
        HeaderValue::from_static("en-US,en;q=0.9"),
    );
    reqwest::Client::builder()
        .user_agent(USER_AGENT)
        .default_headers(headers)
        .timeout(REQUEST_TIMEOUT)
        .build()
}

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("transport error while fetching the chart page: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("unexpected status {status} fetching {url}")]
    Status { status: StatusCode, url: Url },
}

pub struct ChartPage {
    pub body: String,
    /// The response `Date` header verbatim, or "Unknown".
    pub fetched_at: String,
}

pub async fn fetch_chart(client: &reqwest::Client, url: &Url) -> Result<ChartPage, FetchError> {
    let response = client.get(url.clone()).send().await?;
    let status = response.status();
    if !status.is_success() {
        return Err(FetchError::Status {
            status,
            url: url.clone(),
        });
    }
    let fetched_at = fetched_at_from_headers(response.headers());
    let bytes = response.bytes().await?;
    debug!("Fetched {} bytes from {url}", bytes.len());
    // Decode from raw bytes unconditionally; the page is UTF-8 and an absent or
    // wrong charset hint must not mangle the Vietnamese track titles.
    let body = String::from_utf8_lossy(&bytes).into_owned();
    Ok(ChartPage { body, fetched_at })
}

fn fetched_at_from_headers(headers: &HeaderMap) -> String {
    headers
        .get(header::DATE)
        .and_then(|value| value.to_str().ok())
        .unwrap_or("Unknown")
        .to_owned()
}

#[cfg(test)]
mod tests {
    use reqwest::header::{HeaderMap, HeaderValue, DATE};

    use super::fetched_at_from_headers;

    #[test]
    fn fetched_at_comes_from_date_header() {
        let mut headers = HeaderMap::new();
        headers.insert(
            DATE,
            HeaderValue::from_static("Thu, 28 Aug 2025 01:23:45 GMT"),
        );
        assert_eq!(
            fetched_at_from_headers(&headers),
            "Thu, 28 Aug 2025 01:23:45 GMT"
        );
    }

    #[test]
    fn fetched_at_falls_back_to_unknown() {
        assert_eq!(fetched_at_from_headers(&HeaderMap::new()), "Unknown");
    }
}

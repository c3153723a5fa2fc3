use std::time::Duration;

/// Errors raised while downloading a source page.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("unexpected status code: {0}")]
    HttpStatus(u16),
}

/// HTTP client shared by every source in a scrape run.
#[derive(Clone, Debug)]
pub struct PageFetcher {
    client: reqwest::Client,
}

impl PageFetcher {
    /// Every request is bounded by `timeout`, so an unreachable source
    /// cannot stall the whole run.
    pub fn new(user_agent: &str, timeout: Duration) -> Result<Self, FetchError> {
        let client = reqwest::Client::builder()
            .user_agent(user_agent)
            .gzip(true)
            .timeout(timeout)
            .build()?;
        Ok(Self { client })
    }

    /// Download `url` and return its body. Any non-2xx status is an error.
    pub async fn fetch(&self, url: &str) -> Result<String, FetchError> {
        let response = self.client.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::HttpStatus(status.as_u16()));
        }
        Ok(response.text().await?)
    }
}

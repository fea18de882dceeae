use async_trait::async_trait;
use log::debug;
use reqwest::{Client, StatusCode};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("fetch failed: HTTP {0}")]
    Status(u16),
    #[error("fetch failed: {0}")]
    Transport(#[from] reqwest::Error),
}

pub fn forecast_url(code: &str) -> String {
    format!("https://www.jma.go.jp/bosai/forecast/data/forecast/{code}.json")
}

/// One GET, whole body as text. Seam exists so tests can substitute a stub
/// and assert on call counts.
#[async_trait]
pub trait Fetcher {
    async fn fetch(&self, url: &str) -> Result<String, FetchError>;
}

pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new() -> Self {
        HttpFetcher {
            client: Client::new(),
        }
    }
}

impl Default for HttpFetcher {
    fn default() -> Self {
        HttpFetcher::new()
    }
}

#[async_trait]
impl Fetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> Result<String, FetchError> {
        debug!("GET {url}");
        let resp = self.client.get(url).send().await?;
        // Only 200 counts as success; redirects and errors alike are refused.
        if resp.status() != StatusCode::OK {
            return Err(FetchError::Status(resp.status().as_u16()));
        }
        Ok(resp.text().await?)
    }
}

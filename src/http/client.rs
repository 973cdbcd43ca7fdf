//! Response fetcher: one GET per call, transport failures absorbed

use crate::http::response::{FetchResult, HttpResponse};
use anyhow::Result;
use reqwest::{redirect::Policy, Client};
use std::time::Duration;

pub const DEFAULT_USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(8);

pub struct HttpClient {
    follow: Client,
    no_follow: Client,
    timeout: Duration,
}

impl HttpClient {
    pub fn new() -> Result<Self> {
        Self::with_timeout(DEFAULT_TIMEOUT)
    }

    /// Create a client whose default per-request timeout is `timeout`
    pub fn with_timeout(timeout: Duration) -> Result<Self> {
        let follow = Client::builder()
            .user_agent(DEFAULT_USER_AGENT)
            .redirect(Policy::default())
            .build()?;

        let no_follow = Client::builder()
            .user_agent(DEFAULT_USER_AGENT)
            .redirect(Policy::none())
            .build()?;

        Ok(Self {
            follow,
            no_follow,
            timeout,
        })
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// GET with the default timeout, following redirects
    pub async fn get(&self, url: &str) -> FetchResult {
        self.fetch(url, self.timeout, true).await
    }

    /// Issue exactly one GET. Timeouts, DNS and connection failures and
    /// malformed URLs all come back as `FetchResult::Unavailable`.
    pub async fn fetch(&self, url: &str, timeout: Duration, follow_redirects: bool) -> FetchResult {
        match self.execute(url, timeout, follow_redirects).await {
            Ok(response) => FetchResult::fetched(response),
            Err(e) => {
                tracing::debug!("Fetch failed for {}: {}", url, e);
                FetchResult::Unavailable
            }
        }
    }

    async fn execute(&self, url: &str, timeout: Duration, follow_redirects: bool) -> Result<HttpResponse> {
        let client = if follow_redirects {
            &self.follow
        } else {
            &self.no_follow
        };

        let response = client.get(url).timeout(timeout).send().await?;
        let status = response.status().as_u16();
        let body = response.bytes().await?.to_vec();

        Ok(HttpResponse { status, body })
    }
}

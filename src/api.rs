use crate::errors::{ApiError, FALLBACK_API_MESSAGE};
use crate::models::{ErrorBody, SummarizeRequest, SummaryResult};
use reqwest::Client;
use std::fmt;
use std::time::Duration;
use tracing::{info, warn};
use url::Url;

const REDDIT_HOST: &str = "reddit.com";
const HACKER_NEWS_HOST: &str = "news.ycombinator.com";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    Reddit,
    HackerNews,
    Unknown,
}

impl Platform {
    pub fn as_str(self) -> &'static str {
        match self {
            Platform::Reddit => "Reddit",
            Platform::HackerNews => "Hacker News",
            Platform::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// True when `url` parses and its host belongs to a supported discussion site.
pub fn validate_url(url: &str) -> bool {
    match Url::parse(url) {
        Ok(parsed) => parsed
            .host_str()
            .is_some_and(|host| host.contains(REDDIT_HOST) || host.contains(HACKER_NEWS_HOST)),
        Err(_) => false,
    }
}

/// Classifies by substring only, so partial input still gets a badge.
pub fn detect_platform(url: &str) -> Platform {
    if url.contains(REDDIT_HOST) {
        Platform::Reddit
    } else if url.contains(HACKER_NEWS_HOST) {
        Platform::HackerNews
    } else {
        Platform::Unknown
    }
}

/// Client for the remote `/summarize` endpoint.
#[derive(Debug, Clone)]
pub struct SummarizerClient {
    http: Client,
    base_url: String,
    timeout: Option<Duration>,
}

impl SummarizerClient {
    pub fn new(base_url: impl Into<String>, timeout: Option<Duration>) -> Self {
        Self::with_client(Client::new(), base_url, timeout)
    }

    pub fn with_client(http: Client, base_url: impl Into<String>, timeout: Option<Duration>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            http,
            base_url,
            timeout,
        }
    }

    pub fn endpoint(&self) -> String {
        format!("{}/summarize", self.base_url)
    }

    /// Sends one request; no retries. Dropping the returned future abandons it.
    pub async fn summarize_thread(&self, url: &str) -> Result<SummaryResult, ApiError> {
        match self.timeout {
            Some(limit) => tokio::time::timeout(limit, self.send(url))
                .await
                .unwrap_or_else(|_| Err(ApiError::Timeout(limit))),
            None => self.send(url).await,
        }
    }

    async fn send(&self, url: &str) -> Result<SummaryResult, ApiError> {
        info!("requesting summary for {url}");
        let response = self
            .http
            .post(self.endpoint())
            .json(&SummarizeRequest { url })
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let detail = response
                .json::<ErrorBody>()
                .await
                .ok()
                .and_then(|body| body.detail)
                .unwrap_or_else(|| FALLBACK_API_MESSAGE.to_string());
            warn!("summarizer returned {status}: {detail}");
            return Err(ApiError::Server {
                status: status.as_u16(),
                detail,
            });
        }

        let summary = response.json::<SummaryResult>().await?;
        Ok(summary)
    }
}

use crate::domain::ports::{ConfigProvider, FactSource};
use crate::utils::error::Result;
use reqwest::{Client, StatusCode};
use std::time::Duration;
use thiserror::Error;

/// 透過 HTTP 向上游抓取貓咪小知識
pub struct HttpFactSource {
    url: String,
    timeout: Duration,
    client: Client,
}

/// 單次抓取可能的失敗情況。只用於日誌，呼叫端一律只看到 None。
#[derive(Error, Debug)]
enum FetchFailure {
    #[error("timeout exceeded")]
    Timeout,

    #[error("upstream returned status {0}")]
    BadStatus(StatusCode),

    #[error("network error: {0}")]
    Transport(reqwest::Error),

    #[error("malformed response body: {0}")]
    MalformedBody(reqwest::Error),

    #[error("response has no string `fact` field")]
    MissingFact,

    #[error("response `fact` field is empty")]
    EmptyFact,
}

impl FetchFailure {
    fn from_request_error(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            FetchFailure::Timeout
        } else if e.is_decode() {
            FetchFailure::MalformedBody(e)
        } else {
            FetchFailure::Transport(e)
        }
    }
}

impl HttpFactSource {
    pub fn new(url: String, timeout: Duration) -> Result<Self> {
        Ok(Self {
            url,
            timeout,
            client: Client::builder().build()?,
        })
    }

    pub fn from_config<C: ConfigProvider>(config: &C) -> Result<Self> {
        Self::new(
            config.fact_api_url().to_string(),
            Duration::from_secs(config.timeout_seconds()),
        )
    }

    async fn try_fetch(&self) -> std::result::Result<String, FetchFailure> {
        let response = self
            .client
            .get(&self.url)
            // 超時涵蓋連線與讀取整個往返
            .timeout(self.timeout)
            .send()
            .await
            .map_err(FetchFailure::from_request_error)?;

        tracing::debug!("Fact API response status: {}", response.status());

        if !response.status().is_success() {
            return Err(FetchFailure::BadStatus(response.status()));
        }

        let body: serde_json::Value = response
            .json()
            .await
            .map_err(FetchFailure::from_request_error)?;

        match body.get("fact").and_then(serde_json::Value::as_str) {
            Some(fact) if !fact.is_empty() => Ok(fact.to_string()),
            Some(_) => Err(FetchFailure::EmptyFact),
            None => Err(FetchFailure::MissingFact),
        }
    }
}

#[async_trait::async_trait]
impl FactSource for HttpFactSource {
    /// 每次呼叫只發一次請求，不重試也不快取
    async fn fetch_fact(&self) -> Option<String> {
        tracing::info!("Fetching cat fact from: {}", self.url);

        match self.try_fetch().await {
            Ok(fact) => {
                tracing::info!("Successfully fetched cat fact");
                Some(fact)
            }
            Err(failure) => {
                match failure {
                    FetchFailure::Timeout => tracing::error!(
                        "Timeout while fetching cat fact (timeout={}s)",
                        self.timeout.as_secs()
                    ),
                    FetchFailure::BadStatus(_) | FetchFailure::Transport(_) => {
                        tracing::error!("Failed to fetch cat fact: {}", failure)
                    }
                    FetchFailure::MalformedBody(_)
                    | FetchFailure::MissingFact
                    | FetchFailure::EmptyFact => {
                        tracing::warn!("Failed to fetch cat fact: {}", failure)
                    }
                }
                None
            }
        }
    }
}

//! REST client for the recommendation backend.

use crate::config::TuiConfig;
use async_trait::async_trait;
use cinerec_core::{
    server_message, HealthResponse, HistoryEntry, RecommendRequest, RecommendResponse,
    SubmitError, SubmitOutcome,
};
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, CONTENT_TYPE};
use std::time::Duration;

#[derive(Debug, thiserror::Error)]
pub enum ApiClientError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("HTTP {status}: {}", .message.as_deref().unwrap_or("no message"))]
    Status { status: u16, message: Option<String> },
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

impl ApiClientError {
    /// Classify a failed recommendation request into the user-facing taxonomy.
    pub fn to_submit_error(&self) -> SubmitError {
        match self {
            ApiClientError::Status { status, message } => {
                SubmitError::server(*status, message.clone())
            }
            ApiClientError::Http(err) if err.is_timeout() => SubmitError::Timeout,
            ApiClientError::Http(err) if err.is_builder() || err.is_decode() => {
                SubmitError::Client(err.to_string())
            }
            // Connect, transport, and body errors: nothing usable came back.
            ApiClientError::Http(_) => SubmitError::Network,
            ApiClientError::Serde(err) => SubmitError::Client(err.to_string()),
        }
    }
}

/// The two recommendation operations plus the health probe.
///
/// The runtime talks to the backend only through this trait so the event
/// loop can be driven against an in-memory backend.
#[async_trait]
pub trait RecommendationBackend: Send + Sync {
    /// POST the text and classify the result. Never panics on bad input.
    async fn recommend(&self, user_input: &str) -> SubmitOutcome;

    async fn history(&self) -> Result<Vec<HistoryEntry>, ApiClientError>;

    async fn health(&self) -> Result<HealthResponse, ApiClientError>;
}

/// Fully resolved endpoint URLs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    pub recommend: String,
    pub history: String,
    pub health: String,
}

impl Endpoints {
    /// Resolve endpoints from the configured base URL.
    ///
    /// The history URL is the base with `history` appended directly, with no
    /// separator, unless `history_url` overrides it.
    pub fn from_config(config: &TuiConfig) -> Self {
        let base = config.api_base_url.as_str();
        Self {
            recommend: format!("{}/recommend", base),
            history: config
                .history_url
                .clone()
                .unwrap_or_else(|| format!("{}history", base)),
            health: format!("{}/health", base),
        }
    }
}

#[derive(Clone)]
pub struct RestClient {
    client: reqwest::Client,
    endpoints: Endpoints,
    recommend_timeout: Duration,
}

impl RestClient {
    pub fn new(config: &TuiConfig) -> Result<Self, ApiClientError> {
        // No client-wide timeout: only the recommendation request is bounded.
        let client = reqwest::Client::builder()
            .default_headers(json_headers())
            .build()?;

        Ok(Self {
            client,
            endpoints: Endpoints::from_config(config),
            recommend_timeout: Duration::from_millis(config.request_timeout_ms),
        })
    }

    pub fn endpoints(&self) -> &Endpoints {
        &self.endpoints
    }

    pub async fn post_recommend(&self, user_input: &str) -> Result<RecommendResponse, ApiClientError> {
        let body = RecommendRequest {
            user_input: user_input.to_string(),
        };
        let response = self
            .client
            .post(&self.endpoints.recommend)
            .timeout(self.recommend_timeout)
            .json(&body)
            .send()
            .await?;
        self.parse_response(response).await
    }

    pub async fn get_history(&self) -> Result<Vec<HistoryEntry>, ApiClientError> {
        let response = self.client.get(&self.endpoints.history).send().await?;
        self.parse_response(response).await
    }

    pub async fn get_health(&self) -> Result<HealthResponse, ApiClientError> {
        let response = self
            .client
            .get(&self.endpoints.health)
            .timeout(self.recommend_timeout)
            .send()
            .await?;
        self.parse_response(response).await
    }

    async fn parse_response<T: serde::de::DeserializeOwned>(
        &self,
        response: reqwest::Response,
    ) -> Result<T, ApiClientError> {
        let status = response.status();
        if status.is_success() {
            let body = response.bytes().await?;
            Ok(serde_json::from_slice::<T>(&body)?)
        } else {
            let message = response
                .bytes()
                .await
                .ok()
                .and_then(|body| server_message(&body));
            Err(ApiClientError::Status {
                status: status.as_u16(),
                message,
            })
        }
    }
}

#[async_trait]
impl RecommendationBackend for RestClient {
    async fn recommend(&self, user_input: &str) -> SubmitOutcome {
        self.post_recommend(user_input)
            .await
            .map(|response| response.recommendations)
            .map_err(|err| {
                tracing::debug!(error = %err, "Recommendation request failed");
                err.to_submit_error()
            })
    }

    async fn history(&self) -> Result<Vec<HistoryEntry>, ApiClientError> {
        self.get_history().await
    }

    async fn health(&self) -> Result<HealthResponse, ApiClientError> {
        self.get_health().await
    }
}

fn json_headers() -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
    headers
}

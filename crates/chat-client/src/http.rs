//! HTTP Answer Service
//!
//! Implementation of `AnswerService` that posts the query as JSON to the
//! hosting server and maps the response into an answer or a `Failure`.

use async_trait::async_trait;
use chat_core::{
    error::{Failure, Outcome},
    service::{AnswerBody, AnswerService, ErrorBody, QueryRequest},
};

/// Answer service client configuration
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientConfig {
    /// Origin of the answer service (scheme, host, port)
    pub base_url: String,

    /// Path of the answer endpoint
    pub endpoint_path: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8080".into(),
            endpoint_path: chat_core::ANSWER_PATH.into(),
        }
    }
}

impl ClientConfig {
    /// Target the default endpoint path on `base_url`
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Default::default()
        }
    }

    pub fn with_endpoint_path(mut self, path: impl Into<String>) -> Self {
        self.endpoint_path = path.into();
        self
    }

    /// Full URL of the answer endpoint
    pub fn endpoint(&self) -> String {
        let base = self.base_url.trim_end_matches('/');
        let path = self.endpoint_path.trim_start_matches('/');
        format!("{base}/{path}")
    }
}

/// Answer service reached over HTTP
#[derive(Clone, Debug)]
pub struct HttpAnswerService {
    client: reqwest::Client,
    config: ClientConfig,
}

impl HttpAnswerService {
    /// Create a client for `base_url` with the default endpoint path
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::from_config(ClientConfig::new(base_url))
    }

    /// Create from configuration
    pub fn from_config(config: ClientConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
        }
    }

    pub const fn config(&self) -> &ClientConfig {
        &self.config
    }
}

#[async_trait(?Send)]
impl AnswerService for HttpAnswerService {
    async fn ask(&self, query: &str) -> Outcome {
        let response = self
            .client
            .post(self.config.endpoint())
            .json(&QueryRequest::new(query))
            .send()
            .await
            .map_err(|e| Failure::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let reason = response
                .json::<ErrorBody>()
                .await
                .ok()
                .and_then(|body| body.response);
            return Err(Failure::status(status.as_u16(), reason));
        }

        let body: AnswerBody = response.json().await.map_err(body_failure)?;

        Ok(body.response)
    }
}

/// Only a body that arrived whole but did not parse is malformed; a body cut
/// off mid-stream is a transport failure.
fn body_failure(e: reqwest::Error) -> Failure {
    if e.is_decode() {
        tracing::warn!("Answer body did not parse: {}", e);
        Failure::MalformedBody(e.to_string())
    } else {
        tracing::warn!("Answer body could not be read: {}", e);
        Failure::Transport(e.to_string())
    }
}

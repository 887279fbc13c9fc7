//! HttpWebhookBackend -- concrete [`WebhookBackend`] over reqwest.
//!
//! Both endpoints take a JSON `POST`. Any 2xx status is success; the profile
//! response body is ignored and the answer body is decoded as
//! [`AnswerResponse`]. Every request carries the configured timeout.

use std::time::Duration;

use concierge_core::webhook::backend::WebhookBackend;
use concierge_types::config::ConciergeConfig;
use concierge_types::error::WebhookError;
use concierge_types::webhook::{AnswerResponse, ProfileSubmission, QuestionRequest};
use serde_json::Value;

use crate::config::request_timeout;

/// Webhook backend that talks to the two configured HTTP endpoints.
pub struct HttpWebhookBackend {
    client: reqwest::Client,
    profile_endpoint: String,
    answer_endpoint: String,
}

impl HttpWebhookBackend {
    pub fn new(
        profile_endpoint: impl Into<String>,
        answer_endpoint: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, WebhookError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(concat!("concierge/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| WebhookError::Client(e.to_string()))?;

        Ok(Self {
            client,
            profile_endpoint: profile_endpoint.into(),
            answer_endpoint: answer_endpoint.into(),
        })
    }

    pub fn from_config(config: &ConciergeConfig) -> Result<Self, WebhookError> {
        Self::new(
            config.profile_endpoint.clone(),
            config.answer_endpoint.clone(),
            request_timeout(config),
        )
    }

    /// POST `body` as JSON and fail on any non-2xx status.
    async fn post_json<T: serde::Serialize + ?Sized>(
        &self,
        url: &str,
        body: &T,
    ) -> Result<reqwest::Response, WebhookError> {
        let response = self
            .client
            .post(url)
            .header("content-type", "application/json")
            .json(body)
            .send()
            .await
            .map_err(map_reqwest_error)?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(WebhookError::Status {
                status: status.as_u16(),
                body,
            });
        }

        Ok(response)
    }
}

fn map_reqwest_error(e: reqwest::Error) -> WebhookError {
    if e.is_timeout() {
        WebhookError::Timeout
    } else {
        WebhookError::Transport(e.to_string())
    }
}

/// Decode an answer body.
///
/// A JSON object without a string `answer` is a valid, empty answer; a body
/// that is not JSON at all, or whose `answer` is not a string, is a
/// deserialization error.
fn decode_answer(bytes: &[u8]) -> Result<AnswerResponse, WebhookError> {
    let value: Value = serde_json::from_slice(bytes)
        .map_err(|e| WebhookError::Deserialization(format!("failed to parse answer: {e}")))?;

    match value.get("answer") {
        None | Some(Value::Null) => Ok(AnswerResponse::default()),
        Some(Value::String(answer)) => Ok(AnswerResponse {
            answer: Some(answer.clone()),
        }),
        Some(other) => Err(WebhookError::Deserialization(format!(
            "answer is not a string: {other}"
        ))),
    }
}

impl WebhookBackend for HttpWebhookBackend {
    async fn submit_profile(&self, submission: &ProfileSubmission) -> Result<(), WebhookError> {
        self.post_json(&self.profile_endpoint, submission).await?;
        tracing::debug!(session_id = %submission.session_id, "Profile endpoint accepted submission");
        Ok(())
    }

    async fn ask(&self, request: &QuestionRequest) -> Result<AnswerResponse, WebhookError> {
        let response = self.post_json(&self.answer_endpoint, request).await?;
        let bytes = response.bytes().await.map_err(map_reqwest_error)?;
        decode_answer(&bytes)
    }
}

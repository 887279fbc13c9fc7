//! WebhookBackend trait definition.
//!
//! Both calls are plain request/response round-trips. Implementations decide
//! what counts as success (the HTTP one treats any 2xx as success).

use std::sync::Arc;

use concierge_types::error::WebhookError;
use concierge_types::webhook::{AnswerResponse, ProfileSubmission, QuestionRequest};

/// Trait for the remote endpoints the chat client talks to.
///
/// Uses native async fn in traits (RPITIT). Implementations live in
/// concierge-infra (e.g., `HttpWebhookBackend`).
pub trait WebhookBackend: Send + Sync {
    /// Submit the visitor profile. The response body is ignored.
    fn submit_profile(
        &self,
        submission: &ProfileSubmission,
    ) -> impl std::future::Future<Output = Result<(), WebhookError>> + Send;

    /// Forward a question and decode the answer body.
    fn ask(
        &self,
        request: &QuestionRequest,
    ) -> impl std::future::Future<Output = Result<AnswerResponse, WebhookError>> + Send;
}

impl<T: WebhookBackend> WebhookBackend for Arc<T> {
    fn submit_profile(
        &self,
        submission: &ProfileSubmission,
    ) -> impl std::future::Future<Output = Result<(), WebhookError>> + Send {
        (**self).submit_profile(submission)
    }

    fn ask(
        &self,
        request: &QuestionRequest,
    ) -> impl std::future::Future<Output = Result<AnswerResponse, WebhookError>> + Send {
        (**self).ask(request)
    }
}

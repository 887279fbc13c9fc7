//! Conversation controller.
//!
//! Owns the conversation log, the pending-request flag and the input draft,
//! and mediates every question round-trip. State lives in a `watch` channel
//! so a view can redraw on each change; it is never locked across an await.

use concierge_types::chat::{ConversationState, Message};
use concierge_types::error::ConversationError;
use concierge_types::session::SessionId;
use concierge_types::webhook::QuestionRequest;
use tokio::sync::watch;
use tracing::{debug, warn};

use crate::webhook::backend::WebhookBackend;

/// Assistant reply used when the answer body has no usable `answer`.
pub const FALLBACK_ANSWER: &str = "Sorry, I couldn\u{2019}t understand that.";

/// Assistant reply used when the round-trip fails for any reason.
pub const FAILURE_ANSWER: &str = "\u{274c} Something went wrong while processing your question.";

/// Mediates question/answer round-trips for one session.
///
/// At most one question is in flight at a time: a second `send_question`
/// while one is pending is rejected with [`ConversationError::Busy`].
pub struct ConversationController<B> {
    backend: B,
    session_id: SessionId,
    state: watch::Sender<ConversationState>,
}

impl<B: WebhookBackend> ConversationController<B> {
    pub fn new(backend: B, session_id: SessionId) -> Self {
        let (state, _) = watch::channel(ConversationState::default());
        Self {
            backend,
            session_id,
            state,
        }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn session_id(&self) -> &SessionId {
        &self.session_id
    }

    /// Receive a fresh snapshot after every log, flag or draft change.
    pub fn subscribe(&self) -> watch::Receiver<ConversationState> {
        self.state.subscribe()
    }

    pub fn state(&self) -> ConversationState {
        self.state.borrow().clone()
    }

    pub fn log(&self) -> Vec<Message> {
        self.state.borrow().log.clone()
    }

    pub fn is_pending(&self) -> bool {
        self.state.borrow().pending
    }

    pub fn draft(&self) -> String {
        self.state.borrow().draft.clone()
    }

    pub fn set_draft(&self, text: impl Into<String>) {
        let text = text.into();
        self.state.send_if_modified(|state| {
            if state.draft == text {
                return false;
            }
            state.draft = text;
            true
        });
    }

    /// Send whatever is currently in the draft.
    pub async fn submit_draft(&self) -> Result<Option<Message>, ConversationError> {
        let draft = self.draft();
        self.send_question(&draft).await
    }

    /// Forward a question and append the assistant's reply.
    ///
    /// Returns `Ok(None)` without side effects when `text` is blank. On any
    /// remote failure the reply is [`FAILURE_ANSWER`]; the error itself is
    /// logged and absorbed here.
    pub async fn send_question(&self, text: &str) -> Result<Option<Message>, ConversationError> {
        let question = text.trim();
        if question.is_empty() {
            return Ok(None);
        }

        let mut accepted = false;
        self.state.send_if_modified(|state| {
            if state.pending {
                return false;
            }
            state.log.push(Message::visitor(question));
            state.draft.clear();
            state.pending = true;
            accepted = true;
            true
        });
        if !accepted {
            debug!(session_id = %self.session_id, "Question rejected while another is in flight");
            return Err(ConversationError::Busy);
        }

        // Resets the flag on every exit path, including a dropped future.
        let _pending = PendingGuard { state: &self.state };

        let request = QuestionRequest {
            question: question.to_string(),
            session_id: self.session_id.clone(),
        };

        let reply = match self.backend.ask(&request).await {
            Ok(response) => match response.text() {
                Some(answer) => Message::assistant(answer),
                None => {
                    debug!(session_id = %self.session_id, "Answer body had no usable answer");
                    Message::assistant(FALLBACK_ANSWER)
                }
            },
            Err(e) => {
                warn!(error = %e, session_id = %self.session_id, "Question round-trip failed");
                Message::assistant(FAILURE_ANSWER)
            }
        };

        self.state.send_modify(|state| state.log.push(reply.clone()));
        Ok(Some(reply))
    }
}

struct PendingGuard<'a> {
    state: &'a watch::Sender<ConversationState>,
}

impl Drop for PendingGuard<'_> {
    fn drop(&mut self) {
        self.state.send_modify(|state| state.pending = false);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::time::Duration;

    use concierge_types::chat::Sender;
    use concierge_types::error::WebhookError;

    use crate::testing::RecordingBackend;

    fn controller(backend: RecordingBackend) -> ConversationController<RecordingBackend> {
        ConversationController::new(backend, SessionId::from_stored("sid-1").unwrap())
    }

    #[tokio::test]
    async fn test_answer_is_appended_after_question() {
        let backend = RecordingBackend::default();
        backend.push_answer(Some("Here are 3 listings"));
        let ctrl = controller(backend);

        let reply = ctrl
            .send_question("What listings are available?")
            .await
            .unwrap()
            .unwrap();
        assert_eq!(reply.text, "Here are 3 listings");

        let log = ctrl.log();
        assert_eq!(log.len(), 2);
        assert_eq!(log[0].sender, Sender::Visitor);
        assert_eq!(log[0].text, "What listings are available?");
        assert_eq!(log[1].sender, Sender::Assistant);
        assert_eq!(log[1].text, "Here are 3 listings");
        assert!(!ctrl.is_pending());

        let questions = ctrl.backend().questions.lock().unwrap();
        assert_eq!(questions[0].question, "What listings are available?");
        assert_eq!(questions[0].session_id.as_str(), "sid-1");
    }

    #[tokio::test]
    async fn test_question_is_trimmed() {
        let backend = RecordingBackend::default();
        backend.push_answer(Some("ok"));
        let ctrl = controller(backend);

        ctrl.send_question("  hello \n").await.unwrap();
        assert_eq!(ctrl.log()[0].text, "hello");
        assert_eq!(ctrl.backend().questions.lock().unwrap()[0].question, "hello");
    }

    #[tokio::test]
    async fn test_blank_question_is_noop() {
        let ctrl = controller(RecordingBackend::default());

        for text in ["", "   ", "\n\t"] {
            assert_eq!(ctrl.send_question(text).await.unwrap(), None);
        }
        assert!(ctrl.log().is_empty());
        assert_eq!(ctrl.backend().question_count(), 0);
    }

    #[tokio::test]
    async fn test_missing_answer_uses_fallback() {
        let backend = RecordingBackend::default();
        backend.push_answer(None);
        backend.push_answer(Some(""));
        let ctrl = controller(backend);

        ctrl.send_question("one").await.unwrap();
        ctrl.send_question("two").await.unwrap();
        let log = ctrl.log();
        assert_eq!(log[1].text, FALLBACK_ANSWER);
        assert_eq!(log[3].text, FALLBACK_ANSWER);
    }

    #[tokio::test]
    async fn test_failures_append_generic_message_and_reset_pending() {
        let backend = RecordingBackend::default();
        backend.push_failure(WebhookError::Transport("connection refused".to_string()));
        backend.push_failure(WebhookError::Status {
            status: 503,
            body: String::new(),
        });
        backend.push_failure(WebhookError::Deserialization("not json".to_string()));
        backend.push_failure(WebhookError::Timeout);
        let ctrl = controller(backend);

        for i in 0..4 {
            let reply = ctrl.send_question(&format!("q{i}")).await.unwrap().unwrap();
            assert_eq!(reply.text, FAILURE_ANSWER);
            assert!(!ctrl.is_pending());
        }

        // Still alternating after repeated failures.
        let log = ctrl.log();
        assert_eq!(log.len(), 8);
        for (i, msg) in log.iter().enumerate() {
            let expected = if i % 2 == 0 { Sender::Visitor } else { Sender::Assistant };
            assert_eq!(msg.sender, expected);
        }
    }

    #[tokio::test]
    async fn test_conversation_usable_after_failure() {
        let backend = RecordingBackend::default();
        backend.push_failure(WebhookError::Timeout);
        backend.push_answer(Some("recovered"));
        let ctrl = controller(backend);

        ctrl.send_question("first").await.unwrap();
        let reply = ctrl.send_question("second").await.unwrap().unwrap();
        assert_eq!(reply.text, "recovered");
    }

    #[tokio::test]
    async fn test_send_clears_draft() {
        let backend = RecordingBackend::default();
        backend.push_answer(Some("ok"));
        let ctrl = controller(backend);

        ctrl.set_draft("from the box");
        assert_eq!(ctrl.draft(), "from the box");
        ctrl.submit_draft().await.unwrap();
        assert_eq!(ctrl.draft(), "");
        assert_eq!(ctrl.log()[0].text, "from the box");
    }

    #[tokio::test]
    async fn test_pending_only_while_in_flight_and_busy_rejected() {
        let (backend, gate) = RecordingBackend::gated();
        backend.push_answer(Some("done"));
        let ctrl = Arc::new(controller(backend));
        let mut rx = ctrl.subscribe();

        assert!(!ctrl.is_pending());

        let task = {
            let ctrl = ctrl.clone();
            tokio::spawn(async move { ctrl.send_question("first").await })
        };

        rx.wait_for(|state| state.pending).await.unwrap();
        assert_eq!(ctrl.log().len(), 1);

        // A second question is refused without touching log or network.
        assert_eq!(
            ctrl.send_question("second").await,
            Err(ConversationError::Busy)
        );
        assert_eq!(ctrl.log().len(), 1);
        assert_eq!(ctrl.backend().question_count(), 1);

        gate.notify_one();
        let reply = task.await.unwrap().unwrap().unwrap();
        assert_eq!(reply.text, "done");
        assert!(!ctrl.is_pending());
        assert_eq!(ctrl.log().len(), 2);
    }

    #[tokio::test]
    async fn test_pending_while_failing_request_in_flight() {
        let (backend, gate) = RecordingBackend::gated();
        backend.push_failure(WebhookError::Status {
            status: 502,
            body: String::new(),
        });
        let ctrl = Arc::new(controller(backend));
        let mut rx = ctrl.subscribe();

        let task = {
            let ctrl = ctrl.clone();
            tokio::spawn(async move { ctrl.send_question("will fail").await })
        };

        rx.wait_for(|state| state.pending).await.unwrap();
        assert!(ctrl.is_pending());
        assert_eq!(
            ctrl.send_question("second").await,
            Err(ConversationError::Busy)
        );

        gate.notify_one();
        let reply = task.await.unwrap().unwrap().unwrap();
        assert_eq!(reply.text, FAILURE_ANSWER);
        assert!(!ctrl.is_pending());
        assert_eq!(ctrl.log().len(), 2);
    }

    #[tokio::test]
    async fn test_dropped_request_resets_pending() {
        let (backend, _gate) = RecordingBackend::gated();
        let ctrl = controller(backend);

        let result =
            tokio::time::timeout(Duration::from_millis(20), ctrl.send_question("hang")).await;
        assert!(result.is_err());
        assert!(!ctrl.is_pending());
        // Visitor message stays; no reply was produced.
        assert_eq!(ctrl.log().len(), 1);
    }

    #[tokio::test]
    async fn test_subscribers_see_each_change() {
        let backend = RecordingBackend::default();
        backend.push_answer(Some("hi"));
        let ctrl = controller(backend);
        let mut rx = ctrl.subscribe();

        ctrl.send_question("hello").await.unwrap();
        assert!(rx.has_changed().unwrap());
        let state = rx.borrow_and_update().clone();
        assert_eq!(state.last().unwrap().text, "hi");
        assert!(!state.pending);
    }
}

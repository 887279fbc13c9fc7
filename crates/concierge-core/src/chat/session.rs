//! Chat session controller.
//!
//! Ties together the three responsibilities of a chat session: the
//! persisted session identifier, the one-time visitor profile, and the
//! conversation, which stays closed until the profile is accepted.

use concierge_types::error::ProfileError;
use concierge_types::profile::ProfileField;
use concierge_types::session::SessionId;

use crate::chat::controller::ConversationController;
use crate::profile::ProfileForm;
use crate::session::identity::resolve_session_id;
use crate::storage::kv_store::KvStore;
use crate::webhook::backend::WebhookBackend;

/// One visitor's chat session.
pub struct ChatSession<B> {
    form: ProfileForm,
    conversation: ConversationController<B>,
}

impl<B: WebhookBackend> ChatSession<B> {
    /// Resolve the session identifier from `store` and open a session.
    pub async fn start<S: KvStore>(store: &S, session_key: &str, backend: B) -> Self {
        let session_id = resolve_session_id(store, session_key).await;
        Self::new(session_id, backend)
    }

    pub fn new(session_id: SessionId, backend: B) -> Self {
        Self {
            form: ProfileForm::new(),
            conversation: ConversationController::new(backend, session_id),
        }
    }

    pub fn session_id(&self) -> &SessionId {
        self.conversation.session_id()
    }

    pub fn profile(&self) -> &ProfileForm {
        &self.form
    }

    pub fn set_profile_field(&mut self, field: ProfileField, value: impl Into<String>) {
        self.form.set_field(field, value);
    }

    /// Submit the drafted profile. See [`ProfileForm::submit`].
    pub async fn submit_profile(&mut self) -> Result<&'static str, ProfileError> {
        self.form
            .submit(self.conversation.backend(), self.conversation.session_id())
            .await
    }

    /// Whether the chat view should be shown.
    pub fn is_chat_open(&self) -> bool {
        self.form.is_submitted()
    }

    /// The conversation, available only once the profile is accepted.
    pub fn conversation(&self) -> Option<&ConversationController<B>> {
        if self.is_chat_open() {
            Some(&self.conversation)
        } else {
            None
        }
    }
}

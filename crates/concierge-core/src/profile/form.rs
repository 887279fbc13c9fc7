//! Profile form state and submission.

use concierge_types::error::ProfileError;
use concierge_types::profile::{ProfileField, ProfileStatus, VisitorProfile};
use concierge_types::session::SessionId;
use concierge_types::webhook::ProfileSubmission;
use tracing::{info, warn};

use crate::webhook::backend::WebhookBackend;

/// Notice shown when a required field is empty.
pub const MISSING_FIELDS_NOTICE: &str = "Please fill in all fields.";

/// Notice shown once the profile is accepted.
pub const SUBMITTED_NOTICE: &str = "Thank you! You can now ask your real estate questions.";

/// Notice shown when the profile endpoint rejects or cannot be reached.
pub const REJECTED_NOTICE: &str = "Failed to save info. Please try again.";

/// Notice shown when the form is submitted a second time.
pub const ALREADY_SUBMITTED_NOTICE: &str = "Your details are already saved.";

/// Blocking notice text for a submission error.
pub fn notice_for(err: &ProfileError) -> &'static str {
    match err {
        ProfileError::MissingField(_) => MISSING_FIELDS_NOTICE,
        ProfileError::Rejected(_) => REJECTED_NOTICE,
        ProfileError::AlreadySubmitted => ALREADY_SUBMITTED_NOTICE,
    }
}

/// Draft visitor profile plus its submission state.
///
/// The draft is kept after a failed submission so the visitor can retry with
/// the same or edited values. Once accepted, the form is frozen.
#[derive(Debug, Default)]
pub struct ProfileForm {
    draft: VisitorProfile,
    status: ProfileStatus,
}

impl ProfileForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn draft(&self) -> &VisitorProfile {
        &self.draft
    }

    pub fn status(&self) -> ProfileStatus {
        self.status
    }

    pub fn is_submitted(&self) -> bool {
        self.status == ProfileStatus::Submitted
    }

    /// Update one input. Ignored after the profile has been accepted.
    pub fn set_field(&mut self, field: ProfileField, value: impl Into<String>) {
        if self.is_submitted() {
            return;
        }
        self.draft.set(field, value);
    }

    /// Validate and submit the draft.
    ///
    /// Makes no request when a field is empty or the profile was already
    /// accepted. Otherwise issues exactly one request; only a success status
    /// flips the form to `Submitted`.
    pub async fn submit<B: WebhookBackend>(
        &mut self,
        backend: &B,
        session_id: &SessionId,
    ) -> Result<&'static str, ProfileError> {
        if self.is_submitted() {
            return Err(ProfileError::AlreadySubmitted);
        }

        if let Some(field) = self.draft.first_missing_field() {
            return Err(ProfileError::MissingField(field));
        }

        let submission = ProfileSubmission {
            profile: self.draft.clone(),
            session_id: session_id.clone(),
        };

        match backend.submit_profile(&submission).await {
            Ok(()) => {
                self.status = ProfileStatus::Submitted;
                info!(session_id = %session_id, "Visitor profile accepted");
                Ok(SUBMITTED_NOTICE)
            }
            Err(e) => {
                warn!(error = %e, session_id = %session_id, "Visitor profile rejected");
                Err(ProfileError::Rejected(e))
            }
        }
    }
}

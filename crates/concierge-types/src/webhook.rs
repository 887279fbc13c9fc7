//! Wire payloads for the two webhook endpoints.
//!
//! Both endpoints take a JSON `POST`. Field names match what the remote
//! workflow expects (`session_id` in snake case).

use serde::{Deserialize, Serialize};

use crate::profile::VisitorProfile;
use crate::session::SessionId;

/// Body sent to the profile endpoint: `{ name, email, phone, session_id }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileSubmission {
    #[serde(flatten)]
    pub profile: VisitorProfile,
    pub session_id: SessionId,
}

/// Body sent to the answer endpoint: `{ question, session_id }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionRequest {
    pub question: String,
    pub session_id: SessionId,
}

/// Body returned by the answer endpoint.
///
/// Every other field the workflow may add is ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerResponse {
    #[serde(default)]
    pub answer: Option<String>,
}

impl AnswerResponse {
    /// The answer text, or `None` when missing, null or blank.
    pub fn text(&self) -> Option<&str> {
        self.answer.as_deref().filter(|a| !a.trim().is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_submission_is_flat() {
        let body = ProfileSubmission {
            profile: VisitorProfile::new("A", "a@x.com", "1"),
            session_id: SessionId::from_stored("sid").unwrap(),
        };
        let value = serde_json::to_value(&body).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "name": "A",
                "email": "a@x.com",
                "phone": "1",
                "session_id": "sid",
            })
        );
    }

    #[test]
    fn test_question_request_shape() {
        let body = QuestionRequest {
            question: "What listings are available?".to_string(),
            session_id: SessionId::from_stored("sid").unwrap(),
        };
        let value = serde_json::to_value(&body).unwrap();
        assert_eq!(
            value,
            serde_json::json!({ "question": "What listings are available?", "session_id": "sid" })
        );
    }

    #[test]
    fn test_answer_response_tolerates_missing_and_extra_fields() {
        let resp: AnswerResponse = serde_json::from_str(r#"{"other": 1}"#).unwrap();
        assert_eq!(resp.text(), None);

        let resp: AnswerResponse = serde_json::from_str(r#"{"answer": null}"#).unwrap();
        assert_eq!(resp.text(), None);

        let resp: AnswerResponse = serde_json::from_str(r#"{"answer": "  "}"#).unwrap();
        assert_eq!(resp.text(), None);

        let resp: AnswerResponse =
            serde_json::from_str(r#"{"answer": "Here are 3 listings", "sources": []}"#).unwrap();
        assert_eq!(resp.text(), Some("Here are 3 listings"));
    }
}

//! Client configuration types.
//!
//! `ConciergeConfig` represents `config.toml` in the data directory. Every
//! field has a default, so an empty or missing file is valid.

use serde::{Deserialize, Serialize};

/// Profile submission endpoint used when none is configured.
pub const DEFAULT_PROFILE_ENDPOINT: &str = "https://aiginno-agentic.onrender.com/webhook-test/user";

/// Question/answer endpoint used when none is configured.
pub const DEFAULT_ANSWER_ENDPOINT: &str = "https://aiginno-agentic.onrender.com/webhook-test/ai-chat";

/// Storage key holding the session identifier.
pub const DEFAULT_SESSION_KEY: &str = "sessionId";

/// Top-level configuration for the chat client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConciergeConfig {
    #[serde(default = "default_profile_endpoint")]
    pub profile_endpoint: String,

    #[serde(default = "default_answer_endpoint")]
    pub answer_endpoint: String,

    /// Upper bound on a single webhook round-trip. A request that exceeds it
    /// takes the failure path instead of leaving the chat busy forever.
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,

    #[serde(default = "default_session_key")]
    pub session_key: String,

    /// Title shown in the banner.
    #[serde(default = "default_assistant_name")]
    pub assistant_name: String,
}

fn default_profile_endpoint() -> String {
    DEFAULT_PROFILE_ENDPOINT.to_string()
}

fn default_answer_endpoint() -> String {
    DEFAULT_ANSWER_ENDPOINT.to_string()
}

fn default_request_timeout_secs() -> u64 {
    60
}

fn default_session_key() -> String {
    DEFAULT_SESSION_KEY.to_string()
}

fn default_assistant_name() -> String {
    "Real Estate AI Chatbot".to_string()
}

impl Default for ConciergeConfig {
    fn default() -> Self {
        Self {
            profile_endpoint: default_profile_endpoint(),
            answer_endpoint: default_answer_endpoint(),
            request_timeout_secs: default_request_timeout_secs(),
            session_key: default_session_key(),
            assistant_name: default_assistant_name(),
        }
    }
}

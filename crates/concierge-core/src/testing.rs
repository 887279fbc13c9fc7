//! In-memory fakes shared by the unit tests in this crate.

use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex};

use tokio::sync::Notify;

use concierge_types::error::{StorageError, WebhookError};
use concierge_types::webhook::{AnswerResponse, ProfileSubmission, QuestionRequest};

use crate::storage::kv_store::KvStore;
use crate::webhook::backend::WebhookBackend;

#[derive(Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, String>>,
    pub writes: Mutex<u32>,
}

impl MemoryStore {
    pub fn with_entry(key: &str, value: &str) -> Self {
        let store = Self::default();
        store
            .entries
            .lock()
            .unwrap()
            .insert(key.to_string(), value.to_string());
        store
    }

    pub fn value(&self, key: &str) -> Option<String> {
        self.entries.lock().unwrap().get(key).cloned()
    }
}

impl KvStore for MemoryStore {
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries.lock().unwrap().get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        *self.writes.lock().unwrap() += 1;
        self.entries
            .lock()
            .unwrap()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Storage that is never available.
pub struct BrokenStore;

impl KvStore for BrokenStore {
    async fn get(&self, _key: &str) -> Result<Option<String>, StorageError> {
        Err(StorageError::Io("storage disabled".to_string()))
    }

    async fn set(&self, _key: &str, _value: &str) -> Result<(), StorageError> {
        Err(StorageError::Io("storage disabled".to_string()))
    }
}

/// Backend that records every request and replays scripted results.
///
/// Unscripted profile submissions succeed; unscripted questions fail with a
/// transport error.
#[derive(Default)]
pub struct RecordingBackend {
    pub profile_calls: Mutex<Vec<ProfileSubmission>>,
    pub questions: Mutex<Vec<QuestionRequest>>,
    profile_results: Mutex<VecDeque<Result<(), WebhookError>>>,
    answers: Mutex<VecDeque<Result<AnswerResponse, WebhookError>>>,
    gate: Option<Arc<Notify>>,
}

impl RecordingBackend {
    /// Questions block until the returned `Notify` is signalled once per call.
    pub fn gated() -> (Self, Arc<Notify>) {
        let gate = Arc::new(Notify::new());
        let backend = Self {
            gate: Some(gate.clone()),
            ..Self::default()
        };
        (backend, gate)
    }

    pub fn push_profile_result(&self, result: Result<(), WebhookError>) {
        self.profile_results.lock().unwrap().push_back(result);
    }

    pub fn push_answer(&self, answer: Option<&str>) {
        self.answers.lock().unwrap().push_back(Ok(AnswerResponse {
            answer: answer.map(str::to_string),
        }));
    }

    pub fn push_failure(&self, error: WebhookError) {
        self.answers.lock().unwrap().push_back(Err(error));
    }

    pub fn profile_call_count(&self) -> usize {
        self.profile_calls.lock().unwrap().len()
    }

    pub fn question_count(&self) -> usize {
        self.questions.lock().unwrap().len()
    }
}

impl WebhookBackend for RecordingBackend {
    async fn submit_profile(&self, submission: &ProfileSubmission) -> Result<(), WebhookError> {
        self.profile_calls.lock().unwrap().push(submission.clone());
        self.profile_results
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or(Ok(()))
    }

    async fn ask(&self, request: &QuestionRequest) -> Result<AnswerResponse, WebhookError> {
        self.questions.lock().unwrap().push(request.clone());
        if let Some(gate) = &self.gate {
            gate.notified().await;
        }
        let next = self.answers.lock().unwrap().pop_front();
        next.unwrap_or_else(|| Err(WebhookError::Transport("no scripted answer".to_string())))
    }
}

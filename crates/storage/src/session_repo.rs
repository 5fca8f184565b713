use std::collections::BTreeMap;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use survey_core::model::{AnswerValue, QuestionId, SessionId, SessionStatus};

use crate::store::SessionStore;

/// Store key holding the current session id.
pub const SESSION_ID_KEY: &str = "sessionId";

/// Literal persisted under the status key for a completed session.
pub const COMPLETED_LITERAL: &str = "COMPLETED";

/// Key holding the JSON answers mapping for a session.
#[must_use]
pub fn answers_key(id: &SessionId) -> String {
    id.as_str().to_string()
}

/// Key holding the completion literal for a session.
#[must_use]
pub fn status_key(id: &SessionId) -> String {
    format!("{}-status", id.as_str())
}

/// Persisted shape of the answers mapping.
///
/// Mirrors the domain map with plain integer keys so repositories can
/// serialize without leaking storage concerns into the domain layer. The
/// wire shape is `{"1":4,"5":"..."}`.
#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(transparent)]
struct AnswersRecord(BTreeMap<u32, AnswerValue>);

impl AnswersRecord {
    fn from_answers(answers: &BTreeMap<QuestionId, AnswerValue>) -> Self {
        Self(
            answers
                .iter()
                .map(|(id, value)| (id.value(), value.clone()))
                .collect(),
        )
    }

    fn into_answers(self) -> BTreeMap<QuestionId, AnswerValue> {
        self.0
            .into_iter()
            .map(|(id, value)| (QuestionId::new(id), value))
            .collect()
    }
}

/// Typed access to session state over a raw [`SessionStore`].
///
/// Absent or malformed stored data never surfaces as an error here: decoding
/// falls back to "no prior answers" / "not completed".
#[derive(Clone)]
pub struct SessionRepository {
    store: Arc<dyn SessionStore>,
}

impl SessionRepository {
    #[must_use]
    pub fn new(store: Arc<dyn SessionStore>) -> Self {
        Self { store }
    }

    #[must_use]
    pub fn load_session_id(&self) -> Option<SessionId> {
        self.store.get(SESSION_ID_KEY).map(SessionId::new)
    }

    pub fn store_session_id(&self, id: &SessionId) {
        self.store.set(SESSION_ID_KEY, id.as_str());
    }

    /// Remove the current session id. Answers and status for the old id are
    /// left behind so existing stored data stays readable.
    pub fn clear_session_id(&self) {
        self.store.remove(SESSION_ID_KEY);
    }

    #[must_use]
    pub fn load_answers(&self, id: &SessionId) -> BTreeMap<QuestionId, AnswerValue> {
        let Some(raw) = self.store.get(&answers_key(id)) else {
            return BTreeMap::new();
        };
        serde_json::from_str::<AnswersRecord>(&raw)
            .unwrap_or_default()
            .into_answers()
    }

    pub fn save_answers(&self, id: &SessionId, answers: &BTreeMap<QuestionId, AnswerValue>) {
        let record = AnswersRecord::from_answers(answers);
        if let Ok(raw) = serde_json::to_string(&record) {
            self.store.set(&answers_key(id), &raw);
        }
    }

    #[must_use]
    pub fn load_status(&self, id: &SessionId) -> SessionStatus {
        match self.store.get(&status_key(id)) {
            Some(raw) if raw == COMPLETED_LITERAL => SessionStatus::Completed,
            _ => SessionStatus::InProgress,
        }
    }

    pub fn mark_completed(&self, id: &SessionId) {
        self.store.set(&status_key(id), COMPLETED_LITERAL);
    }
}

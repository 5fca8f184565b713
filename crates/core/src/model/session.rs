use std::collections::BTreeMap;

use crate::model::{AnswerValue, QuestionId, QuestionSet, SessionId};

/// Completion marker for a session. Transitions one way only,
/// `InProgress` -> `Completed`, within a given session id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SessionStatus {
    #[default]
    InProgress,
    Completed,
}

impl SessionStatus {
    #[must_use]
    pub fn is_completed(self) -> bool {
        matches!(self, SessionStatus::Completed)
    }
}

/// One respondent's attempt at the survey: identity, recorded answers, and
/// completion status.
#[derive(Debug, Clone, PartialEq)]
pub struct SurveySession {
    id: SessionId,
    answers: BTreeMap<QuestionId, AnswerValue>,
    status: SessionStatus,
}

impl SurveySession {
    /// A fresh session with no answers.
    #[must_use]
    pub fn new(id: SessionId) -> Self {
        Self {
            id,
            answers: BTreeMap::new(),
            status: SessionStatus::InProgress,
        }
    }

    /// Rehydrate a session from persisted parts.
    ///
    /// Enforces the invariant that answer keys are a subset of the question
    /// set's ids: entries for unknown questions or with a mismatched value
    /// kind are dropped rather than surfaced as errors.
    #[must_use]
    pub fn from_persisted(
        id: SessionId,
        answers: BTreeMap<QuestionId, AnswerValue>,
        status: SessionStatus,
        questions: &QuestionSet,
    ) -> Self {
        let answers = answers
            .into_iter()
            .filter(|(question_id, value)| {
                questions
                    .find(*question_id)
                    .is_some_and(|question| value.matches(question.kind()))
            })
            .collect();
        Self {
            id,
            answers,
            status,
        }
    }

    #[must_use]
    pub fn id(&self) -> &SessionId {
        &self.id
    }

    #[must_use]
    pub fn answers(&self) -> &BTreeMap<QuestionId, AnswerValue> {
        &self.answers
    }

    #[must_use]
    pub fn answer(&self, id: QuestionId) -> Option<&AnswerValue> {
        self.answers.get(&id)
    }

    #[must_use]
    pub fn status(&self) -> SessionStatus {
        self.status
    }

    /// Record (or overwrite) the answer for a question.
    pub fn record(&mut self, id: QuestionId, value: AnswerValue) {
        self.answers.insert(id, value);
    }

    /// Mark the session completed. One-way; repeated calls are no-ops.
    pub fn complete(&mut self) {
        self.status = SessionStatus::Completed;
    }
}

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use thiserror::Error;

use crate::model::QuestionId;

/// How a question is answered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuestionKind {
    /// Bounded integer scale, selectable values `1..=scale`.
    Rating { scale: u8 },
    /// Free-form string.
    Text,
}

/// A recorded answer. Serialized untagged so rating answers persist as JSON
/// numbers and text answers as JSON strings, keeping existing stored data
/// readable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AnswerValue {
    Rating(u8),
    Text(String),
}

impl AnswerValue {
    /// True if this value is the kind of answer `kind` expects.
    #[must_use]
    pub fn matches(&self, kind: QuestionKind) -> bool {
        matches!(
            (self, kind),
            (AnswerValue::Rating(_), QuestionKind::Rating { .. })
                | (AnswerValue::Text(_), QuestionKind::Text)
        )
    }
}

/// A single survey prompt. Immutable, defined at build time.
#[derive(Debug, Clone, PartialEq)]
pub struct Question {
    id: QuestionId,
    prompt: String,
    kind: QuestionKind,
}

impl Question {
    #[must_use]
    pub fn new(id: QuestionId, prompt: impl Into<String>, kind: QuestionKind) -> Self {
        Self {
            id,
            prompt: prompt.into(),
            kind,
        }
    }

    #[must_use]
    pub fn id(&self) -> QuestionId {
        self.id
    }

    #[must_use]
    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    #[must_use]
    pub fn kind(&self) -> QuestionKind {
        self.kind
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuestionSetError {
    #[error("question set has no questions")]
    Empty,

    #[error("duplicate question id: {id}")]
    DuplicateId { id: QuestionId },
}

/// Ordered, immutable list of questions driving the wizard.
///
/// Question ids must be unique; answers are keyed by them in storage.
#[derive(Debug, Clone, PartialEq)]
pub struct QuestionSet {
    questions: Vec<Question>,
}

impl QuestionSet {
    /// Build a question set, rejecting empty lists and duplicate ids.
    ///
    /// # Errors
    ///
    /// Returns `QuestionSetError::Empty` or `QuestionSetError::DuplicateId`.
    pub fn new(questions: Vec<Question>) -> Result<Self, QuestionSetError> {
        if questions.is_empty() {
            return Err(QuestionSetError::Empty);
        }
        let mut seen = HashSet::new();
        for question in &questions {
            if !seen.insert(question.id()) {
                return Err(QuestionSetError::DuplicateId { id: question.id() });
            }
        }
        Ok(Self { questions })
    }

    /// The built-in customer feedback survey.
    #[must_use]
    pub fn customer_survey() -> Self {
        let questions = vec![
            Question::new(
                QuestionId::new(1),
                "How satisfied are you with our products?",
                QuestionKind::Rating { scale: 5 },
            ),
            Question::new(
                QuestionId::new(2),
                "How fair are the prices compared to similar retailers?",
                QuestionKind::Rating { scale: 5 },
            ),
            Question::new(
                QuestionId::new(3),
                "How satisfied are you with the value for money of your purchase?",
                QuestionKind::Rating { scale: 5 },
            ),
            Question::new(
                QuestionId::new(4),
                "On a scale of 1-10 how would you recommend us to your friends and family?",
                QuestionKind::Rating { scale: 10 },
            ),
            Question::new(
                QuestionId::new(5),
                "What could we do to improve our service?",
                QuestionKind::Text,
            ),
        ];
        Self::new(questions).expect("built-in question set is valid")
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    /// Question at the zero-based slot, in presentation order.
    #[must_use]
    pub fn get(&self, slot: usize) -> Option<&Question> {
        self.questions.get(slot)
    }

    #[must_use]
    pub fn find(&self, id: QuestionId) -> Option<&Question> {
        self.questions.iter().find(|question| question.id() == id)
    }

    #[must_use]
    pub fn contains(&self, id: QuestionId) -> bool {
        self.find(id).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Question> {
        self.questions.iter()
    }
}

//! Shared error types for the services crate.

use thiserror::Error;

/// Errors emitted by the survey flow.
///
/// Storage never contributes here: absent or malformed persisted state is
/// absorbed by the repository's defensive defaults.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum SurveyError {
    #[error("no question is active at the current position")]
    NotAtQuestion,

    #[error("answer kind does not match the current question")]
    AnswerKind,
}

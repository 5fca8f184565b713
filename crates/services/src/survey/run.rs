use survey_core::model::{
    AnswerValue, Question, QuestionSet, SessionStatus, SurveySession, WizardPosition,
};

use crate::error::SurveyError;

/// In-memory walk through the survey for one session.
///
/// Holds the question set, the session (answers + status), and the wizard
/// position. Pure state stepping; persistence is orchestrated by
/// [`super::SurveyFlowService`].
#[derive(Debug, Clone, PartialEq)]
pub struct SurveyRun {
    questions: QuestionSet,
    session: SurveySession,
    position: WizardPosition,
}

impl SurveyRun {
    /// Start a run at the welcome screen.
    #[must_use]
    pub fn new(questions: QuestionSet, session: SurveySession) -> Self {
        let position = WizardPosition::start(questions.len());
        Self {
            questions,
            session,
            position,
        }
    }

    #[must_use]
    pub fn questions(&self) -> &QuestionSet {
        &self.questions
    }

    #[must_use]
    pub fn session(&self) -> &SurveySession {
        &self.session
    }

    #[must_use]
    pub fn position(&self) -> WizardPosition {
        self.position
    }

    /// The question at the current position, if any.
    #[must_use]
    pub fn current_question(&self) -> Option<&Question> {
        self.position
            .current_slot()
            .and_then(|slot| self.questions.get(slot))
    }

    /// The recorded answer for the current question, if any.
    #[must_use]
    pub fn current_answer(&self) -> Option<&AnswerValue> {
        self.current_question()
            .and_then(|question| self.session.answer(question.id()))
    }

    #[must_use]
    pub fn is_completed(&self) -> bool {
        self.session.status() == SessionStatus::Completed
    }

    /// Record `value` for the current question.
    ///
    /// # Errors
    ///
    /// Returns `SurveyError::NotAtQuestion` on the welcome screen and
    /// `SurveyError::AnswerKind` when the value's kind does not match the
    /// question (type dispatch is the only validation performed).
    pub fn record_answer(&mut self, value: AnswerValue) -> Result<(), SurveyError> {
        let question = self.current_question().ok_or(SurveyError::NotAtQuestion)?;
        if !value.matches(question.kind()) {
            return Err(SurveyError::AnswerKind);
        }
        let id = question.id();
        self.session.record(id, value);
        Ok(())
    }

    /// Step forward; saturates at the last question.
    pub fn advance(&mut self) {
        self.position.advance();
    }

    /// Step back; floored at the first question.
    pub fn retreat(&mut self) {
        self.position.retreat();
    }

    /// Mark the session completed (one-way).
    pub fn complete(&mut self) {
        self.session.complete();
    }

    /// Return to the welcome screen, keeping the session as-is.
    pub fn reset_to_welcome(&mut self) {
        self.position.reset();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use survey_core::model::{QuestionId, SessionId};

    fn fresh_run() -> SurveyRun {
        let questions = QuestionSet::customer_survey();
        let session = SurveySession::new(SessionId::new("session-1"));
        SurveyRun::new(questions, session)
    }

    #[test]
    fn recording_on_welcome_screen_is_rejected() {
        let mut run = fresh_run();
        let err = run.record_answer(AnswerValue::Rating(3)).unwrap_err();
        assert_eq!(err, SurveyError::NotAtQuestion);
    }

    #[test]
    fn recording_wrong_kind_is_rejected() {
        let mut run = fresh_run();
        run.advance();
        let err = run
            .record_answer(AnswerValue::Text("five".into()))
            .unwrap_err();
        assert_eq!(err, SurveyError::AnswerKind);
    }

    #[test]
    fn recorded_answer_is_keyed_by_question_id() {
        let mut run = fresh_run();
        run.advance();
        run.record_answer(AnswerValue::Rating(4)).unwrap();
        assert_eq!(
            run.session().answer(QuestionId::new(1)),
            Some(&AnswerValue::Rating(4))
        );
        assert_eq!(run.current_answer(), Some(&AnswerValue::Rating(4)));
    }

    #[test]
    fn answers_survive_navigation() {
        let mut run = fresh_run();
        run.advance();
        run.record_answer(AnswerValue::Rating(2)).unwrap();
        run.advance();
        run.retreat();
        assert_eq!(run.current_answer(), Some(&AnswerValue::Rating(2)));
    }

    #[test]
    fn reset_keeps_session_but_returns_to_welcome() {
        let mut run = fresh_run();
        run.advance();
        run.record_answer(AnswerValue::Rating(5)).unwrap();
        run.complete();
        run.reset_to_welcome();

        assert!(run.position().is_welcome());
        assert!(run.is_completed());
        assert_eq!(run.session().answers().len(), 1);
    }
}

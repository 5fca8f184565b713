use std::sync::Arc;
use std::time::Duration;

use storage::session_repo::SessionRepository;
use storage::store::SessionStore;
use survey_core::model::{AnswerValue, QuestionSet, SessionId, SurveySession};

use crate::Clock;
use crate::error::SurveyError;
use super::run::SurveyRun;

/// How long the thank-you acknowledgment stays on screen after submission.
pub const ACKNOWLEDGEMENT_DISPLAY: Duration = Duration::from_secs(5);

/// Orchestrates session loading and persisted stepping.
///
/// Owns the store-facing side of the wizard: the shell drives a
/// [`SurveyRun`] through this service so every mutation is persisted as it
/// happens. The acknowledgment delay is exposed as data; scheduling it is
/// the shell's job, which keeps tests free of wall-clock time.
#[derive(Clone)]
pub struct SurveyFlowService {
    clock: Clock,
    repo: SessionRepository,
    questions: QuestionSet,
}

impl SurveyFlowService {
    #[must_use]
    pub fn new(clock: Clock, store: Arc<dyn SessionStore>, questions: QuestionSet) -> Self {
        Self {
            clock,
            repo: SessionRepository::new(store),
            questions,
        }
    }

    #[must_use]
    pub fn questions(&self) -> &QuestionSet {
        &self.questions
    }

    /// Load the current session, or create one if no id is stored.
    ///
    /// Side effect on first run: a newly generated id is written to the
    /// store. Prior answers and status for a live id are restored; the
    /// position always starts at the welcome screen.
    #[must_use]
    pub fn initialize(&self) -> SurveyRun {
        let id = match self.repo.load_session_id() {
            Some(id) => id,
            None => {
                let id = SessionId::generate(self.clock.now());
                self.repo.store_session_id(&id);
                id
            }
        };

        let answers = self.repo.load_answers(&id);
        let status = self.repo.load_status(&id);
        let session = SurveySession::from_persisted(id, answers, status, &self.questions);
        SurveyRun::new(self.questions.clone(), session)
    }

    /// Record an answer for the run's current question and persist the full
    /// mapping immediately.
    ///
    /// # Errors
    ///
    /// Propagates `SurveyError` from [`SurveyRun::record_answer`].
    pub fn record_answer(
        &self,
        run: &mut SurveyRun,
        value: AnswerValue,
    ) -> Result<(), SurveyError> {
        run.record_answer(value)?;
        self.repo
            .save_answers(run.session().id(), run.session().answers());
        Ok(())
    }

    /// Mark the session completed and persist the status literal.
    pub fn confirm_submission(&self, run: &mut SurveyRun) {
        run.complete();
        self.repo.mark_completed(run.session().id());
    }

    /// End the acknowledgment: back to the welcome screen, and the stored
    /// session id is removed so the next [`Self::initialize`] generates a
    /// fresh one. The old id's answers and status stay orphaned in the
    /// store.
    pub fn finish_acknowledgement(&self, run: &mut SurveyRun) {
        run.reset_to_welcome();
        self.repo.clear_session_id();
    }

    /// Fixed display time for the thank-you screen.
    #[must_use]
    pub fn acknowledgement_delay(&self) -> Duration {
        ACKNOWLEDGEMENT_DISPLAY
    }
}

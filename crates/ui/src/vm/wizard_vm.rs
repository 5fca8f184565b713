use services::{SurveyError, SurveyFlowService, SurveyRun};
use survey_core::model::{AnswerValue, QuestionKind};

use crate::views::ViewError;

/// Control rendered for the current question.
#[derive(Clone, Debug, PartialEq)]
pub enum QuestionControlVm {
    Rating { scale: u8, selected: Option<u8> },
    Text { value: String },
}

/// Everything the question screen needs, precomputed from the run.
#[derive(Clone, Debug, PartialEq)]
pub struct QuestionVm {
    pub number: usize,
    pub total: usize,
    pub prompt: String,
    pub control: QuestionControlVm,
    pub at_first: bool,
    pub at_last: bool,
}

/// What the survey screen shows, as a pure function of wizard state.
#[derive(Clone, Debug, PartialEq)]
pub enum WizardStage {
    Welcome,
    Question(QuestionVm),
    ThankYou,
}

/// UI-side wizard state: the run plus the two presentation flags that never
/// touch persisted state on their own.
#[derive(Clone, Debug)]
pub struct WizardVm {
    run: SurveyRun,
    show_confirmation: bool,
    show_thank_you: bool,
}

impl WizardVm {
    #[must_use]
    pub fn new(run: SurveyRun) -> Self {
        Self {
            run,
            show_confirmation: false,
            show_thank_you: false,
        }
    }

    #[must_use]
    pub fn show_confirmation(&self) -> bool {
        self.show_confirmation
    }

    #[must_use]
    pub fn stage(&self) -> WizardStage {
        if self.show_thank_you {
            return WizardStage::ThankYou;
        }
        match map_question(&self.run) {
            Some(question) => WizardStage::Question(question),
            None => WizardStage::Welcome,
        }
    }

    /// The welcome screen's Start action; identical to one advance.
    pub fn start(&mut self) {
        self.run.advance();
    }

    pub fn advance(&mut self) {
        self.run.advance();
    }

    pub fn retreat(&mut self) {
        self.run.retreat();
    }

    /// Record and persist an answer for the current question.
    ///
    /// # Errors
    ///
    /// Returns `ViewError::Unknown` when the flow rejects the answer.
    pub fn record_answer(
        &mut self,
        flow: &SurveyFlowService,
        value: AnswerValue,
    ) -> Result<(), ViewError> {
        flow.record_answer(&mut self.run, value)
            .map_err(|_: SurveyError| ViewError::Unknown)
    }

    /// Open the confirmation prompt. No persisted state changes.
    pub fn request_submit(&mut self) {
        self.show_confirmation = true;
    }

    /// Close the confirmation prompt without mutation.
    pub fn cancel_submission(&mut self) {
        self.show_confirmation = false;
    }

    /// Complete the session, persist it, and show the acknowledgment.
    pub fn confirm_submission(&mut self, flow: &SurveyFlowService) {
        flow.confirm_submission(&mut self.run);
        self.show_confirmation = false;
        self.show_thank_you = true;
    }

    /// Called when the acknowledgment display time elapses.
    pub fn finish_acknowledgement(&mut self, flow: &SurveyFlowService) {
        self.show_thank_you = false;
        flow.finish_acknowledgement(&mut self.run);
    }
}

fn map_question(run: &SurveyRun) -> Option<QuestionVm> {
    let position = run.position();
    let number = position.question_number()?;
    let question = run.current_question()?;

    let control = match question.kind() {
        QuestionKind::Rating { scale } => QuestionControlVm::Rating {
            scale,
            selected: match run.current_answer() {
                Some(AnswerValue::Rating(value)) => Some(*value),
                _ => None,
            },
        },
        QuestionKind::Text => QuestionControlVm::Text {
            value: match run.current_answer() {
                Some(AnswerValue::Text(text)) => text.clone(),
                _ => String::new(),
            },
        },
    };

    Some(QuestionVm {
        number,
        total: position.total(),
        prompt: question.prompt().to_string(),
        control,
        at_first: position.is_first_question(),
        at_last: position.is_last_question(),
    })
}

mod ids;
mod question;
mod session;
mod wizard;

pub use ids::{QuestionId, SessionId};
pub use question::{AnswerValue, Question, QuestionKind, QuestionSet, QuestionSetError};
pub use session::{SessionStatus, SurveySession};
pub use wizard::WizardPosition;

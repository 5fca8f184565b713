mod run;
mod workflow;

// Public API of the survey subsystem.
pub use crate::error::SurveyError;
pub use run::SurveyRun;
pub use workflow::{ACKNOWLEDGEMENT_DISPLAY, SurveyFlowService};

#![forbid(unsafe_code)]

pub mod error;
pub mod survey;

pub use survey_core::Clock;

pub use error::SurveyError;
pub use survey::{ACKNOWLEDGEMENT_DISPLAY, SurveyFlowService, SurveyRun};

mod state;
mod survey;

pub use state::{ViewError, ViewState, view_state_from_resource};
pub use survey::SurveyView;

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;

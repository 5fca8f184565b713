use std::sync::Arc;

use services::SurveyFlowService;

/// What the composition root must provide to the UI.
pub trait UiApp: Send + Sync {
    fn survey_flow(&self) -> Arc<SurveyFlowService>;
}

#[derive(Clone)]
pub struct AppContext {
    survey_flow: Arc<SurveyFlowService>,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            survey_flow: app.survey_flow(),
        }
    }

    #[must_use]
    pub fn survey_flow(&self) -> Arc<SurveyFlowService> {
        Arc::clone(&self.survey_flow)
    }
}

/// Build an `AppContext` from a UI-facing app implementation.
///
/// Provided by the application composition root (e.g. `crates/app`).
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}

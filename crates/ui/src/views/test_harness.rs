use std::sync::Arc;

use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use services::{Clock, SurveyFlowService};
use storage::store::InMemoryStore;
use survey_core::model::QuestionSet;
use survey_core::time::fixed_now;

use crate::context::{UiApp, build_app_context};
use crate::views::SurveyView;

#[derive(Clone)]
struct TestApp {
    survey_flow: Arc<SurveyFlowService>,
}

impl UiApp for TestApp {
    fn survey_flow(&self) -> Arc<SurveyFlowService> {
        Arc::clone(&self.survey_flow)
    }
}

#[derive(Props, Clone)]
struct ViewHarnessProps {
    app: Arc<TestApp>,
}

impl PartialEq for ViewHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

impl Eq for ViewHarnessProps {}

#[component]
fn SurveyViewHarness(props: ViewHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(&app));
    rsx! {
        SurveyView {}
    }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
    pub store: InMemoryStore,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    pub async fn drive_async(&mut self) {
        let _ = tokio::time::timeout(
            std::time::Duration::from_millis(50),
            self.dom.wait_for_work(),
        )
        .await;
        self.dom.render_immediate(&mut NoOpMutations);
        self.dom.process_events();
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

pub fn setup_view_harness(store: InMemoryStore) -> ViewHarness {
    let survey_flow = Arc::new(SurveyFlowService::new(
        Clock::fixed(fixed_now()),
        Arc::new(store.clone()),
        QuestionSet::customer_survey(),
    ));
    let app = Arc::new(TestApp { survey_flow });

    let dom = VirtualDom::new_with_props(SurveyViewHarness, ViewHarnessProps { app });

    ViewHarness { dom, store }
}

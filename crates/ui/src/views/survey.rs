use dioxus::prelude::*;

use services::SurveyRun;
use survey_core::model::AnswerValue;

use crate::context::AppContext;
use crate::views::{ViewError, ViewState, view_state_from_resource};
use crate::vm::{QuestionControlVm, QuestionVm, WizardStage, WizardVm};

#[component]
pub fn SurveyView() -> Element {
    let ctx = use_context::<AppContext>();
    let flow = ctx.survey_flow();

    // Loading or creating the session; the wizard only mounts once an id
    // exists.
    let resource = use_resource(move || {
        let flow = flow.clone();
        async move { Ok::<_, ViewError>(flow.initialize()) }
    });
    let state = view_state_from_resource(&resource);

    rsx! {
        div { class: "page survey-page",
            match state {
                ViewState::Idle => rsx! {
                    p { "Idle" }
                },
                ViewState::Loading => rsx! {
                    p { class: "survey-loading", "Loading..." }
                },
                ViewState::Ready(run) => rsx! {
                    SurveyWizard { run }
                },
                ViewState::Error(err) => rsx! {
                    p { "{err.message()}" }
                },
            }
        }
    }
}

#[component]
fn SurveyWizard(run: SurveyRun) -> Element {
    let ctx = use_context::<AppContext>();
    let mut vm = use_signal(move || WizardVm::new(run.clone()));
    let mut error = use_signal(|| None::<ViewError>);

    let stage = vm.read().stage();
    let show_confirmation = vm.read().show_confirmation();

    let flow_for_rating = ctx.survey_flow();
    let flow_for_text = ctx.survey_flow();
    let flow_for_confirm = ctx.survey_flow();

    rsx! {
        div { class: "survey-container",
            if let Some(err) = error() {
                p { class: "survey-error", "{err.message()}" }
            }
            match stage {
                WizardStage::ThankYou => rsx! {
                    ThankYouCard {}
                },
                WizardStage::Welcome => rsx! {
                    WelcomeCard {
                        on_start: move |_| vm.with_mut(|vm| vm.start()),
                    }
                },
                WizardStage::Question(question) => rsx! {
                    QuestionCard {
                        vm: question,
                        on_rating: move |value: u8| {
                            let flow = flow_for_rating.clone();
                            let result = vm
                                .with_mut(|vm| vm.record_answer(&flow, AnswerValue::Rating(value)));
                            if result.is_err() {
                                error.set(Some(ViewError::Unknown));
                            }
                        },
                        on_text: move |text: String| {
                            let flow = flow_for_text.clone();
                            let result =
                                vm.with_mut(|vm| vm.record_answer(&flow, AnswerValue::Text(text)));
                            if result.is_err() {
                                error.set(Some(ViewError::Unknown));
                            }
                        },
                        on_previous: move |_| vm.with_mut(|vm| vm.retreat()),
                        on_next: move |_| vm.with_mut(|vm| vm.advance()),
                        on_skip: move |_| vm.with_mut(|vm| vm.advance()),
                        on_submit: move |_| vm.with_mut(|vm| vm.request_submit()),
                    }
                },
            }
            if show_confirmation {
                ConfirmDialog {
                    on_confirm: move |_| {
                        let flow = flow_for_confirm.clone();
                        let delay = flow.acknowledgement_delay();
                        vm.with_mut(|vm| vm.confirm_submission(&flow));
                        // Fire-and-forget: if the view is torn down first,
                        // the reset is simply lost.
                        spawn(async move {
                            tokio::time::sleep(delay).await;
                            vm.with_mut(|vm| vm.finish_acknowledgement(&flow));
                        });
                    },
                    on_cancel: move |_| vm.with_mut(|vm| vm.cancel_submission()),
                }
            }
        }
    }
}

#[component]
pub(crate) fn WelcomeCard(on_start: EventHandler<()>) -> Element {
    rsx! {
        div { class: "welcome-screen",
            h1 { "Welcome to the Customer Survey" }
            button {
                class: "btn btn-primary",
                r#type: "button",
                onclick: move |_| on_start.call(()),
                "Start Survey"
            }
        }
    }
}

#[component]
pub(crate) fn ThankYouCard() -> Element {
    rsx! {
        div { class: "thank-you", "Thank you for your time!" }
    }
}

#[component]
pub(crate) fn QuestionCard(
    vm: QuestionVm,
    on_rating: EventHandler<u8>,
    on_text: EventHandler<String>,
    on_previous: EventHandler<()>,
    on_next: EventHandler<()>,
    on_skip: EventHandler<()>,
    on_submit: EventHandler<()>,
) -> Element {
    rsx! {
        div { class: "survey-question",
            h2 { class: "survey-progress", "Question {vm.number}/{vm.total}" }
            p { class: "survey-prompt", "{vm.prompt}" }

            match vm.control.clone() {
                QuestionControlVm::Rating { scale, selected } => {
                    let options = (1..=scale).map(|value| {
                        let class = if selected == Some(value) {
                            "rating-option rating-option--selected"
                        } else {
                            "rating-option"
                        };
                        rsx! {
                            button {
                                class: "{class}",
                                r#type: "button",
                                onclick: move |_| on_rating.call(value),
                                "{value}"
                            }
                        }
                    });
                    rsx! {
                        div { class: "rating-options", {options} }
                    }
                }
                QuestionControlVm::Text { value } => rsx! {
                    textarea {
                        class: "survey-text-input",
                        placeholder: "Your feedback...",
                        value: "{value}",
                        oninput: move |evt| on_text.call(evt.value()),
                    }
                },
            }

            div { class: "survey-nav",
                button {
                    class: "btn btn-secondary",
                    r#type: "button",
                    disabled: vm.at_first,
                    onclick: move |_| on_previous.call(()),
                    "Previous"
                }
                if vm.at_last {
                    button {
                        class: "btn btn-primary",
                        r#type: "button",
                        onclick: move |_| on_submit.call(()),
                        "Submit"
                    }
                } else {
                    button {
                        class: "btn btn-primary",
                        r#type: "button",
                        onclick: move |_| on_next.call(()),
                        "Next"
                    }
                }
                button {
                    class: "btn btn-secondary",
                    r#type: "button",
                    onclick: move |_| on_skip.call(()),
                    "Skip"
                }
            }
        }
    }
}

#[component]
pub(crate) fn ConfirmDialog(on_confirm: EventHandler<()>, on_cancel: EventHandler<()>) -> Element {
    rsx! {
        div {
            class: "survey-modal-overlay",
            onclick: move |_| on_cancel.call(()),
            div {
                class: "survey-modal",
                onclick: move |evt| evt.stop_propagation(),
                p { class: "survey-modal-body", "Are you sure you want to submit the survey?" }
                div { class: "survey-modal-actions",
                    button {
                        class: "btn survey-modal-confirm",
                        r#type: "button",
                        onclick: move |_| on_confirm.call(()),
                        "Yes"
                    }
                    button {
                        class: "btn survey-modal-cancel",
                        r#type: "button",
                        onclick: move |_| on_cancel.call(()),
                        "No"
                    }
                }
            }
        }
    }
}

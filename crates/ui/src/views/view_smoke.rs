use dioxus::prelude::*;
use storage::store::{InMemoryStore, SessionStore};

use super::survey::{ConfirmDialog, QuestionCard, ThankYouCard};
use super::test_harness::setup_view_harness;
use crate::vm::{QuestionControlVm, QuestionVm};

#[tokio::test(flavor = "current_thread")]
async fn survey_view_smoke_renders_welcome() {
    let mut harness = setup_view_harness(InMemoryStore::new());
    harness.rebuild();
    harness.drive_async().await;

    let html = harness.render();
    assert!(
        html.contains("Welcome to the Customer Survey"),
        "missing welcome heading in {html}"
    );
    assert!(
        html.contains("Start Survey"),
        "missing start action in {html}"
    );
}

#[tokio::test(flavor = "current_thread")]
async fn survey_view_smoke_stores_a_fresh_session_id() {
    let store = InMemoryStore::new();
    let mut harness = setup_view_harness(store.clone());
    harness.rebuild();
    harness.drive_async().await;

    assert_eq!(
        harness.store.get("sessionId").as_deref(),
        Some("session-1716206400000")
    );
}

#[tokio::test(flavor = "current_thread")]
async fn survey_view_smoke_restores_live_session() {
    let store = InMemoryStore::new();
    store.set("sessionId", "session-99");
    store.set("session-99", r#"{"1":4}"#);

    let mut harness = setup_view_harness(store.clone());
    harness.rebuild();
    harness.drive_async().await;

    // The stored id is reused, not replaced.
    assert_eq!(harness.store.get("sessionId").as_deref(), Some("session-99"));
    let html = harness.render();
    assert!(
        html.contains("Welcome to the Customer Survey"),
        "reload lands on the welcome screen in {html}"
    );
}

#[component]
fn RatingFixture() -> Element {
    rsx! {
        QuestionCard {
            vm: QuestionVm {
                number: 1,
                total: 5,
                prompt: "How satisfied are you with our products?".into(),
                control: QuestionControlVm::Rating {
                    scale: 5,
                    selected: Some(4),
                },
                at_first: true,
                at_last: false,
            },
            on_rating: |_| {},
            on_text: |_| {},
            on_previous: |_| {},
            on_next: |_| {},
            on_skip: |_| {},
            on_submit: |_| {},
        }
    }
}

#[test]
fn question_card_highlights_recorded_rating() {
    let mut dom = VirtualDom::new(RatingFixture);
    dom.rebuild_in_place();
    let html = dioxus_ssr::render(&dom);

    assert!(html.contains("Question 1/5"), "missing progress in {html}");
    assert!(
        html.contains("How satisfied are you with our products?"),
        "missing prompt in {html}"
    );
    assert_eq!(
        html.matches("rating-option--selected").count(),
        1,
        "exactly one option is highlighted in {html}"
    );
    assert!(html.contains("Next"), "missing next in {html}");
    assert!(html.contains("Skip"), "missing skip in {html}");
}

#[component]
fn TextFixture() -> Element {
    rsx! {
        QuestionCard {
            vm: QuestionVm {
                number: 5,
                total: 5,
                prompt: "What could we do to improve our service?".into(),
                control: QuestionControlVm::Text {
                    value: "Lower prices".into(),
                },
                at_first: false,
                at_last: true,
            },
            on_rating: |_| {},
            on_text: |_| {},
            on_previous: |_| {},
            on_next: |_| {},
            on_skip: |_| {},
            on_submit: |_| {},
        }
    }
}

#[test]
fn last_question_offers_submit_and_bound_text() {
    let mut dom = VirtualDom::new(TextFixture);
    dom.rebuild_in_place();
    let html = dioxus_ssr::render(&dom);

    assert!(html.contains("Question 5/5"), "missing progress in {html}");
    assert!(html.contains("Your feedback..."), "missing placeholder in {html}");
    assert!(html.contains("Lower prices"), "missing bound value in {html}");
    assert!(html.contains("Submit"), "missing submit in {html}");
    assert!(!html.contains(">Next<"), "next replaced by submit in {html}");
}

#[component]
fn ConfirmFixture() -> Element {
    rsx! {
        ConfirmDialog { on_confirm: |_| {}, on_cancel: |_| {} }
    }
}

#[test]
fn confirmation_dialog_renders_yes_no_choice() {
    let mut dom = VirtualDom::new(ConfirmFixture);
    dom.rebuild_in_place();
    let html = dioxus_ssr::render(&dom);

    assert!(
        html.contains("Are you sure you want to submit the survey?"),
        "missing prompt in {html}"
    );
    assert!(html.contains("Yes"), "missing yes in {html}");
    assert!(html.contains("No"), "missing no in {html}");
}

#[component]
fn ThankYouFixture() -> Element {
    rsx! {
        ThankYouCard {}
    }
}

#[test]
fn thank_you_screen_renders_acknowledgment() {
    let mut dom = VirtualDom::new(ThankYouFixture);
    dom.rebuild_in_place();
    let html = dioxus_ssr::render(&dom);

    assert!(
        html.contains("Thank you for your time!"),
        "missing acknowledgment in {html}"
    );
}

use dioxus::prelude::*;

use advisor_core::{CareerGoal, QuizKind, QuizQuestion, QuizScore};

use crate::context::AppContext;
use crate::views::{ViewError, ViewState, view_state_from_resource};
use crate::vm::{QuizIntent, QuizVm};

/// One quiz attempt, pre or post.
///
/// Fetches a generated quiz on mount; the service degrades to a local
/// fallback set by itself, so loading only fails on programming errors.
/// The final score is reported upward exactly once, from the result
/// panel's continue button.
#[component]
pub fn QuizStage(
    kind: QuizKind,
    profile_text: String,
    career_goal: CareerGoal,
    on_complete: EventHandler<QuizScore>,
) -> Element {
    let ctx = use_context::<AppContext>();
    let quizzes = ctx.quiz_service();

    let vm = use_signal(|| None::<QuizVm>);
    let profile_text_for_fetch = profile_text;
    let resource = use_resource(move || {
        let quizzes = quizzes.clone();
        let profile_text = profile_text_for_fetch.clone();
        let mut vm = vm;
        async move {
            let questions = quizzes.fetch(kind, &profile_text, career_goal).await;
            let started = QuizVm::new(kind, questions).map_err(|_| ViewError::Unknown)?;
            vm.set(Some(started));
            Ok::<_, ViewError>(())
        }
    });
    let state = view_state_from_resource(&resource);

    let dispatch_intent = use_callback(move |intent: QuizIntent| {
        let mut vm = vm;
        if let Some(vm) = vm.write().as_mut() {
            vm.apply(intent);
        }
    });

    // Snapshot everything the markup needs before handing out closures.
    let vm_guard = vm.read();
    let snapshot = vm_guard.as_ref().map(|vm| QuizSnapshot {
        title: vm.title(),
        position_label: vm.position_label(),
        progress_percent: vm.progress_percent(),
        question: vm.question().question.clone(),
        options: vm
            .question()
            .options
            .iter()
            .map(|option| {
                let label = QuizQuestion::option_label(option).to_string();
                let selected = vm.selected() == Some(label.as_str());
                (label, option.clone(), selected)
            })
            .collect(),
        can_advance: vm.can_advance(),
        can_go_back: vm.can_go_back(),
        is_last: vm.is_last_question(),
        result: vm.result(),
        remark: vm.result_remark(),
    });
    drop(vm_guard);

    rsx! {
        section { class: "stage quiz-stage",
            match state {
                ViewState::Idle => rsx! {
                    p { "Idle" }
                },
                ViewState::Loading => rsx! {
                    p { class: "quiz-stage__loading", "Generating your quiz..." }
                },
                ViewState::Error(err) => rsx! {
                    p { "{err.message()}" }
                },
                ViewState::Ready(()) => rsx! {
                    if let Some(snapshot) = snapshot {
                        if let Some(score) = snapshot.result {
                            QuizResult {
                                kind,
                                score,
                                remark: snapshot.remark,
                                on_complete,
                            }
                        } else {
                            QuizQuestionPanel {
                                snapshot,
                                on_intent: dispatch_intent,
                            }
                        }
                    } else {
                        p { "No questions available." }
                    }
                },
            }
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
struct QuizSnapshot {
    title: &'static str,
    position_label: String,
    progress_percent: u32,
    question: String,
    /// (letter label, full option text, currently selected)
    options: Vec<(String, String, bool)>,
    can_advance: bool,
    can_go_back: bool,
    is_last: bool,
    result: Option<QuizScore>,
    remark: &'static str,
}

#[component]
fn QuizQuestionPanel(snapshot: QuizSnapshot, on_intent: EventHandler<QuizIntent>) -> Element {
    let next_label = if snapshot.is_last { "Submit" } else { "Next →" };

    rsx! {
        header { class: "quiz-stage__header",
            h2 { "{snapshot.title}" }
            span { class: "quiz-stage__position", "{snapshot.position_label}" }
        }
        div { class: "quiz-progress",
            div {
                class: "quiz-progress__bar",
                style: "width: {snapshot.progress_percent}%",
            }
        }
        h3 { class: "quiz-stage__question", "{snapshot.question}" }
        div { class: "quiz-stage__options",
            for (label, text, selected) in snapshot.options {
                button {
                    class: if selected { "quiz-option quiz-option--selected" } else { "quiz-option" },
                    r#type: "button",
                    onclick: move |_| on_intent.call(QuizIntent::Select(label.clone())),
                    "{text}"
                }
            }
        }
        footer { class: "quiz-stage__footer",
            button {
                class: "btn btn-ghost",
                id: "quiz-back",
                r#type: "button",
                disabled: !snapshot.can_go_back,
                onclick: move |_| on_intent.call(QuizIntent::Back),
                "← Previous"
            }
            button {
                class: "btn btn-primary",
                id: "quiz-next",
                r#type: "button",
                disabled: !snapshot.can_advance,
                onclick: move |_| on_intent.call(QuizIntent::Next),
                "{next_label}"
            }
        }
    }
}

#[component]
fn QuizResult(
    kind: QuizKind,
    score: QuizScore,
    remark: &'static str,
    on_complete: EventHandler<QuizScore>,
) -> Element {
    let cta = match kind {
        QuizKind::Pre => "See Recommended Courses →",
        QuizKind::Post => "See Your Summary →",
    };

    rsx! {
        div { class: "quiz-result",
            div { class: "quiz-result__badge", "{score.score}/{score.total}" }
            h2 { "Quiz complete!" }
            p { class: "quiz-result__remark", "{remark}" }
            button {
                class: "btn btn-primary",
                id: "quiz-continue",
                r#type: "button",
                onclick: move |_| on_complete.call(score),
                "{cta}"
            }
        }
    }
}

use dioxus::prelude::*;

use advisor_core::{FlowEvent, QuizKind, SessionState, Step};
use services::ProfileSubmission;

use crate::views::{
    CompletionStage, ProfileStage, QuizStage, RecommendationStage, WelcomeStage,
};

#[cfg(test)]
use std::cell::RefCell;
#[cfg(test)]
use std::rc::Rc;

/// Position of a step along the user journey. Differs from `Step::index`
/// because the post-quiz sits between recommendations and completion.
fn flow_position(step: Step) -> usize {
    match step {
        Step::Welcome => 0,
        Step::ProfileInput => 1,
        Step::PreQuiz => 2,
        Step::Recommendations => 3,
        Step::PostQuiz => 4,
        Step::Completion => 5,
    }
}

/// Root orchestrator of the wizard.
///
/// Owns the single `SessionState` and applies `FlowEvent`s dispatched by
/// the stages; everything below this component is a leaf renderer.
#[component]
pub fn FlowView() -> Element {
    let session = use_signal(SessionState::default);
    let dispatch = use_callback(move |event: FlowEvent| {
        let mut session = session;
        session.write().apply(event);
    });

    #[cfg(test)]
    {
        let mut registered = use_signal(|| false);
        if !registered() {
            registered.set(true);
            if let Some(handles) = try_consume_context::<FlowTestHandles>() {
                handles.register(dispatch, session);
            }
        }
    }

    let session_read = session.read();
    let step = session_read.step();
    let profile_text = session_read.profile_text().to_string();
    let career_goal = session_read.career_goal();
    let analysis = session_read.profile_analysis().cloned();
    let pre_score = session_read.pre_quiz_score();
    let post_score = session_read.post_quiz_score();
    drop(session_read);

    rsx! {
        div { class: "page flow-page",
            if step != Step::Welcome {
                ProgressHeader { step }
            }
            match step {
                Step::Welcome => rsx! {
                    WelcomeStage {
                        on_start: move |()| dispatch.call(FlowEvent::Start),
                    }
                },
                Step::ProfileInput => rsx! {
                    ProfileStage {
                        on_complete: move |submission: ProfileSubmission| {
                            dispatch.call(FlowEvent::ProfileSubmitted {
                                profile_text: submission.profile_text,
                                career_goal: submission.career_goal,
                                analysis: submission.analysis,
                            });
                        },
                    }
                },
                Step::PreQuiz => rsx! {
                    QuizStage {
                        kind: QuizKind::Pre,
                        profile_text,
                        career_goal,
                        on_complete: move |score| dispatch.call(FlowEvent::PreQuizCompleted(score)),
                    }
                },
                Step::Recommendations => rsx! {
                    RecommendationStage {
                        profile_text,
                        career_goal,
                        analysis,
                        pre_score,
                        on_retake: move |()| dispatch.call(FlowEvent::RetakePreQuiz),
                        on_continue: move |()| dispatch.call(FlowEvent::ContinueToPostQuiz),
                    }
                },
                Step::PostQuiz => rsx! {
                    QuizStage {
                        kind: QuizKind::Post,
                        profile_text,
                        career_goal,
                        on_complete: move |score| dispatch.call(FlowEvent::PostQuizCompleted(score)),
                    }
                },
                Step::Completion => rsx! {
                    CompletionStage {
                        pre_score,
                        post_score,
                        on_restart: move |()| dispatch.call(FlowEvent::Restart),
                        on_view_courses: move |()| dispatch.call(FlowEvent::ViewCoursesAgain),
                    }
                },
            }
        }
    }
}

#[component]
fn ProgressHeader(step: Step) -> Element {
    const STAGES: [Step; 5] = [
        Step::ProfileInput,
        Step::PreQuiz,
        Step::Recommendations,
        Step::PostQuiz,
        Step::Completion,
    ];
    let position = flow_position(step);

    rsx! {
        ol { class: "flow-progress",
            for stage in STAGES {
                li {
                    class: if stage == step {
                        "flow-progress__item flow-progress__item--active"
                    } else if flow_position(stage) < position {
                        "flow-progress__item flow-progress__item--done"
                    } else {
                        "flow-progress__item"
                    },
                    "{stage.label()}"
                }
            }
        }
    }
}

#[cfg(test)]
#[derive(Clone, Default)]
pub(crate) struct FlowTestHandles {
    dispatch: Rc<RefCell<Option<Callback<FlowEvent>>>>,
    session: Rc<RefCell<Option<Signal<SessionState>>>>,
}

#[cfg(test)]
impl FlowTestHandles {
    pub(crate) fn register(&self, dispatch: Callback<FlowEvent>, session: Signal<SessionState>) {
        *self.dispatch.borrow_mut() = Some(dispatch);
        *self.session.borrow_mut() = Some(session);
    }

    pub(crate) fn dispatch(&self) -> Callback<FlowEvent> {
        (*self.dispatch.borrow()).expect("flow dispatch registered")
    }

    pub(crate) fn session(&self) -> Signal<SessionState> {
        (*self.session.borrow()).expect("flow session registered")
    }
}

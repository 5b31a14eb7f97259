use dioxus::prelude::*;

use advisor_core::QuizScore;

use crate::vm::map_completion;

/// Final summary: score comparison plus the two exits back into the flow.
#[component]
pub fn CompletionStage(
    pre_score: Option<QuizScore>,
    post_score: Option<QuizScore>,
    on_restart: EventHandler<()>,
    on_view_courses: EventHandler<()>,
) -> Element {
    let vm = map_completion(pre_score, post_score);

    rsx! {
        section { class: "stage completion-stage",
            h2 { "Congratulations! 🎉" }
            p { class: "completion-stage__subtitle",
                "You have completed your learning journey."
            }

            div { class: "completion-stage__scores",
                ScoreCard {
                    heading: "Pre-Quiz",
                    label: vm.pre_label.clone(),
                    percent: vm.pre_percent,
                }
                span { class: "completion-stage__arrow", "→" }
                ScoreCard {
                    heading: "Post-Quiz",
                    label: vm.post_label.clone(),
                    percent: vm.post_percent,
                }
            }

            p { class: "completion-stage__improvement", "{vm.improvement_label}" }

            footer { class: "completion-stage__footer",
                button {
                    class: "btn btn-ghost",
                    id: "completion-view-courses",
                    r#type: "button",
                    onclick: move |_| on_view_courses.call(()),
                    "View Courses Again"
                }
                button {
                    class: "btn btn-primary",
                    id: "completion-restart",
                    r#type: "button",
                    onclick: move |_| on_restart.call(()),
                    "Start Over"
                }
            }
        }
    }
}

#[component]
fn ScoreCard(heading: &'static str, label: String, percent: u32) -> Element {
    rsx! {
        div { class: "score-card",
            h4 { "{heading}" }
            span { class: "score-card__value", "{label}" }
            span { class: "score-card__percent", "{percent}%" }
        }
    }
}

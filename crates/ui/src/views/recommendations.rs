use dioxus::document::eval;
use dioxus::prelude::*;
use serde_json::Value;

use advisor_core::{CareerGoal, QuizScore};

use crate::context::AppContext;
use crate::views::{ViewError, ViewState, view_state_from_resource};
use crate::vm::{CourseCardVm, map_course_cards};

fn performance_remark(percentage: u32) -> &'static str {
    if percentage >= 80 {
        "Excellent! You have a strong foundation for this path."
    } else if percentage >= 60 {
        "Good! Your fundamentals are solid."
    } else {
        "Room to grow: these courses will build your foundation."
    }
}

/// Ranked course list with expandable cards.
///
/// The recommendation service degrades to sample data on failure, so the
/// list is never empty. At most one card is expanded at a time; clicking
/// it again collapses it.
#[component]
pub fn RecommendationStage(
    profile_text: String,
    career_goal: CareerGoal,
    analysis: Option<Value>,
    pre_score: Option<QuizScore>,
    on_retake: EventHandler<()>,
    on_continue: EventHandler<()>,
) -> Element {
    let ctx = use_context::<AppContext>();
    let recommendations = ctx.recommendation_service();

    let mut expanded = use_signal(|| None::<usize>);
    let profile_text_for_fetch = profile_text;
    let analysis_for_fetch = analysis;
    let resource = use_resource(move || {
        let recommendations = recommendations.clone();
        let profile_text = profile_text_for_fetch.clone();
        let analysis = analysis_for_fetch.clone();
        async move {
            let courses = recommendations
                .recommend(&profile_text, career_goal, analysis.as_ref())
                .await;
            Ok::<_, ViewError>(map_course_cards(&courses, career_goal))
        }
    });
    let state = view_state_from_resource(&resource);

    let score_line = pre_score.map(|score| {
        let percentage = score.percentage();
        (
            format!("Pre-quiz result: {}/{} ({percentage}%)", score.score, score.total),
            performance_remark(percentage),
        )
    });

    rsx! {
        section { class: "stage recommendations-stage",
            h2 { "Recommended Courses" }
            p { class: "recommendations-stage__subtitle",
                "Based on your profile and pre-quiz results"
            }

            if let Some((score_label, remark)) = score_line {
                div { class: "performance-band",
                    h3 { "{score_label}" }
                    p { "{remark}" }
                }
            }

            match state {
                ViewState::Idle => rsx! {
                    p { "Idle" }
                },
                ViewState::Loading => rsx! {
                    p { class: "recommendations-stage__loading",
                        "Analyzing your profile and picking courses..."
                    }
                },
                ViewState::Error(err) => rsx! {
                    p { "{err.message()}" }
                },
                ViewState::Ready(cards) => rsx! {
                    h3 { class: "recommendations-stage__count",
                        "{cards.len()} courses match your profile:"
                    }
                    ul { class: "course-list",
                        for card in cards {
                            CourseCard {
                                card: card.clone(),
                                expanded: expanded() == Some(card.rank),
                                on_toggle: move |rank: usize| {
                                    let current = expanded();
                                    expanded.set(if current == Some(rank) { None } else { Some(rank) });
                                },
                            }
                        }
                    }
                },
            }

            footer { class: "recommendations-stage__footer",
                button {
                    class: "btn btn-ghost",
                    id: "recommendations-retake",
                    r#type: "button",
                    onclick: move |_| on_retake.call(()),
                    "↩ Retake Pre-Quiz"
                }
                button {
                    class: "btn btn-primary",
                    id: "recommendations-continue",
                    r#type: "button",
                    onclick: move |_| on_continue.call(()),
                    "Continue to Post-Quiz →"
                }
            }
        }
    }
}

#[component]
fn CourseCard(card: CourseCardVm, expanded: bool, on_toggle: EventHandler<usize>) -> Element {
    let rank = card.rank;
    let launch_href = card.launch_href.clone();
    let card_class = if expanded {
        "course-card course-card--expanded"
    } else {
        "course-card"
    };

    rsx! {
        li { class: "{card_class}", onclick: move |_| on_toggle.call(rank),
            div { class: "course-card__head",
                span { class: "course-card__rank", "{card.rank}" }
                h4 { class: "course-card__title", "{card.title}" }
                if card.top_pick {
                    span { class: "course-card__badge", "Top pick" }
                }
            }
            if let Some(match_label) = card.match_label.as_deref() {
                span { class: "course-card__match", "{match_label}" }
            }
            if let Some(meta) = card.meta_label.as_deref() {
                span { class: "course-card__meta", "{meta}" }
            }
            p { class: "course-card__description", "{card.description}" }
            if expanded {
                div { class: "course-card__detail",
                    h5 { "Why this fits you" }
                    ul { class: "course-card__rationale",
                        for line in card.rationale.clone() {
                            li { "{line}" }
                        }
                    }
                    button {
                        class: "btn btn-primary",
                        r#type: "button",
                        onclick: move |evt| {
                            // Don't collapse the card when launching.
                            evt.stop_propagation();
                            let js = format!("window.open({launch_href:?}, '_blank');");
                            let _ = eval(&js);
                        },
                        "Start Learning"
                    }
                }
            }
        }
    }
}

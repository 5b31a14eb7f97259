use dioxus::prelude::*;

struct Feature {
    title: &'static str,
    description: &'static str,
}

const FEATURES: [Feature; 3] = [
    Feature {
        title: "AI-Powered Analysis",
        description: "Your CV is analyzed automatically to understand your skills and experience.",
    },
    Feature {
        title: "Personalized Learning Path",
        description: "A tailored course roadmap aligned with your career goal.",
    },
    Feature {
        title: "Progress Tracking",
        description: "Pre- and post-quizzes measure how much you improved.",
    },
];

#[component]
pub fn WelcomeStage(on_start: EventHandler<()>) -> Element {
    rsx! {
        section { class: "stage welcome-stage",
            h2 { class: "welcome-stage__title", "Welcome to Course Advisor" }
            p { class: "welcome-stage__subtitle",
                "We read your profile or CV and suggest the courses that fit you best."
            }
            ul { class: "welcome-stage__features",
                for feature in FEATURES {
                    li { class: "welcome-feature",
                        h3 { "{feature.title}" }
                        p { "{feature.description}" }
                    }
                }
            }
            button {
                class: "btn btn-primary welcome-stage__cta",
                id: "welcome-start",
                r#type: "button",
                onclick: move |_| on_start.call(()),
                "Start Your Journey →"
            }
        }
    }
}

use dioxus::prelude::*;
use dioxus_router::{Outlet, Routable};

use crate::views::FlowView;

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
        #[route("/", FlowView)] Home {},
}

#[component]
fn Layout() -> Element {
    rsx! {
        div { class: "app",
            header { class: "masthead",
                h1 { "Course Advisor" }
                p { class: "masthead__tagline",
                    "Upload your profile, test yourself, and get a course path."
                }
            }
            main { class: "content",
                Outlet::<Route> {}
            }
        }
    }
}

//! Application routes. The creation workflow navigates to `ReadStoryPage`
//! with the server-assigned id after a successful submission.

use dioxus::prelude::*;

use crate::dashboard::DashboardPage;
use crate::read_story::ReadStoryPage;

#[derive(Debug, Clone, PartialEq, Routable)]
pub enum Route {
    #[redirect("/", || Route::DashboardPage {})]
    #[route("/dashboard")]
    DashboardPage {},

    #[route("/dashboard/:story_id/ReadStory")]
    ReadStoryPage { story_id: String },

    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = segments.join("/");

    rsx! {
        div {
            style: "min-height: 100vh; display: flex; flex-direction: column; align-items: center; justify-content: center; gap: 0.5rem; background: #f3f4f6; color: #374151;",
            h1 { style: "font-size: 1.5rem; font-weight: 700;", "Page not found" }
            p { style: "font-size: 0.875rem; color: #6b7280;", "/{path}" }
            Link { to: Route::DashboardPage {}, "Back to dashboard" }
        }
    }
}

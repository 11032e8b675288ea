//! Read view for a single story, the navigation target after creation.

use dioxus::prelude::*;
use story_types::Story;

use crate::api::fetch_story;
use crate::route::Route;

#[component]
pub fn ReadStoryPage(story_id: String) -> Element {
    let mut story = use_signal(|| None::<Story>);
    let mut error = use_signal(|| None::<String>);
    let story_id_signal = use_signal(|| story_id.clone());

    use_effect(move || {
        let id = story_id_signal.to_string();
        spawn(async move {
            match fetch_story(&id).await {
                Ok(loaded) => {
                    story.set(Some(loaded));
                }
                Err(e) => {
                    dioxus_logger::tracing::error!("Failed to fetch story {}: {}", id, e);
                    error.set(Some(e));
                }
            }
        });
    });

    rsx! {
        style { {READ_STORY_STYLES} }

        div {
            class: "read-story",
            div {
                class: "read-story-inner",

                Link { class: "back-link", to: Route::DashboardPage {}, "← Back to dashboard" }

                if let Some(message) = error() {
                    div { class: "read-story-error", "Could not load this story: {message}" }
                } else if let Some(loaded) = story() {
                    article {
                        class: "read-story-card",
                        if let Some(url) = loaded.cover_image.as_deref() {
                            img { class: "read-story-cover", src: "{url}", alt: "{loaded.title}" }
                        }
                        h1 { class: "read-story-title", "{loaded.title}" }
                        p { class: "read-story-description", "{loaded.description}" }
                        if loaded.max_pages > 0 {
                            span { class: "read-story-pages", "Up to {loaded.max_pages} pages" }
                        }
                    }
                } else {
                    div { class: "read-story-loading", "Loading story..." }
                }
            }
        }
    }
}

const READ_STORY_STYLES: &str = r#"
.read-story {
    min-height: 100vh;
    background: #f3f4f6;
    padding: 2rem;
}

.read-story-inner {
    max-width: 48rem;
    margin: 0 auto;
    display: flex;
    flex-direction: column;
    gap: 1.5rem;
}

.back-link {
    color: #3b82f6;
    text-decoration: none;
    font-size: 0.875rem;
}

.back-link:hover {
    text-decoration: underline;
}

.read-story-card {
    background: white;
    border-radius: 0.5rem;
    padding: 2rem;
    box-shadow: 0 1px 3px rgba(0, 0, 0, 0.1);
    display: flex;
    flex-direction: column;
    gap: 1rem;
}

.read-story-cover {
    width: 100%;
    border-radius: 0.5rem;
    object-fit: cover;
}

.read-story-title {
    font-size: 1.875rem;
    font-weight: 700;
    color: #1f2937;
}

.read-story-description {
    font-size: 1rem;
    line-height: 1.6;
    color: #4b5563;
}

.read-story-pages {
    font-size: 0.875rem;
    color: #9ca3af;
}

.read-story-loading {
    padding: 3rem 1rem;
    text-align: center;
    color: #6b7280;
}

.read-story-error {
    padding: 0.75rem 1rem;
    border-radius: 0.5rem;
    background: #fef2f2;
    border: 1px solid #fecaca;
    color: #b91c1c;
    font-size: 0.875rem;
}
"#;

//! Story dashboard: the grid of generated stories plus the create-story
//! modal. The page owns one `CreatePanel`; everything the modal and the
//! creation workflow touch flows through it.

pub mod create_modal;
pub mod effects;
pub mod state;
pub mod story_card;

use dioxus::prelude::*;
use story_types::Story;

use crate::dashboard::create_modal::CreateStoryModal;
use crate::dashboard::effects::load_stories;
use crate::dashboard::state::CreatePanel;
use crate::dashboard::story_card::StoryCard;
use crate::session::SessionState;

#[component]
pub fn DashboardPage() -> Element {
    let session = use_context::<Signal<SessionState>>();
    let mut panel = use_signal(CreatePanel::closed);
    let stories = use_signal(Vec::<Story>::new);
    let load_error = use_signal(|| None::<String>);
    let loading = use_signal(|| true);

    use_effect(move || {
        spawn(async move {
            load_stories(stories, load_error, loading).await;
        });
    });

    let toggle_modal = use_callback(move |_| {
        let child_age = session.read().child_age();
        panel.write().toggle(child_age);
    });

    rsx! {
        style { {DASHBOARD_STYLES} }

        div {
            class: "dashboard",
            div {
                class: "dashboard-inner",

                div {
                    class: "dashboard-header",
                    h1 { class: "dashboard-title", "Story Dashboard" }
                    button {
                        class: "create-button",
                        onclick: move |_| toggle_modal.call(()),
                        span { class: "create-button-icon", "+" }
                        "Create New Story"
                    }
                }

                if let Some(err) = load_error() {
                    div { class: "grid-error", "Could not load stories: {err}" }
                }

                if loading() {
                    div { class: "grid-empty", "Loading stories..." }
                } else if stories.read().is_empty() {
                    div { class: "grid-empty", "No stories yet. Create your first one!" }
                } else {
                    div {
                        class: "story-grid",
                        for story in stories.iter() {
                            StoryCard { story: story.clone() }
                        }
                    }
                }
            }

            CreateStoryModal { panel }
        }
    }
}

const DASHBOARD_STYLES: &str = r#"
.dashboard {
    min-height: 100vh;
    background: #f3f4f6;
    padding: 2rem;
}

.dashboard-inner {
    max-width: 80rem;
    margin: 0 auto;
}

.dashboard-header {
    display: flex;
    align-items: center;
    justify-content: space-between;
    margin-bottom: 2rem;
}

.dashboard-title {
    font-size: 1.875rem;
    font-weight: 700;
    color: #1f2937;
}

.create-button {
    display: flex;
    align-items: center;
    gap: 0.5rem;
    padding: 0.5rem 1rem;
    border: none;
    border-radius: 0.5rem;
    background: #3b82f6;
    color: white;
    font-weight: 600;
    cursor: pointer;
}

.create-button:hover {
    background: #2563eb;
}

.create-button-icon {
    font-size: 1.25rem;
    line-height: 1;
}

.grid-error {
    margin-bottom: 1rem;
    padding: 0.75rem 1rem;
    border-radius: 0.5rem;
    background: #fef2f2;
    border: 1px solid #fecaca;
    color: #b91c1c;
    font-size: 0.875rem;
}

.grid-empty {
    padding: 3rem 1rem;
    text-align: center;
    color: #6b7280;
}

.story-grid {
    display: grid;
    grid-template-columns: repeat(1, 1fr);
    gap: 1.5rem;
}

@media (min-width: 640px) {
    .story-grid { grid-template-columns: repeat(2, 1fr); }
}

@media (min-width: 1024px) {
    .story-grid { grid-template-columns: repeat(3, 1fr); }
}

.story-card {
    display: flex;
    flex-direction: column;
    background: white;
    border-radius: 0.5rem;
    overflow: hidden;
    box-shadow: 0 1px 3px rgba(0, 0, 0, 0.1);
    text-decoration: none;
    color: inherit;
    transition: box-shadow 0.2s;
}

.story-card:hover {
    box-shadow: 0 4px 12px rgba(0, 0, 0, 0.15);
}

.story-card-cover {
    width: 100%;
    height: 10rem;
    object-fit: cover;
}

.story-card-body {
    display: flex;
    flex-direction: column;
    gap: 0.5rem;
    padding: 1rem;
}

.story-card-title {
    font-size: 1.125rem;
    font-weight: 600;
    color: #1f2937;
}

.story-card-description {
    font-size: 0.875rem;
    color: #4b5563;
}

.story-card-date {
    font-size: 0.75rem;
    color: #9ca3af;
}
"#;

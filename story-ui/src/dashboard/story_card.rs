//! Presentational card for one generated story.

use chrono::{DateTime, Utc};
use dioxus::prelude::*;
use story_types::Story;

use crate::route::Route;

#[component]
pub fn StoryCard(story: Story) -> Element {
    let detail = Route::ReadStoryPage {
        story_id: story.id.clone(),
    };

    rsx! {
        Link {
            class: "story-card",
            to: detail,

            if let Some(url) = story.cover_image.as_deref() {
                img {
                    class: "story-card-cover",
                    src: "{url}",
                    alt: "{story.title}",
                }
            }

            div {
                class: "story-card-body",
                h3 { class: "story-card-title", "{story.title}" }
                p { class: "story-card-description", "{story.description}" }
                if let Some(created) = story.created_at {
                    span { class: "story-card-date", {format_created(created)} }
                }
            }
        }
    }
}

fn format_created(timestamp: DateTime<Utc>) -> String {
    timestamp.format("%b %-d, %Y").to_string()
}

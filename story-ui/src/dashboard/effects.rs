//! Async flows for the dashboard page.

use dioxus::prelude::*;
use dioxus::router::Navigator;
use story_types::Story;

use crate::api::{self, CreateStoryRequest};
use crate::dashboard::state::CreatePanel;
use crate::route::Route;

/// Load the story grid once on page mount.
pub async fn load_stories(
    mut stories: Signal<Vec<Story>>,
    mut load_error: Signal<Option<String>>,
    mut loading: Signal<bool>,
) {
    loading.set(true);

    match api::fetch_stories().await {
        Ok(list) => {
            stories.set(list);
            load_error.set(None);
        }
        Err(e) => {
            dioxus_logger::tracing::error!("Failed to fetch stories: {}", e);
            load_error.set(Some(e));
        }
    }

    loading.set(false);
}

/// Submit the current draft. At most one attempt is in flight; the snapshot
/// taken here is what goes on the wire, later edits cannot touch it.
///
/// On 201 the app navigates to the new story's read view and then closes
/// the modal, in that order. Anything else leaves the modal open with the
/// draft intact so the user can correct and retry.
pub async fn submit_draft(mut panel: Signal<CreatePanel>, navigator: Navigator) {
    let Some((draft, epoch)) = panel.write().begin_submit() else {
        return;
    };

    let request = CreateStoryRequest {
        story_title: draft.title,
        story_description: draft.description,
        include_image: draft.include_image,
        max_pages: draft.max_pages,
        child_age: draft.child_age,
    };

    let outcome = api::create_story(&request).await;

    if !panel.read().accepts(epoch) {
        // The modal closed while the request was in flight; drop the result.
        return;
    }

    match outcome {
        Ok(story) => {
            panel.write().succeed();
            navigator.push(Route::ReadStoryPage { story_id: story.id });
            panel.write().close();
        }
        Err(e) => {
            dioxus_logger::tracing::error!("Error creating story: {}", e);
            panel.write().fail(e.to_string());
        }
    }
}

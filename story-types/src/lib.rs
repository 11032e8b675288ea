//! Wire types shared with the story backend
//!
//! The backend is a TypeScript service; every type here carries its exact
//! JSON field names and is exported with ts-rs so both sides agree on the
//! shape.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// A generated story as the backend stores and returns it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Story {
    /// Server-assigned identifier. Opaque to the client.
    #[serde(rename = "_id")]
    pub id: String,

    #[serde(rename = "storyTitle")]
    pub title: String,

    #[serde(rename = "storyDescription", default)]
    pub description: String,

    /// Cover illustration URL, present when the story was generated with
    /// images enabled.
    #[serde(rename = "coverImage", default, skip_serializing_if = "Option::is_none")]
    pub cover_image: Option<String>,

    #[serde(rename = "maxPages", default)]
    pub max_pages: u32,

    #[serde(rename = "createdAt", default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

/// The signed-in user's profile. Read-only on the client; the dashboard
/// consumes `child_age` once per draft initialization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct UserProfile {
    #[serde(rename = "_id")]
    pub id: String,

    pub name: String,

    #[serde(rename = "childAge")]
    pub child_age: u8,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn story_reads_backend_field_names() {
        let story: Story = serde_json::from_str(
            r#"{
                "_id": "665f1a2b3c4d5e6f70819202",
                "storyTitle": "The Lighthouse Fox",
                "storyDescription": "A fox learns to keep the light burning.",
                "maxPages": 8,
                "createdAt": "2024-06-04T12:30:00Z"
            }"#,
        )
        .expect("valid story body");

        assert_eq!(story.id, "665f1a2b3c4d5e6f70819202");
        assert_eq!(story.title, "The Lighthouse Fox");
        assert_eq!(story.max_pages, 8);
        assert!(story.cover_image.is_none());
    }

    #[test]
    fn story_tolerates_missing_optional_fields() {
        let story: Story =
            serde_json::from_str(r#"{"_id": "abc", "storyTitle": "Untitled"}"#).expect("minimal body");

        assert_eq!(story.description, "");
        assert_eq!(story.max_pages, 0);
        assert!(story.created_at.is_none());
    }

    #[test]
    fn profile_reads_child_age() {
        let profile: UserProfile =
            serde_json::from_str(r#"{"_id": "u1", "name": "Sam", "childAge": 7}"#)
                .expect("valid profile body");

        assert_eq!(profile.child_age, 7);
    }
}

use gloo_net::http::Request;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::OnceLock;
use story_types::{Story, UserProfile};
use web_sys::RequestCredentials;

/// Get the backend base URL based on the current environment
/// - `STORYWEAVE_BACKEND_URL` set at build time wins
/// - In development (localhost): use http://localhost:8000
/// - In production: use same origin (backend serves the static bundle)
fn resolve_api_base() -> String {
    if let Some(base) = option_env!("STORYWEAVE_BACKEND_URL") {
        return base.trim_end_matches('/').to_string();
    }

    let hostname = web_sys::window()
        .and_then(|w| w.location().hostname().ok())
        .unwrap_or_default();

    if hostname == "localhost" || hostname == "127.0.0.1" {
        "http://localhost:8000".to_string()
    } else {
        "".to_string()
    }
}

/// Lazy-static equivalent for WASM - computed at first use
static API_BASE_CACHE: OnceLock<String> = OnceLock::new();

/// Get the cached backend base URL
pub fn api_base() -> &'static str {
    API_BASE_CACHE.get_or_init(resolve_api_base).as_str()
}

// ============================================================================
// Story creation
// ============================================================================

/// Body of `POST /api/story/create`, mapped field-for-field from the draft.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateStoryRequest {
    pub story_title: String,
    pub story_description: String,
    pub include_image: bool,
    pub max_pages: u32,
    pub child_age: u8,
}

#[derive(Debug, Deserialize)]
struct CreateStoryResponse {
    story: Story,
}

/// Why a creation attempt produced no story.
#[derive(Debug, Clone, PartialEq)]
pub enum CreateStoryError {
    /// The request never completed.
    Transport(String),
    /// The service answered with anything other than 201 Created.
    UnexpectedStatus(u16),
    /// A 201 arrived but the body did not carry a story object.
    Parse(String),
}

impl fmt::Display for CreateStoryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CreateStoryError::Transport(e) => write!(f, "request failed: {e}"),
            CreateStoryError::UnexpectedStatus(status) => {
                write!(f, "story service returned status {status}")
            }
            CreateStoryError::Parse(e) => write!(f, "failed to parse story response: {e}"),
        }
    }
}

/// Map a raw creation response to an outcome. Success is exactly 201; any
/// other status, 2xx included, is a rejection.
pub fn interpret_create_response(status: u16, body: &str) -> Result<Story, CreateStoryError> {
    if status != 201 {
        return Err(CreateStoryError::UnexpectedStatus(status));
    }

    serde_json::from_str::<CreateStoryResponse>(body)
        .map(|data| data.story)
        .map_err(|e| CreateStoryError::Parse(e.to_string()))
}

/// Issue the single creation POST with the session cookie attached.
pub async fn create_story(request: &CreateStoryRequest) -> Result<Story, CreateStoryError> {
    let url = format!("{}/api/story/create", api_base());

    let response = Request::post(&url)
        .credentials(RequestCredentials::Include)
        .json(request)
        .map_err(|e| CreateStoryError::Transport(format!("failed to serialize request: {e}")))?
        .send()
        .await
        .map_err(|e| CreateStoryError::Transport(format!("request failed: {e}")))?;

    let status = response.status();
    let body = response
        .text()
        .await
        .map_err(|e| CreateStoryError::Transport(format!("failed to read response: {e}")))?;

    interpret_create_response(status, &body)
}

// ============================================================================
// Read-only fetches
// ============================================================================

#[derive(Debug, Deserialize)]
struct GetStoriesResponse {
    stories: Vec<Story>,
}

#[derive(Debug, Deserialize)]
struct GetStoryResponse {
    story: Story,
}

#[derive(Debug, Deserialize)]
struct MeResponse {
    user: UserProfile,
}

pub async fn fetch_stories() -> Result<Vec<Story>, String> {
    let url = format!("{}/api/story/all", api_base());

    let response = Request::get(&url)
        .credentials(RequestCredentials::Include)
        .send()
        .await
        .map_err(|e| format!("Request failed: {e}"))?;

    if !response.ok() {
        return Err(format!("HTTP error: {}", response.status()));
    }

    let data: GetStoriesResponse = response
        .json()
        .await
        .map_err(|e| format!("Failed to parse JSON: {e}"))?;

    Ok(data.stories)
}

pub async fn fetch_story(story_id: &str) -> Result<Story, String> {
    let url = format!("{}/api/story/{}", api_base(), story_id);

    let response = Request::get(&url)
        .credentials(RequestCredentials::Include)
        .send()
        .await
        .map_err(|e| format!("Request failed: {e}"))?;

    if !response.ok() {
        return Err(format!("HTTP error: {}", response.status()));
    }

    let data: GetStoryResponse = response
        .json()
        .await
        .map_err(|e| format!("Failed to parse JSON: {e}"))?;

    Ok(data.story)
}

/// Probe the profile endpoint. A non-2xx answer means no session.
pub async fn fetch_profile() -> Result<UserProfile, String> {
    let url = format!("{}/api/user/me", api_base());

    let response = Request::get(&url)
        .credentials(RequestCredentials::Include)
        .send()
        .await
        .map_err(|e| format!("Request failed: {e}"))?;

    if !response.ok() {
        return Err(format!("HTTP error: {}", response.status()));
    }

    let data: MeResponse = response
        .json()
        .await
        .map_err(|e| format!("Failed to parse JSON: {e}"))?;

    Ok(data.user)
}

#[cfg(test)]
mod tests {
    use super::*;

    const CREATED_BODY: &str =
        r#"{"story":{"_id":"665f1a2b3c4d5e6f70819202","storyTitle":"The Lighthouse Fox"}}"#;

    #[test]
    fn created_status_with_story_body_yields_id() {
        let story = interpret_create_response(201, CREATED_BODY).expect("201 with story body");
        assert_eq!(story.id, "665f1a2b3c4d5e6f70819202");
    }

    #[test]
    fn other_success_statuses_are_rejected() {
        // The contract is 201 exactly; a 200 with a perfectly good body
        // still counts as a rejection.
        assert_eq!(
            interpret_create_response(200, CREATED_BODY),
            Err(CreateStoryError::UnexpectedStatus(200))
        );
        assert_eq!(
            interpret_create_response(204, ""),
            Err(CreateStoryError::UnexpectedStatus(204))
        );
    }

    #[test]
    fn client_and_server_errors_are_rejected() {
        assert_eq!(
            interpret_create_response(400, r#"{"error":"maxPages required"}"#),
            Err(CreateStoryError::UnexpectedStatus(400))
        );
        assert_eq!(
            interpret_create_response(500, ""),
            Err(CreateStoryError::UnexpectedStatus(500))
        );
    }

    #[test]
    fn malformed_created_body_is_a_parse_error() {
        assert!(matches!(
            interpret_create_response(201, "{}"),
            Err(CreateStoryError::Parse(_))
        ));
        assert!(matches!(
            interpret_create_response(201, "not json"),
            Err(CreateStoryError::Parse(_))
        ));
    }

    #[test]
    fn request_body_uses_backend_field_names() {
        let request = CreateStoryRequest {
            story_title: "The Lighthouse Fox".to_string(),
            story_description: "A fox learns to keep the light burning.".to_string(),
            include_image: true,
            max_pages: 8,
            child_age: 7,
        };

        let body = serde_json::to_value(&request).expect("serializable request");
        let object = body.as_object().expect("json object");

        for key in [
            "storyTitle",
            "storyDescription",
            "includeImage",
            "maxPages",
            "childAge",
        ] {
            assert!(object.contains_key(key), "missing wire field {key}");
        }
        assert_eq!(object.len(), 5);
    }
}

//! Session context.
//!
//! The current user's profile is owned by the backend session; this module
//! probes it once at startup and exposes it read-only through a context
//! signal. The dashboard reads `child_age` from it exactly once per draft
//! initialization, so a profile change never rewrites an open draft.

use dioxus::prelude::*;
use story_types::UserProfile;

use crate::api::fetch_profile;

/// Age used to seed a draft when no profile is available.
pub const DEFAULT_CHILD_AGE: u8 = 6;

#[derive(Clone, Debug, PartialEq, Default)]
pub enum SessionState {
    /// Haven't checked the profile endpoint yet.
    #[default]
    Loading,
    /// Session cookie was accepted.
    SignedIn(UserProfile),
    /// Confirmed no session.
    SignedOut,
}

impl SessionState {
    pub fn is_signed_in(&self) -> bool {
        matches!(self, SessionState::SignedIn(_))
    }

    /// Child age to seed a new draft with, read at call time.
    pub fn child_age(&self) -> u8 {
        match self {
            SessionState::SignedIn(profile) => profile.child_age,
            _ => DEFAULT_CHILD_AGE,
        }
    }
}

/// Probe the profile endpoint once and update the context signal.
/// Called at startup from `App` so the dashboard knows the session without
/// blocking render.
pub async fn probe_session(mut session: Signal<SessionState>) {
    match fetch_profile().await {
        Ok(profile) => {
            session.set(SessionState::SignedIn(profile));
        }
        Err(e) => {
            dioxus_logger::tracing::warn!("No active session: {}", e);
            session.set(SessionState::SignedOut);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn child_age_comes_from_the_profile() {
        let session = SessionState::SignedIn(UserProfile {
            id: "u1".to_string(),
            name: "Sam".to_string(),
            child_age: 9,
        });

        assert_eq!(session.child_age(), 9);
    }

    #[test]
    fn child_age_falls_back_without_a_session() {
        assert_eq!(SessionState::Loading.child_age(), DEFAULT_CHILD_AGE);
        assert_eq!(SessionState::SignedOut.child_age(), DEFAULT_CHILD_AGE);
    }
}

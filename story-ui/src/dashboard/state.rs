//! Page state for the dashboard: the draft being edited, the modal that
//! hosts it, and the submission guard. Everything here is pure so the
//! transitions can be tested without a browser.

/// In-progress story creation request. Edits replace the whole draft; an
/// in-flight submission holds its own clone, so nothing typed after submit
/// can leak into a request already on the wire.
#[derive(Debug, Clone, PartialEq)]
pub struct StoryDraft {
    pub title: String,
    pub description: String,
    pub include_image: bool,
    /// 0 means the user has not chosen a page limit yet.
    pub max_pages: u32,
    /// Copied from the session profile when the modal opens; never re-synced.
    pub child_age: u8,
}

impl StoryDraft {
    pub fn new(child_age: u8) -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            include_image: false,
            max_pages: 0,
            child_age,
        }
    }

    /// Apply one field edit, producing the next draft.
    pub fn apply(self, edit: DraftEdit) -> Self {
        match edit {
            DraftEdit::Title(title) => Self { title, ..self },
            DraftEdit::Description(description) => Self {
                description,
                ..self
            },
            DraftEdit::IncludeImage(include_image) => Self {
                include_image,
                ..self
            },
            DraftEdit::MaxPages(max_pages) => Self { max_pages, ..self },
        }
    }
}

/// One form-field change.
#[derive(Debug, Clone, PartialEq)]
pub enum DraftEdit {
    Title(String),
    Description(String),
    IncludeImage(bool),
    MaxPages(u32),
}

/// Where the current submission attempt stands.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum SubmitState {
    #[default]
    Idle,
    Submitting,
    Succeeded,
    Failed(String),
}

/// Validate the max-pages field at the form boundary. The input keeps
/// whatever the user typed; the draft only ever holds a validated value.
pub fn parse_max_pages(raw: &str) -> Result<u32, &'static str> {
    match raw.trim().parse::<i64>() {
        Ok(n) if n >= 1 => u32::try_from(n).map_err(|_| "page limit is too large"),
        Ok(_) => Err("page limit must be at least 1"),
        Err(_) => Err("page limit must be a number"),
    }
}

/// State machine for the create-story modal. One panel per dashboard page.
///
/// Closed -> Open (fresh draft) -> Submitting -> Succeeded -> Closed
///                                            -> Failed    -> Open (draft kept)
///
/// The epoch fences off submissions that resolve after the modal closed:
/// closing bumps it, and a resolution tagged with an older epoch is dropped.
#[derive(Debug, Clone, PartialEq)]
pub struct CreatePanel {
    pub open: bool,
    pub draft: StoryDraft,
    pub submit: SubmitState,
    epoch: u64,
}

impl CreatePanel {
    pub fn closed() -> Self {
        Self {
            open: false,
            draft: StoryDraft::new(0),
            submit: SubmitState::Idle,
            epoch: 0,
        }
    }

    /// Open with a fresh draft seeded from the session's child age. No-op
    /// when already open, so a failed attempt keeps its draft.
    pub fn open(&mut self, child_age: u8) {
        if self.open {
            return;
        }
        self.open = true;
        self.draft = StoryDraft::new(child_age);
        self.submit = SubmitState::Idle;
    }

    /// Close and abandon the draft. Clears any submission error and
    /// invalidates whatever is still in flight. No-op when already closed.
    pub fn close(&mut self) {
        if !self.open {
            return;
        }
        self.open = false;
        self.submit = SubmitState::Idle;
        self.epoch += 1;
    }

    pub fn toggle(&mut self, child_age: u8) {
        if self.open {
            self.close();
        } else {
            self.open(child_age);
        }
    }

    /// Replace the draft with one field changed.
    pub fn edit(&mut self, edit: DraftEdit) {
        self.draft = self.draft.clone().apply(edit);
    }

    /// Snapshot the draft for submission. Returns `None` while an attempt
    /// is already in flight.
    pub fn begin_submit(&mut self) -> Option<(StoryDraft, u64)> {
        if self.submit == SubmitState::Submitting {
            return None;
        }
        self.submit = SubmitState::Submitting;
        Some((self.draft.clone(), self.epoch))
    }

    /// True when a resolution tagged with `epoch` is still current.
    pub fn accepts(&self, epoch: u64) -> bool {
        self.epoch == epoch
    }

    pub fn succeed(&mut self) {
        self.submit = SubmitState::Succeeded;
    }

    /// Record a failed attempt. The modal stays open and the draft is kept
    /// for correction.
    pub fn fail(&mut self, message: String) {
        self.submit = SubmitState::Failed(message);
    }

    pub fn submitting(&self) -> bool {
        matches!(self.submit, SubmitState::Submitting)
    }

    pub fn failure(&self) -> Option<&str> {
        match &self.submit {
            SubmitState::Failed(message) => Some(message),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn open_panel(child_age: u8) -> CreatePanel {
        let mut panel = CreatePanel::closed();
        panel.open(child_age);
        panel
    }

    #[test]
    fn each_edit_replaces_only_its_field() {
        let mut panel = open_panel(7);
        panel.edit(DraftEdit::Title("The Lighthouse Fox".to_string()));
        panel.edit(DraftEdit::Description("A fox and a lamp.".to_string()));
        panel.edit(DraftEdit::IncludeImage(true));
        panel.edit(DraftEdit::MaxPages(8));

        assert_eq!(panel.draft.title, "The Lighthouse Fox");
        assert_eq!(panel.draft.description, "A fox and a lamp.");
        assert!(panel.draft.include_image);
        assert_eq!(panel.draft.max_pages, 8);
        assert_eq!(panel.draft.child_age, 7);
    }

    #[test]
    fn last_write_wins_per_field() {
        let mut panel = open_panel(7);
        panel.edit(DraftEdit::Title("first".to_string()));
        panel.edit(DraftEdit::MaxPages(3));
        panel.edit(DraftEdit::Title("second".to_string()));
        panel.edit(DraftEdit::MaxPages(12));

        assert_eq!(panel.draft.title, "second");
        assert_eq!(panel.draft.max_pages, 12);
        assert_eq!(panel.draft.description, "");
    }

    #[test]
    fn opening_seeds_child_age_at_that_moment() {
        let mut panel = CreatePanel::closed();
        panel.open(6);
        assert_eq!(panel.draft.child_age, 6);

        // A later session change only shows up on the next open.
        panel.close();
        panel.open(9);
        assert_eq!(panel.draft.child_age, 9);
    }

    #[test]
    fn reopening_after_cancel_gives_a_fresh_draft() {
        let mut panel = open_panel(7);
        panel.edit(DraftEdit::Title("abandoned".to_string()));
        panel.edit(DraftEdit::IncludeImage(true));

        panel.toggle(7);
        panel.toggle(7);

        assert_eq!(panel.draft, StoryDraft::new(7));
    }

    #[test]
    fn toggle_twice_restores_visibility() {
        let mut panel = CreatePanel::closed();
        panel.toggle(7);
        panel.toggle(7);
        assert!(!panel.open);

        panel.open(7);
        panel.toggle(7);
        panel.toggle(7);
        assert!(panel.open);
    }

    #[test]
    fn closing_when_closed_is_a_no_op() {
        let mut panel = CreatePanel::closed();
        let before = panel.clone();
        panel.close();
        assert_eq!(panel, before);
    }

    #[test]
    fn duplicate_submissions_are_rejected() {
        let mut panel = open_panel(7);
        assert!(panel.begin_submit().is_some());
        assert!(panel.begin_submit().is_none());
        assert!(panel.submitting());
    }

    #[test]
    fn failure_keeps_the_modal_open_and_the_draft_intact() {
        let mut panel = open_panel(7);
        panel.edit(DraftEdit::Title("keep me".to_string()));

        let (snapshot, _) = panel.begin_submit().expect("first attempt");
        panel.fail("story service returned status 500".to_string());

        assert!(panel.open);
        assert_eq!(panel.draft, snapshot);
        assert_eq!(panel.failure(), Some("story service returned status 500"));

        // Retry is allowed once the previous attempt settled.
        assert!(panel.begin_submit().is_some());
    }

    #[test]
    fn closing_clears_a_stale_error() {
        let mut panel = open_panel(7);
        panel.begin_submit();
        panel.fail("request failed: timeout".to_string());

        panel.close();
        panel.open(7);

        assert_eq!(panel.submit, SubmitState::Idle);
    }

    #[test]
    fn closing_invalidates_in_flight_submissions() {
        let mut panel = open_panel(7);
        let (_, epoch) = panel.begin_submit().expect("attempt starts");

        panel.close();

        assert!(!panel.accepts(epoch));

        // The next attempt from a reopened modal is current again.
        panel.open(7);
        let (_, next_epoch) = panel.begin_submit().expect("fresh attempt");
        assert!(panel.accepts(next_epoch));
    }

    #[test]
    fn submission_consumes_a_snapshot() {
        let mut panel = open_panel(7);
        panel.edit(DraftEdit::Title("submitted".to_string()));

        let (snapshot, _) = panel.begin_submit().expect("attempt starts");
        panel.edit(DraftEdit::Title("typed after submit".to_string()));

        assert_eq!(snapshot.title, "submitted");
        assert_eq!(panel.draft.title, "typed after submit");
    }

    #[test]
    fn max_pages_accepts_positive_integers() {
        assert_eq!(parse_max_pages("1"), Ok(1));
        assert_eq!(parse_max_pages(" 24 "), Ok(24));
    }

    #[test]
    fn max_pages_rejects_zero_and_negatives() {
        assert!(parse_max_pages("0").is_err());
        assert!(parse_max_pages("-3").is_err());
    }

    #[test]
    fn max_pages_rejects_non_numbers() {
        assert!(parse_max_pages("ten").is_err());
        assert!(parse_max_pages("3.5").is_err());
        assert!(parse_max_pages("").is_err());
    }
}

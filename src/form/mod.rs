// SPDX-License-Identifier: MPL-2.0
//! Form state for the media upload form.
//!
//! All of the form's mutually exclusive, resettable state lives in one
//! [`FormState`] value with one transition function per user action, so the
//! "selecting a category clears the previous result" invariant is enforced in
//! a single place. Async completions carry the [`Generation`] they were
//! started under; a completion whose generation no longer matches is stale
//! (the user switched category, reset, or restarted the operation) and is
//! discarded instead of repopulating state.

pub mod preview;
pub mod text_upload;

use preview::{ImagePreview, PreviewError};
use text_upload::UploadError;

/// Media category the user can pick in the selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Text,
    Image,
    Audio,
    ThreeD,
}

impl Category {
    /// All categories, in the order the selector lists them.
    pub const ALL: [Category; 4] = [
        Category::Text,
        Category::Image,
        Category::Audio,
        Category::ThreeD,
    ];

    /// Fluent key for the radio label.
    pub fn label_key(self) -> &'static str {
        match self {
            Category::Text => "category-text",
            Category::Image => "category-image",
            Category::Audio => "category-audio",
            Category::ThreeD => "category-3d",
        }
    }

    /// Fluent key for the panel heading shown once the category is active.
    pub fn panel_title_key(self) -> &'static str {
        match self {
            Category::Text => "text-panel-title",
            Category::Image => "image-panel-title",
            Category::Audio => "audio-panel-title",
            Category::ThreeD => "model-panel-title",
        }
    }
}

/// Identifies which in-flight async operation may still write its result.
pub type Generation = u64;

/// Kind of operation currently awaiting completion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pending {
    /// Text file posted to the upload endpoint.
    Upload,
    /// Local image read and decode.
    Preview,
}

/// The single result slot. At most one non-empty variant is populated.
#[derive(Debug, Clone, Default)]
pub enum Outcome {
    #[default]
    Empty,
    /// Decoded text content returned by the upload endpoint.
    Text(String),
    /// Locally produced image preview.
    Image(ImagePreview),
    /// User-visible failure message.
    Failed(String),
}

impl Outcome {
    /// Maps an upload completion into the result slot, composing the
    /// user-facing message the text flow has always shown.
    pub fn from_upload(result: Result<String, UploadError>) -> Self {
        match result {
            Ok(content) => Outcome::Text(content),
            Err(err) => Outcome::Failed(format!("Error uploading file: {err}")),
        }
    }

    /// Maps a preview completion into the result slot.
    pub fn from_preview(result: Result<ImagePreview, PreviewError>) -> Self {
        match result {
            Ok(preview) => Outcome::Image(preview),
            Err(err) => Outcome::Failed(format!("Error previewing image: {err}")),
        }
    }
}

/// Root form state: active category, result slot, and in-flight bookkeeping.
#[derive(Debug, Default)]
pub struct FormState {
    category: Option<Category>,
    outcome: Outcome,
    pending: Option<Pending>,
    generation: Generation,
}

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn category(&self) -> Option<Category> {
        self.category
    }

    pub fn outcome(&self) -> &Outcome {
        &self.outcome
    }

    pub fn pending(&self) -> Option<Pending> {
        self.pending
    }

    /// True once a result is available to show. Derived from the result
    /// slot, so it can never disagree with it.
    pub fn uploaded(&self) -> bool {
        matches!(self.outcome, Outcome::Text(_) | Outcome::Image(_))
    }

    /// Activates a category, clearing everything derived from the previous
    /// one and invalidating any in-flight operation.
    pub fn select_category(&mut self, category: Category) {
        self.category = Some(category);
        self.invalidate();
    }

    /// Returns to the initial selector-less view. Idempotent.
    pub fn reset(&mut self) {
        self.category = None;
        self.invalidate();
    }

    /// Marks an async operation as started and returns the generation its
    /// completion must present. Starting a new operation invalidates the
    /// previous one.
    pub fn begin(&mut self, operation: Pending) -> Generation {
        self.generation += 1;
        self.pending = Some(operation);
        self.outcome = Outcome::Empty;
        self.generation
    }

    /// Applies a completed operation's outcome. Returns false (leaving state
    /// untouched) when the operation was invalidated by a later category
    /// change, reset, or restart.
    pub fn complete(&mut self, generation: Generation, outcome: Outcome) -> bool {
        if generation != self.generation || self.pending.is_none() {
            return false;
        }
        self.pending = None;
        self.outcome = outcome;
        true
    }

    fn invalidate(&mut self) {
        self.generation += 1;
        self.pending = None;
        self.outcome = Outcome::Empty;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn completed_text_state() -> FormState {
        let mut form = FormState::new();
        form.select_category(Category::Text);
        let generation = form.begin(Pending::Upload);
        assert!(form.complete(generation, Outcome::Text("hello".into())));
        form
    }

    #[test]
    fn selecting_any_category_clears_prior_outcome() {
        for category in Category::ALL {
            let mut form = completed_text_state();
            assert!(form.uploaded());

            form.select_category(category);

            assert_eq!(form.category(), Some(category));
            assert!(matches!(form.outcome(), Outcome::Empty));
            assert!(!form.uploaded());
            assert!(form.pending().is_none());
        }
    }

    #[test]
    fn reset_returns_to_initial_view_and_is_idempotent() {
        let mut form = completed_text_state();

        form.reset();
        assert!(form.category().is_none());
        assert!(matches!(form.outcome(), Outcome::Empty));
        assert!(!form.uploaded());

        let generation_after_first = form.generation;
        form.reset();
        assert!(form.category().is_none());
        assert!(matches!(form.outcome(), Outcome::Empty));
        // A second reset only advances the generation; the visible state is
        // the same initial view.
        assert_eq!(form.generation, generation_after_first + 1);
    }

    #[test]
    fn completion_with_current_generation_populates_outcome() {
        let mut form = FormState::new();
        form.select_category(Category::Text);
        let generation = form.begin(Pending::Upload);

        assert!(form.complete(generation, Outcome::Text("hello".into())));

        assert!(matches!(form.outcome(), Outcome::Text(content) if content == "hello"));
        assert!(form.uploaded());
        assert!(form.pending().is_none());
    }

    #[test]
    fn completion_after_category_switch_is_discarded() {
        let mut form = FormState::new();
        form.select_category(Category::Text);
        let generation = form.begin(Pending::Upload);

        // The user switches category while the upload is still in flight.
        form.select_category(Category::Image);

        assert!(!form.complete(generation, Outcome::Text("late".into())));
        assert_eq!(form.category(), Some(Category::Image));
        assert!(matches!(form.outcome(), Outcome::Empty));
        assert!(!form.uploaded());
    }

    #[test]
    fn completion_after_reset_is_discarded() {
        let mut form = FormState::new();
        form.select_category(Category::Image);
        let generation = form.begin(Pending::Preview);

        form.reset();

        assert!(!form.complete(generation, Outcome::Failed("late failure".into())));
        assert!(form.category().is_none());
        assert!(matches!(form.outcome(), Outcome::Empty));
    }

    #[test]
    fn restarting_an_operation_invalidates_the_previous_one() {
        let mut form = FormState::new();
        form.select_category(Category::Text);
        let first = form.begin(Pending::Upload);
        let second = form.begin(Pending::Upload);

        assert!(!form.complete(first, Outcome::Text("stale".into())));
        assert!(form.complete(second, Outcome::Text("fresh".into())));
        assert!(matches!(form.outcome(), Outcome::Text(content) if content == "fresh"));
    }

    #[test]
    fn failed_outcome_keeps_uploaded_false() {
        let mut form = FormState::new();
        form.select_category(Category::Text);
        let generation = form.begin(Pending::Upload);

        assert!(form.complete(
            generation,
            Outcome::from_upload(Err(UploadError::BadStatus)),
        ));

        assert!(!form.uploaded());
        assert!(matches!(
            form.outcome(),
            Outcome::Failed(message)
                if message == "Error uploading file: Network response was not ok"
        ));
    }

    #[test]
    fn upload_transport_failure_message_carries_description() {
        let outcome =
            Outcome::from_upload(Err(UploadError::Transport("connection refused".into())));
        assert!(matches!(
            outcome,
            Outcome::Failed(message)
                if message == "Error uploading file: connection refused"
        ));
    }

    #[test]
    fn preview_failure_message_carries_description() {
        let outcome =
            Outcome::from_preview(Err(PreviewError::Decode("truncated image".into())));
        assert!(matches!(
            outcome,
            Outcome::Failed(message)
                if message == "Error previewing image: Decoding failed: truncated image"
        ));
    }
}

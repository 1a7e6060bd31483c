//! Manage-page view models for course and author forms.
//!
//! # Responsibility
//! - Decide how an edit page opens: load first, blank form, prefilled form
//!   or not-found redirect.
//! - Gate submission on field validation and hand valid drafts to the
//!   action creators.
//!
//! # Invariants
//! - Invalid forms never reach the API.
//! - Lookups report not-found as a value, never as an error.

pub mod author_editor;
pub mod course_editor;

use crate::model::validation::FormErrors;

pub use author_editor::{AuthorEditor, AuthorField};
pub use course_editor::{CourseEditor, CourseField};

/// How a manage page should start.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditorEntry<D> {
    /// A key was given before the collection was loaded; load and open again.
    NeedsLoad,
    /// No key given; start from a blank draft.
    New(D),
    /// Key found; start from the stored record.
    Edit(D),
    /// Key given but absent from the store.
    NotFound,
}

/// Result of submitting a form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome<T> {
    Invalid(FormErrors),
    Saved(T),
}

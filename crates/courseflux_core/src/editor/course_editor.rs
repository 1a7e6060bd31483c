//! Course manage-page view model.

use crate::actions::{ActionResult, CourseActions};
use crate::api::RecordApi;
use crate::editor::{EditorEntry, SubmitOutcome};
use crate::model::author::AuthorId;
use crate::model::course::{Course, CourseDraft};
use crate::model::validation::FormErrors;
use crate::store::CourseStore;
use log::info;

/// Editable course form fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CourseField {
    Title,
    AuthorId,
    Category,
}

/// Form state for creating or editing one course.
#[derive(Debug, Clone, Default)]
pub struct CourseEditor {
    draft: CourseDraft,
    errors: FormErrors,
}

impl CourseEditor {
    /// Resolves the entry state for `/course/:slug` (or `/course` when `slug`
    /// is `None`).
    ///
    /// A slug lookup waits for the first load; a loaded but empty store
    /// resolves to `NotFound`.
    pub fn open(store: &CourseStore, slug: Option<&str>) -> EditorEntry<CourseDraft> {
        match slug {
            None => EditorEntry::New(CourseDraft::default()),
            Some(_) if !store.is_loaded() && store.is_empty() => EditorEntry::NeedsLoad,
            Some(slug) => match store.find_by_slug(slug) {
                Some(course) => EditorEntry::Edit(course.to_draft()),
                None => {
                    info!(
                        "event=editor_open module=editor status=not_found kind=course slug={slug}"
                    );
                    EditorEntry::NotFound
                }
            },
        }
    }

    pub fn new(draft: CourseDraft) -> Self {
        Self {
            draft,
            errors: FormErrors::new(),
        }
    }

    pub fn draft(&self) -> &CourseDraft {
        &self.draft
    }

    pub fn errors(&self) -> &FormErrors {
        &self.errors
    }

    /// Applies raw input for one field. A non-numeric author id clears it.
    pub fn set_field(&mut self, field: CourseField, value: &str) {
        match field {
            CourseField::Title => self.draft.title = value.to_string(),
            CourseField::AuthorId => {
                self.draft.author_id = value.trim().parse::<u64>().ok().map(AuthorId)
            }
            CourseField::Category => self.draft.category = value.to_string(),
        }
    }

    /// Validates, then saves through `actions` when the form is valid.
    ///
    /// Validation failures are returned as `SubmitOutcome::Invalid` and keep
    /// the messages on the editor; API failures are returned as errors.
    pub async fn submit<A>(
        &mut self,
        actions: &CourseActions<A>,
    ) -> ActionResult<SubmitOutcome<Course>>
    where
        A: RecordApi<Course, Draft = CourseDraft>,
    {
        self.errors = self.draft.validate();
        if !self.errors.is_empty() {
            return Ok(SubmitOutcome::Invalid(self.errors.clone()));
        }
        let saved = actions.save_course(&self.draft).await?;
        self.draft = saved.to_draft();
        Ok(SubmitOutcome::Saved(saved))
    }
}

//! Author manage-page view model.

use crate::actions::{ActionResult, AuthorActions};
use crate::api::RecordApi;
use crate::editor::{EditorEntry, SubmitOutcome};
use crate::model::author::{Author, AuthorDraft, AuthorId};
use crate::model::validation::FormErrors;
use crate::store::AuthorStore;
use log::info;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthorField {
    Name,
}

/// Form state for creating or editing one author.
#[derive(Debug, Clone, Default)]
pub struct AuthorEditor {
    draft: AuthorDraft,
    errors: FormErrors,
}

impl AuthorEditor {
    /// Resolves the entry state for `/author/:id`.
    pub fn open(store: &AuthorStore, id: Option<AuthorId>) -> EditorEntry<AuthorDraft> {
        match id {
            None => EditorEntry::New(AuthorDraft::default()),
            Some(_) if !store.is_loaded() && store.is_empty() => EditorEntry::NeedsLoad,
            Some(id) => match store.find_by_id(id) {
                Some(author) => EditorEntry::Edit(author.to_draft()),
                None => {
                    info!("event=editor_open module=editor status=not_found kind=author id={id}");
                    EditorEntry::NotFound
                }
            },
        }
    }

    pub fn new(draft: AuthorDraft) -> Self {
        Self {
            draft,
            errors: FormErrors::new(),
        }
    }

    pub fn draft(&self) -> &AuthorDraft {
        &self.draft
    }

    pub fn errors(&self) -> &FormErrors {
        &self.errors
    }

    pub fn set_field(&mut self, field: AuthorField, value: &str) {
        match field {
            AuthorField::Name => self.draft.name = value.to_string(),
        }
    }

    pub async fn submit<A>(
        &mut self,
        actions: &AuthorActions<A>,
    ) -> ActionResult<SubmitOutcome<Author>>
    where
        A: RecordApi<Author, Draft = AuthorDraft>,
    {
        self.errors = self.draft.validate();
        if !self.errors.is_empty() {
            return Ok(SubmitOutcome::Invalid(self.errors.clone()));
        }
        let saved = actions.save_author(&self.draft).await?;
        self.draft = saved.to_draft();
        Ok(SubmitOutcome::Saved(saved))
    }
}

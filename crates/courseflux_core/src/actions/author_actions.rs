//! Author action creators.

use crate::actions::ActionResult;
use crate::api::RecordApi;
use crate::dispatch::{Action, Dispatcher};
use crate::model::author::{Author, AuthorDraft, AuthorId};
use log::{error, info};
use std::rc::Rc;

/// Bridges author API calls into dispatched actions.
pub struct AuthorActions<A> {
    api: A,
    dispatcher: Rc<Dispatcher>,
}

impl<A> AuthorActions<A>
where
    A: RecordApi<Author, Draft = AuthorDraft>,
{
    pub fn new(api: A, dispatcher: Rc<Dispatcher>) -> Self {
        Self { api, dispatcher }
    }

    pub async fn save_author(&self, draft: &AuthorDraft) -> ActionResult<Author> {
        let saved = self.api.save(draft).await.inspect_err(|err| {
            error!("event=save_author module=actions status=error error={err}");
        })?;
        let action = if draft.is_new() {
            Action::CreateAuthor(saved.clone())
        } else {
            Action::UpdateAuthor(saved.clone())
        };
        self.dispatcher.dispatch(&action)?;
        info!(
            "event=save_author module=actions status=ok id={} action={}",
            saved.id,
            action.name()
        );
        Ok(saved)
    }

    pub async fn load_authors(&self) -> ActionResult<usize> {
        let authors = self.api.get_all().await.inspect_err(|err| {
            error!("event=load_authors module=actions status=error error={err}");
        })?;
        let count = authors.len();
        self.dispatcher.dispatch(&Action::LoadAuthors(authors))?;
        info!("event=load_authors module=actions status=ok count={count}");
        Ok(count)
    }

    /// Fetches one author and merges it into the author store.
    pub async fn get_author_by_id(&self, id: AuthorId) -> ActionResult<Author> {
        let author = self.api.get_by_id(id).await.inspect_err(|err| {
            error!("event=get_author module=actions status=error id={id} error={err}");
        })?;
        self.dispatcher.dispatch(&Action::GetAuthor(author.clone()))?;
        Ok(author)
    }

    pub async fn delete_author(&self, id: AuthorId) -> ActionResult<()> {
        self.api.delete_by_id(id).await.inspect_err(|err| {
            error!("event=delete_author module=actions status=error id={id} error={err}");
        })?;
        self.dispatcher.dispatch(&Action::DeleteAuthor(id))?;
        info!("event=delete_author module=actions status=ok id={id}");
        Ok(())
    }
}

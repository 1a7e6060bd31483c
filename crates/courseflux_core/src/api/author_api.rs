//! Author endpoints.

use crate::api::{next_id, ApiError, ApiResult, MockDb, RecordApi};
use crate::model::author::{Author, AuthorDraft, AuthorId};
use log::info;

const COLLECTION: &str = "authors";

/// Mocked `/authors` resource.
#[derive(Clone)]
pub struct AuthorApi {
    db: MockDb,
}

impl AuthorApi {
    pub fn new(db: MockDb) -> Self {
        Self { db }
    }
}

impl RecordApi<Author> for AuthorApi {
    type Draft = AuthorDraft;

    async fn get_all(&self) -> ApiResult<Vec<Author>> {
        Ok(self.db.read(|document| document.authors.clone()).await)
    }

    async fn get_by_id(&self, id: AuthorId) -> ApiResult<Author> {
        self.db
            .read(|document| {
                document
                    .authors
                    .iter()
                    .find(|author| author.id == id)
                    .cloned()
            })
            .await
            .ok_or(ApiError::NotFound {
                collection: COLLECTION,
                id: id.0,
            })
    }

    async fn save(&self, draft: &AuthorDraft) -> ApiResult<Author> {
        let saved = self
            .db
            .write(|document| {
                let authors = &mut document.authors;
                match draft.id {
                    Some(id) => {
                        let slot = authors
                            .iter_mut()
                            .find(|author| author.id == id)
                            .ok_or(ApiError::NotFound {
                                collection: COLLECTION,
                                id: id.0,
                            })?;
                        slot.name = draft.name.clone();
                        Ok(slot.clone())
                    }
                    None => {
                        let id = next_id(authors.as_slice(), COLLECTION, |author: &Author| {
                            author.id.0
                        })?;
                        let author = Author {
                            id: AuthorId(id),
                            name: draft.name.clone(),
                        };
                        authors.push(author.clone());
                        Ok(author)
                    }
                }
            })
            .await?;

        info!(
            "event=api_save module=api status=ok collection={COLLECTION} id={} mode={}",
            saved.id,
            if draft.is_new() { "create" } else { "update" }
        );
        Ok(saved)
    }

    async fn delete_by_id(&self, id: AuthorId) -> ApiResult<()> {
        self.db
            .write(|document| {
                let before = document.authors.len();
                document.authors.retain(|author| author.id != id);
                if document.authors.len() == before {
                    return Err(ApiError::NotFound {
                        collection: COLLECTION,
                        id: id.0,
                    });
                }
                Ok(())
            })
            .await?;
        info!("event=api_delete module=api status=ok collection={COLLECTION} id={id}");
        Ok(())
    }
}

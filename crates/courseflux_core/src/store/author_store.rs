//! Author store.

use crate::dispatch::{Action, DispatchToken, Dispatcher};
use crate::model::author::{Author, AuthorId};
use crate::store::mutation::Mutation;
use crate::store::record_store::{ListenerId, RecordStore, Subscription};
use std::rc::Rc;

/// Holds every author known to the admin.
pub struct AuthorStore {
    inner: Rc<RecordStore<Author>>,
}

impl AuthorStore {
    pub fn new() -> Self {
        Self {
            inner: Rc::new(RecordStore::new("authors", select_author_mutation)),
        }
    }

    pub fn register(dispatcher: &Dispatcher) -> Rc<Self> {
        let store = Self::new();
        RecordStore::attach(&store.inner, dispatcher);
        Rc::new(store)
    }

    pub fn detach(&self, dispatcher: &Dispatcher) -> bool {
        self.inner.detach(dispatcher)
    }

    pub fn dispatch_token(&self) -> Option<DispatchToken> {
        self.inner.dispatch_token()
    }

    pub fn handle_action(&self, action: &Action) -> bool {
        self.inner.handle_action(action)
    }

    pub fn get_all(&self) -> Vec<Author> {
        self.inner.get_all()
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    pub fn is_loaded(&self) -> bool {
        self.inner.is_loaded()
    }

    pub fn find_by_id(&self, id: AuthorId) -> Option<Author> {
        self.inner.find_by_id(id)
    }

    pub fn exists(&self, id: AuthorId) -> bool {
        self.inner.exists(id)
    }

    /// Display name for `author_id`, matched by id rather than position.
    pub fn author_name(&self, author_id: AuthorId) -> Option<String> {
        self.find_by_id(author_id).map(|author| author.name)
    }

    pub fn add_change_listener<F>(&self, listener: F) -> ListenerId
    where
        F: Fn() + 'static,
    {
        self.inner.add_change_listener(listener)
    }

    pub fn remove_change_listener(&self, id: ListenerId) -> bool {
        self.inner.remove_change_listener(id)
    }

    pub fn subscribe<F>(&self, listener: F) -> Subscription
    where
        F: Fn() + 'static,
    {
        self.inner.subscribe(listener)
    }
}

impl Default for AuthorStore {
    fn default() -> Self {
        Self::new()
    }
}

fn select_author_mutation(action: &Action) -> Option<Mutation<Author>> {
    match action {
        Action::CreateAuthor(author) => Some(Mutation::Append(author.clone())),
        Action::GetAuthor(author) => Some(Mutation::Upsert(author.clone())),
        Action::LoadAuthors(authors) => Some(Mutation::ReplaceAll(authors.clone())),
        Action::UpdateAuthor(author) => Some(Mutation::ReplaceById(author.clone())),
        Action::DeleteAuthor(id) => Some(Mutation::RemoveById(*id)),
        Action::CreateCourse(_)
        | Action::UpdateCourse(_)
        | Action::DeleteCourse(_)
        | Action::LoadCourses(_) => None,
    }
}

#[cfg(test)]
mod tests {
    use super::AuthorStore;
    use crate::dispatch::{Action, Dispatcher};
    use crate::model::author::{Author, AuthorId};

    #[test]
    fn author_name_matches_by_id_not_position() {
        let hub = Dispatcher::new();
        let store = AuthorStore::register(&hub);
        hub.dispatch(&Action::LoadAuthors(vec![
            Author::new(3, "Dan Wahlin"),
            Author::new(1, "Cory House"),
        ]))
        .expect("dispatch should succeed");

        assert_eq!(store.author_name(AuthorId(1)).as_deref(), Some("Cory House"));
        assert_eq!(store.author_name(AuthorId(3)).as_deref(), Some("Dan Wahlin"));
        assert_eq!(store.author_name(AuthorId(2)), None);
    }

    #[test]
    fn get_author_upserts_single_record() {
        let hub = Dispatcher::new();
        let store = AuthorStore::register(&hub);
        hub.dispatch(&Action::LoadAuthors(vec![Author::new(1, "Cory")]))
            .expect("dispatch should succeed");
        hub.dispatch(&Action::GetAuthor(Author::new(2, "Scott")))
            .expect("dispatch should succeed");
        hub.dispatch(&Action::GetAuthor(Author::new(1, "Cory House")))
            .expect("dispatch should succeed");

        assert_eq!(
            store.get_all(),
            vec![Author::new(1, "Cory House"), Author::new(2, "Scott")]
        );
    }
}

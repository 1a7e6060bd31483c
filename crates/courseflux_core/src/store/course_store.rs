//! Course store.

use crate::dispatch::{Action, DispatchToken, Dispatcher};
use crate::model::course::{Course, CourseId};
use crate::store::mutation::Mutation;
use crate::store::record_store::{ListenerId, RecordStore, Subscription};
use std::rc::Rc;

/// Holds every course known to the admin, keyed by id and slug.
pub struct CourseStore {
    inner: Rc<RecordStore<Course>>,
}

impl CourseStore {
    /// Creates a detached store. Use `register` to receive actions.
    pub fn new() -> Self {
        Self {
            inner: Rc::new(RecordStore::new("courses", select_course_mutation)),
        }
    }

    /// Creates a store and registers it with `dispatcher`.
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

    pub fn get_all(&self) -> Vec<Course> {
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

    pub fn find_by_id(&self, id: CourseId) -> Option<Course> {
        self.inner.find_by_id(id)
    }

    pub fn exists(&self, id: CourseId) -> bool {
        self.inner.exists(id)
    }

    pub fn find_by_slug(&self, slug: &str) -> Option<Course> {
        self.inner.find(|course| course.slug == slug)
    }

    pub fn course_found(&self, slug: &str) -> bool {
        self.find_by_slug(slug).is_some()
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

impl Default for CourseStore {
    fn default() -> Self {
        Self::new()
    }
}

fn select_course_mutation(action: &Action) -> Option<Mutation<Course>> {
    match action {
        Action::CreateCourse(course) => Some(Mutation::Append(course.clone())),
        Action::LoadCourses(courses) => Some(Mutation::ReplaceAll(courses.clone())),
        Action::UpdateCourse(course) => Some(Mutation::ReplaceById(course.clone())),
        Action::DeleteCourse(id) => Some(Mutation::RemoveById(*id)),
        Action::CreateAuthor(_)
        | Action::UpdateAuthor(_)
        | Action::DeleteAuthor(_)
        | Action::GetAuthor(_)
        | Action::LoadAuthors(_) => None,
    }
}

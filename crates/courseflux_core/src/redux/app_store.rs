//! Single state container for the reducer-based admin.

use crate::dispatch::{Action, DispatchError};
use crate::redux::reducers::{root_reducer, AppState};
use log::{debug, warn};
use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

type Subscriber = Rc<dyn Fn(&AppState)>;

#[derive(Default)]
struct SubscriberList {
    next_id: u64,
    entries: Vec<(u64, Subscriber)>,
}

/// Owns `AppState` and applies every action through `root_reducer`.
pub struct AppStore {
    state: RefCell<AppState>,
    subscribers: Rc<RefCell<SubscriberList>>,
    in_flight: Cell<Option<&'static str>>,
}

impl AppStore {
    pub fn new(initial: AppState) -> Self {
        Self {
            state: RefCell::new(initial),
            subscribers: Rc::new(RefCell::new(SubscriberList::default())),
            in_flight: Cell::new(None),
        }
    }

    /// Copy of the current state tree.
    pub fn state(&self) -> AppState {
        self.state.borrow().clone()
    }

    /// Reduces `action` into the state, then notifies subscribers in order.
    ///
    /// # Errors
    /// - `DispatchError::Reentrant` when called from a subscriber.
    pub fn dispatch(&self, action: &Action) -> Result<(), DispatchError> {
        if let Some(in_flight) = self.in_flight.get() {
            let err = DispatchError::Reentrant {
                in_flight,
                rejected: action.name(),
            };
            warn!(
                "event=dispatch module=redux status=error action={} error_code=reentrant",
                action.name()
            );
            return Err(err);
        }
        self.in_flight.set(Some(action.name()));
        let _guard = ClearOnDrop(&self.in_flight);

        let next = {
            let current = self.state.replace(AppState::default());
            root_reducer(current, action)
        };
        *self.state.borrow_mut() = next.clone();

        let snapshot: Vec<Subscriber> = self
            .subscribers
            .borrow()
            .entries
            .iter()
            .map(|(_, subscriber)| Rc::clone(subscriber))
            .collect();
        for subscriber in &snapshot {
            subscriber(&next);
        }

        debug!(
            "event=dispatch module=redux status=ok action={} subscribers={}",
            action.name(),
            snapshot.len()
        );
        Ok(())
    }

    /// Subscribes until the returned guard is dropped.
    pub fn subscribe<F>(&self, subscriber: F) -> StoreSubscription
    where
        F: Fn(&AppState) + 'static,
    {
        let mut list = self.subscribers.borrow_mut();
        list.next_id += 1;
        let id = list.next_id;
        let subscriber: Subscriber = Rc::new(subscriber);
        list.entries.push((id, subscriber));
        StoreSubscription {
            subscribers: Rc::downgrade(&self.subscribers),
            id: Some(id),
        }
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers.borrow().entries.len()
    }
}

impl Default for AppStore {
    fn default() -> Self {
        Self::new(AppState::default())
    }
}

struct ClearOnDrop<'a>(&'a Cell<Option<&'static str>>);

impl Drop for ClearOnDrop<'_> {
    fn drop(&mut self) {
        self.0.set(None);
    }
}

/// Subscriber registration on an `AppStore`; unsubscribes on drop.
#[must_use = "dropping a StoreSubscription unsubscribes immediately"]
pub struct StoreSubscription {
    subscribers: Weak<RefCell<SubscriberList>>,
    id: Option<u64>,
}

impl StoreSubscription {
    /// Idempotent.
    pub fn cancel(&mut self) {
        if let Some(id) = self.id.take() {
            if let Some(subscribers) = self.subscribers.upgrade() {
                subscribers
                    .borrow_mut()
                    .entries
                    .retain(|(existing, _)| *existing != id);
            }
        }
    }
}

impl Drop for StoreSubscription {
    fn drop(&mut self) {
        self.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::AppStore;
    use crate::dispatch::{Action, DispatchError};
    use crate::model::course::{Course, CourseId};
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn subscribers_see_reduced_state() {
        let store = AppStore::default();
        let sizes = Rc::new(RefCell::new(Vec::new()));
        let recorder = Rc::clone(&sizes);
        let _subscription =
            store.subscribe(move |state| recorder.borrow_mut().push(state.courses.len()));

        store
            .dispatch(&Action::CreateCourse(Course::new(1, "A", 1, "x")))
            .expect("dispatch should succeed");
        store.dispatch(&Action::DeleteCourse(CourseId(1))).expect("dispatch should succeed");
        assert_eq!(*sizes.borrow(), vec![1, 0]);
    }

    #[test]
    fn reentrant_dispatch_from_subscriber_is_rejected() {
        let store = Rc::new(AppStore::default());
        let nested = Rc::new(RefCell::new(None));
        let handle = Rc::clone(&store);
        let recorder = Rc::clone(&nested);
        let _subscription = store.subscribe(move |_| {
            *recorder.borrow_mut() = Some(handle.dispatch(&Action::LoadCourses(Vec::new())));
        });

        store
            .dispatch(&Action::CreateCourse(Course::new(1, "A", 1, "x")))
            .expect("dispatch should succeed");
        assert!(matches!(
            nested.borrow_mut().take(),
            Some(Err(DispatchError::Reentrant { .. }))
        ));
        assert_eq!(store.state().courses.len(), 1);
    }

    #[test]
    fn dropped_subscription_is_not_notified() {
        let store = AppStore::default();
        let calls = Rc::new(RefCell::new(0));
        let counter = Rc::clone(&calls);
        let subscription = store.subscribe(move |_| *counter.borrow_mut() += 1);
        drop(subscription);

        store.dispatch(&Action::LoadCourses(Vec::new())).expect("dispatch should succeed");
        assert_eq!(*calls.borrow(), 0);
        assert_eq!(store.subscriber_count(), 0);
    }
}

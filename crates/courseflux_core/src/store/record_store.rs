//! Generic record store with change-listener fan-out.
//!
//! # Invariants
//! - The record borrow is released before listeners run, so listeners may
//!   read the store.
//! - Listener lists are snapshotted per notification; subscribing or
//!   unsubscribing from inside a listener affects the next notification.
//! - Removing a listener is idempotent.
//! - The store counts as loaded once a replace-all change has been applied,
//!   even when the loaded collection is empty.

use crate::dispatch::{Action, DispatchToken, Dispatcher};
use crate::model::Record;
use crate::store::mutation::{apply_mutation, Mutation};
use log::debug;
use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

type Listener = Rc<dyn Fn()>;

/// Handle returned by `RecordStore::add_change_listener`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ListenerId(u64);

#[derive(Default)]
struct ListenerList {
    next_id: u64,
    entries: Vec<(ListenerId, Listener)>,
}

impl ListenerList {
    fn add(&mut self, listener: Listener) -> ListenerId {
        self.next_id += 1;
        let id = ListenerId(self.next_id);
        self.entries.push((id, listener));
        id
    }

    fn remove(&mut self, id: ListenerId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|(existing, _)| *existing != id);
        self.entries.len() != before
    }
}

/// Maps an action onto a collection change; `None` for foreign kinds.
pub type ActionSelector<T> = fn(&Action) -> Option<Mutation<T>>;

/// In-memory collection owned by one store, plus its subscribers.
pub struct RecordStore<T: Record> {
    name: &'static str,
    selector: ActionSelector<T>,
    records: RefCell<Vec<T>>,
    loaded: Cell<bool>,
    listeners: Rc<RefCell<ListenerList>>,
    token: Cell<Option<DispatchToken>>,
}

impl<T: Record> RecordStore<T> {
    pub fn new(name: &'static str, selector: ActionSelector<T>) -> Self {
        Self {
            name,
            selector,
            records: RefCell::new(Vec::new()),
            loaded: Cell::new(false),
            listeners: Rc::new(RefCell::new(ListenerList::default())),
            token: Cell::new(None),
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Snapshot of the whole collection in insertion order.
    pub fn get_all(&self) -> Vec<T> {
        self.records.borrow().clone()
    }

    pub fn len(&self) -> usize {
        self.records.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.borrow().is_empty()
    }

    /// Whether a full collection load has reached this store.
    pub fn is_loaded(&self) -> bool {
        self.loaded.get()
    }

    pub fn find_by_id(&self, id: T::Id) -> Option<T> {
        self.find(|record| record.id() == id)
    }

    pub fn exists(&self, id: T::Id) -> bool {
        self.records.borrow().iter().any(|record| record.id() == id)
    }

    /// First record matching `predicate`.
    pub fn find<P>(&self, predicate: P) -> Option<T>
    where
        P: Fn(&T) -> bool,
    {
        self.records
            .borrow()
            .iter()
            .find(|record| predicate(record))
            .cloned()
    }

    pub fn add_change_listener<F>(&self, listener: F) -> ListenerId
    where
        F: Fn() + 'static,
    {
        self.listeners.borrow_mut().add(Rc::new(listener))
    }

    /// Returns `false` when the listener was already removed.
    pub fn remove_change_listener(&self, id: ListenerId) -> bool {
        self.listeners.borrow_mut().remove(id)
    }

    /// Subscribes `listener` until the returned guard is dropped or cancelled.
    pub fn subscribe<F>(&self, listener: F) -> Subscription
    where
        F: Fn() + 'static,
    {
        let id = self.add_change_listener(listener);
        Subscription {
            listeners: Rc::downgrade(&self.listeners),
            id: Some(id),
        }
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.borrow().entries.len()
    }

    /// Runs the selector for `action`, mutates and notifies when recognized.
    ///
    /// Returns whether the action was handled.
    pub fn handle_action(&self, action: &Action) -> bool {
        match (self.selector)(action) {
            Some(mutation) => {
                self.apply(mutation);
                let notified = self.emit_change();
                debug!(
                    "event=store_change module=store status=ok store={} action={} size={} listeners={}",
                    self.name,
                    action.name(),
                    self.len(),
                    notified
                );
                true
            }
            None => false,
        }
    }

    /// Registers `store` with `dispatcher`.
    ///
    /// The hub only keeps a weak handle, so dropping the last `Rc` to the
    /// store turns its callback into a no-op.
    pub fn attach(store: &Rc<Self>, dispatcher: &Dispatcher) -> DispatchToken
    where
        T: 'static,
    {
        if let Some(token) = store.token.get() {
            return token;
        }
        let handle: Weak<Self> = Rc::downgrade(store);
        let token = dispatcher.register(move |action| {
            if let Some(store) = handle.upgrade() {
                store.handle_action(action);
            }
        });
        store.token.set(Some(token));
        token
    }

    /// Unregisters this store from `dispatcher`. Idempotent.
    pub fn detach(&self, dispatcher: &Dispatcher) -> bool {
        match self.token.take() {
            Some(token) => dispatcher.unregister(token),
            None => false,
        }
    }

    pub fn dispatch_token(&self) -> Option<DispatchToken> {
        self.token.get()
    }

    fn apply(&self, mutation: Mutation<T>) {
        if matches!(mutation, Mutation::ReplaceAll(_)) {
            self.loaded.set(true);
        }
        let mut records = self.records.borrow_mut();
        apply_mutation(&mut records, mutation);
    }

    fn emit_change(&self) -> usize {
        let snapshot: Vec<Listener> = self
            .listeners
            .borrow()
            .entries
            .iter()
            .map(|(_, listener)| Rc::clone(listener))
            .collect();
        for listener in &snapshot {
            listener();
        }
        snapshot.len()
    }
}

/// Change-listener registration that ends when dropped.
#[must_use = "dropping a Subscription unsubscribes immediately"]
pub struct Subscription {
    listeners: Weak<RefCell<ListenerList>>,
    id: Option<ListenerId>,
}

impl Subscription {
    pub fn listener_id(&self) -> Option<ListenerId> {
        self.id
    }

    /// Unsubscribes now. Safe to call repeatedly, and after the store is gone.
    pub fn cancel(&mut self) {
        if let Some(id) = self.id.take() {
            if let Some(listeners) = self.listeners.upgrade() {
                listeners.borrow_mut().remove(id);
            }
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.cancel();
    }
}

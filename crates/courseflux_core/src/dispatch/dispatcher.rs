//! Dispatch hub implementation.
//!
//! # Invariants
//! - Tokens are unique per hub and never reused.
//! - The callback list is snapshotted when a dispatch starts; registrations
//!   made during a dispatch take effect from the next one.
//! - The in-flight marker is cleared even if a callback panics.

use crate::dispatch::{Action, DispatchError};
use log::{debug, warn};
use std::cell::{Cell, RefCell};
use std::fmt::{Display, Formatter};
use std::rc::Rc;

type Callback = Rc<RefCell<dyn FnMut(&Action)>>;

/// Handle returned by `Dispatcher::register`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DispatchToken(u64);

impl Display for DispatchToken {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "ID_{}", self.0)
    }
}

/// Central hub that fans every action out to registered callbacks.
///
/// Single-threaded by construction; share it through `Rc<Dispatcher>`.
#[derive(Default)]
pub struct Dispatcher {
    callbacks: RefCell<Vec<(DispatchToken, Callback)>>,
    next_token: Cell<u64>,
    in_flight: Cell<Option<&'static str>>,
}

struct InFlightGuard<'a> {
    slot: &'a Cell<Option<&'static str>>,
}

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        self.slot.set(None);
    }
}

impl Dispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a callback invoked for every dispatched action.
    pub fn register<F>(&self, callback: F) -> DispatchToken
    where
        F: FnMut(&Action) + 'static,
    {
        let token = DispatchToken(self.next_token.get() + 1);
        self.next_token.set(token.0);
        let callback: Callback = Rc::new(RefCell::new(callback));
        self.callbacks.borrow_mut().push((token, callback));
        debug!("event=dispatcher_register module=dispatch status=ok token={token}");
        token
    }

    /// Removes a callback. Returns `false` when the token is unknown.
    pub fn unregister(&self, token: DispatchToken) -> bool {
        let mut callbacks = self.callbacks.borrow_mut();
        let before = callbacks.len();
        callbacks.retain(|(registered, _)| *registered != token);
        let removed = callbacks.len() != before;
        debug!(
            "event=dispatcher_unregister module=dispatch status={} token={token}",
            if removed { "ok" } else { "unknown_token" }
        );
        removed
    }

    /// Delivers `action` to every registered callback in registration order.
    ///
    /// Returns the number of callbacks invoked.
    ///
    /// # Errors
    /// - `DispatchError::Reentrant` when called while another action is in
    ///   flight. The rejected action reaches no callback.
    pub fn dispatch(&self, action: &Action) -> Result<usize, DispatchError> {
        if let Some(in_flight) = self.in_flight.get() {
            let err = DispatchError::Reentrant {
                in_flight,
                rejected: action.name(),
            };
            warn!(
                "event=dispatch module=dispatch status=error action={} error_code=reentrant error={}",
                action.name(),
                err
            );
            return Err(err);
        }

        self.in_flight.set(Some(action.name()));
        let _guard = InFlightGuard {
            slot: &self.in_flight,
        };

        let snapshot: Vec<Callback> = self
            .callbacks
            .borrow()
            .iter()
            .map(|(_, callback)| Rc::clone(callback))
            .collect();

        for callback in &snapshot {
            (&mut *callback.borrow_mut())(action);
        }

        debug!(
            "event=dispatch module=dispatch status=ok action={} callbacks={}",
            action.name(),
            snapshot.len()
        );
        Ok(snapshot.len())
    }

    /// Whether an action is currently being dispatched.
    pub fn is_dispatching(&self) -> bool {
        self.in_flight.get().is_some()
    }

    pub fn callback_count(&self) -> usize {
        self.callbacks.borrow().len()
    }
}

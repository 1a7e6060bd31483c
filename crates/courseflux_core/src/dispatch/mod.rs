//! Single dispatch hub and the closed action type it fans out.
//!
//! # Responsibility
//! - Define every state change the admin can request as one `Action` variant.
//! - Deliver each action to all registered callbacks in registration order.
//!
//! # Invariants
//! - At most one action is in flight per hub; reentrant dispatch is rejected.
//! - Callbacks run synchronously and to completion inside `dispatch`.

pub mod action;
pub mod dispatcher;

use std::error::Error;
use std::fmt::{Display, Formatter};

pub use action::Action;
pub use dispatcher::{DispatchToken, Dispatcher};

/// Dispatch-level programming faults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DispatchError {
    /// `dispatch` was called from a callback while another action was in flight.
    Reentrant {
        in_flight: &'static str,
        rejected: &'static str,
    },
}

impl Display for DispatchError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Reentrant {
                in_flight,
                rejected,
            } => write!(
                f,
                "cannot dispatch `{rejected}` while `{in_flight}` is still being dispatched"
            ),
        }
    }
}

impl Error for DispatchError {}

//! Centralized store driven by pure reducers.
//!
//! # Responsibility
//! - Offer the same action semantics as the Flux stores through one state
//!   tree and a composed root reducer.
//!
//! # Invariants
//! - Reducers are pure: same state and action, same result.
//! - One action in flight per store; subscribers run after the reducer.

pub mod app_store;
pub mod reducers;

pub use app_store::{AppStore, StoreSubscription};
pub use reducers::{author_reducer, course_reducer, root_reducer, AppState};

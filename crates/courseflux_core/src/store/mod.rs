//! Flux-style stores.
//!
//! # Responsibility
//! - Own one entity collection per store and expose read-only accessors.
//! - Translate recognized actions into collection mutations.
//! - Notify change listeners synchronously after every handled action.
//!
//! # Invariants
//! - Collections are only mutated from dispatch callbacks.
//! - Unrecognized actions neither mutate nor notify.
//! - Listeners are notified once per handled action, in subscription order.

pub mod author_store;
pub mod course_store;
pub mod mutation;
pub mod record_store;

pub use author_store::AuthorStore;
pub use course_store::CourseStore;
pub use mutation::{apply_mutation, Mutation};
pub use record_store::{ListenerId, RecordStore, Subscription};

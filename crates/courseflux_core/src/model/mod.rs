//! Domain records for the course/author admin.
//!
//! # Responsibility
//! - Define the canonical records held by stores and returned by the API.
//! - Define draft shapes used by forms before a record is saved.
//!
//! # Invariants
//! - Every record is identified by an id unique within its collection.
//! - A draft without id means "create"; a draft with id means "update".

pub mod author;
pub mod course;
pub mod validation;

use std::fmt::Debug;

/// Identity contract shared by every collection element.
///
/// Store and reducer operations are generic over this trait so that
/// replace-by-id and remove-by-id behave identically for all entities.
pub trait Record: Clone + Debug {
    type Id: Copy + Eq + Ord + Debug;

    fn id(&self) -> Self::Id;
}

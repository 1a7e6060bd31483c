//! Mocked record API backed by a JSON document.
//!
//! # Responsibility
//! - Provide async CRUD endpoints shaped like the admin's HTTP API.
//! - Keep file format and id assignment inside this boundary.
//!
//! # Invariants
//! - Saving a draft without id creates a record with id `max(id) + 1`, or
//!   fails `IdExhausted` when that would overflow.
//! - Saving a draft with id replaces an existing record or fails `NotFound`.
//! - Every successful write persists the whole document when file-backed.

pub mod author_api;
pub mod course_api;
pub mod db;

use crate::model::Record;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::PathBuf;

pub use author_api::AuthorApi;
pub use course_api::CourseApi;
pub use db::{DbDocument, MockDb};

pub type ApiResult<T> = Result<T, ApiError>;

/// Failure surfaced by a mocked API call.
#[derive(Debug)]
pub enum ApiError {
    /// Reading or writing the backing file failed.
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    /// The backing file is not a valid DB document.
    Serde(serde_json::Error),
    NotFound {
        collection: &'static str,
        id: u64,
    },
    /// Request rejected by server-side validation.
    Validation(String),
    /// The largest id in the collection leaves no room for another record.
    IdExhausted { collection: &'static str },
}

impl Display for ApiError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "mock db io failed at `{}`: {source}", path.display())
            }
            Self::Serde(err) => write!(f, "invalid mock db document: {err}"),
            Self::NotFound { collection, id } => write!(f, "{collection} record not found: {id}"),
            Self::Validation(message) => write!(f, "{message}"),
            Self::IdExhausted { collection } => write!(f, "{collection} id space exhausted"),
        }
    }
}

impl Error for ApiError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Serde(err) => Some(err),
            Self::NotFound { .. } | Self::Validation(_) | Self::IdExhausted { .. } => None,
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(value: serde_json::Error) -> Self {
        Self::Serde(value)
    }
}

/// Async CRUD contract consumed by action creators.
///
/// Implementations are driven from a single-threaded runtime, so the
/// returned futures are not required to be `Send`.
#[allow(async_fn_in_trait)]
pub trait RecordApi<T: Record> {
    /// Unsaved input accepted by `save`.
    type Draft;

    async fn get_all(&self) -> ApiResult<Vec<T>>;

    async fn get_by_id(&self, id: T::Id) -> ApiResult<T>;

    /// Creates or updates depending on whether the draft carries an id.
    async fn save(&self, draft: &Self::Draft) -> ApiResult<T>;

    async fn delete_by_id(&self, id: T::Id) -> ApiResult<()>;
}

fn next_id<T, F>(records: &[T], collection: &'static str, raw: F) -> ApiResult<u64>
where
    F: Fn(&T) -> u64,
{
    records
        .iter()
        .map(raw)
        .max()
        .unwrap_or(0)
        .checked_add(1)
        .ok_or(ApiError::IdExhausted { collection })
}

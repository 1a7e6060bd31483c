//! Core of the course/author admin: a unidirectional data-flow engine.
//!
//! A single `Dispatcher` fans actions out to explicitly constructed stores,
//! which mutate their private collections and notify subscribers. Action
//! creators await the mocked API before dispatching. `redux` offers the same
//! semantics through pure reducers over one state tree.

pub mod actions;
pub mod api;
pub mod config;
pub mod dispatch;
pub mod editor;
pub mod logging;
pub mod model;
pub mod redux;
pub mod seed;
pub mod store;

pub use actions::{ActionError, ActionResult, AuthorActions, CourseActions};
pub use api::{ApiError, ApiResult, AuthorApi, CourseApi, DbDocument, MockDb, RecordApi};
pub use config::{AppConfig, ConfigError};
pub use dispatch::{Action, DispatchError, DispatchToken, Dispatcher};
pub use editor::{AuthorEditor, AuthorField, CourseEditor, CourseField, EditorEntry, SubmitOutcome};
pub use logging::{default_log_level, init_logging, init_stderr_logging, logging_status, LogTarget};
pub use model::author::{Author, AuthorDraft, AuthorId};
pub use model::course::{slugify, Course, CourseDraft, CourseId};
pub use model::validation::FormErrors;
pub use model::Record;
pub use redux::{AppState, AppStore, StoreSubscription};
pub use store::{AuthorStore, CourseStore, ListenerId, Mutation, RecordStore, Subscription};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

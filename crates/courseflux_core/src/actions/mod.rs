//! Action creators.
//!
//! # Responsibility
//! - Call the record API and, once it resolves, dispatch the matching action.
//!
//! # Invariants
//! - Nothing is dispatched before the API call resolves.
//! - A failed API call dispatches nothing and is returned unchanged.

pub mod author_actions;
pub mod course_actions;

use crate::api::ApiError;
use crate::dispatch::DispatchError;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub use author_actions::AuthorActions;
pub use course_actions::CourseActions;

pub type ActionResult<T> = Result<T, ActionError>;

/// Failure of an action creator.
#[derive(Debug)]
pub enum ActionError {
    Api(ApiError),
    Dispatch(DispatchError),
}

impl Display for ActionError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Api(err) => write!(f, "{err}"),
            Self::Dispatch(err) => write!(f, "{err}"),
        }
    }
}

impl Error for ActionError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Api(err) => Some(err),
            Self::Dispatch(err) => Some(err),
        }
    }
}

impl From<ApiError> for ActionError {
    fn from(value: ApiError) -> Self {
        Self::Api(value)
    }
}

impl From<DispatchError> for ActionError {
    fn from(value: DispatchError) -> Self {
        Self::Dispatch(value)
    }
}

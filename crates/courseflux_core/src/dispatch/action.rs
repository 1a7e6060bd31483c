//! Action catalogue.

use crate::model::author::{Author, AuthorId};
use crate::model::course::{Course, CourseId};

/// An immutable description of an intended state change.
///
/// Adding a kind here forces every store and reducer match to handle it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    CreateCourse(Course),
    UpdateCourse(Course),
    DeleteCourse(CourseId),
    LoadCourses(Vec<Course>),
    CreateAuthor(Author),
    UpdateAuthor(Author),
    DeleteAuthor(AuthorId),
    /// Single author fetched by id.
    GetAuthor(Author),
    LoadAuthors(Vec<Author>),
}

impl Action {
    /// Stable name used in log events.
    pub fn name(&self) -> &'static str {
        match self {
            Self::CreateCourse(_) => "CREATE_COURSE",
            Self::UpdateCourse(_) => "UPDATE_COURSE",
            Self::DeleteCourse(_) => "DELETE_COURSE",
            Self::LoadCourses(_) => "LOAD_COURSES",
            Self::CreateAuthor(_) => "CREATE_AUTHOR",
            Self::UpdateAuthor(_) => "UPDATE_AUTHOR",
            Self::DeleteAuthor(_) => "DELETE_AUTHOR",
            Self::GetAuthor(_) => "GET_AUTHOR",
            Self::LoadAuthors(_) => "LOAD_AUTHORS",
        }
    }
}

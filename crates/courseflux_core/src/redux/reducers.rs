//! Slice reducers and their root composition.

use crate::dispatch::Action;
use crate::model::author::Author;
use crate::model::course::Course;
use crate::store::mutation::{apply_mutation, Mutation};

/// Whole application state held by `AppStore`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AppState {
    pub courses: Vec<Course>,
    pub authors: Vec<Author>,
}

pub fn course_reducer(mut state: Vec<Course>, action: &Action) -> Vec<Course> {
    let mutation = match action {
        Action::CreateCourse(course) => Mutation::Append(course.clone()),
        Action::UpdateCourse(course) => Mutation::ReplaceById(course.clone()),
        Action::DeleteCourse(id) => Mutation::RemoveById(*id),
        Action::LoadCourses(courses) => Mutation::ReplaceAll(courses.clone()),
        Action::CreateAuthor(_)
        | Action::UpdateAuthor(_)
        | Action::DeleteAuthor(_)
        | Action::GetAuthor(_)
        | Action::LoadAuthors(_) => return state,
    };
    apply_mutation(&mut state, mutation);
    state
}

pub fn author_reducer(mut state: Vec<Author>, action: &Action) -> Vec<Author> {
    let mutation = match action {
        Action::CreateAuthor(author) => Mutation::Append(author.clone()),
        Action::UpdateAuthor(author) => Mutation::ReplaceById(author.clone()),
        Action::GetAuthor(author) => Mutation::Upsert(author.clone()),
        Action::DeleteAuthor(id) => Mutation::RemoveById(*id),
        Action::LoadAuthors(authors) => Mutation::ReplaceAll(authors.clone()),
        Action::CreateCourse(_)
        | Action::UpdateCourse(_)
        | Action::DeleteCourse(_)
        | Action::LoadCourses(_) => return state,
    };
    apply_mutation(&mut state, mutation);
    state
}

/// Routes each slice of `state` through its reducer.
pub fn root_reducer(state: AppState, action: &Action) -> AppState {
    AppState {
        courses: course_reducer(state.courses, action),
        authors: author_reducer(state.authors, action),
    }
}

#[cfg(test)]
mod tests {
    use super::{author_reducer, course_reducer, root_reducer, AppState};
    use crate::dispatch::Action;
    use crate::model::author::Author;
    use crate::model::course::Course;

    #[test]
    fn course_reducer_ignores_author_actions() {
        let state = vec![Course::new(1, "A", 1, "x")];
        let next = course_reducer(state.clone(), &Action::CreateAuthor(Author::new(1, "Cory")));
        assert_eq!(next, state);
    }

    #[test]
    fn author_reducer_ignores_course_actions() {
        let state = vec![Author::new(1, "Cory")];
        let course = Course::new(1, "A", 1, "x");
        for action in [
            Action::CreateCourse(course.clone()),
            Action::UpdateCourse(course.clone()),
            Action::DeleteCourse(course.id),
            Action::LoadCourses(Vec::new()),
        ] {
            assert_eq!(author_reducer(state.clone(), &action), state, "{}", action.name());
        }
    }

    #[test]
    fn root_reducer_only_touches_matching_slice() {
        let state = AppState {
            courses: vec![Course::new(1, "A", 1, "x")],
            authors: vec![Author::new(1, "Cory")],
        };
        let next = root_reducer(state.clone(), &Action::CreateAuthor(Author::new(2, "Scott")));
        assert_eq!(next.courses, state.courses);
        assert_eq!(next.authors.len(), 2);
    }
}

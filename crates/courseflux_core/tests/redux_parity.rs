use courseflux_core::{
    Action, AppState, AppStore, Author, AuthorId, AuthorStore, Course, CourseId, CourseStore,
    Dispatcher,
};

fn script() -> Vec<Action> {
    vec![
        Action::LoadAuthors(vec![Author::new(1, "Cory House"), Author::new(2, "Scott Allen")]),
        Action::CreateCourse(Course::new(1, "A", 1, "JavaScript")),
        Action::CreateCourse(Course::new(2, "B", 2, "Career")),
        Action::UpdateAuthor(Author::new(2, "K. Scott Allen")),
        Action::DeleteCourse(CourseId(1)),
        Action::UpdateCourse(Course::new(2, "B2", 2, "Career")),
        Action::GetAuthor(Author::new(3, "Dan Wahlin")),
        Action::DeleteAuthor(AuthorId(1)),
        Action::DeleteCourse(CourseId(77)),
    ]
}

#[test]
fn reducer_store_and_flux_stores_agree() {
    let hub = Dispatcher::new();
    let courses = CourseStore::register(&hub);
    let authors = AuthorStore::register(&hub);
    let app = AppStore::new(AppState::default());

    for action in script() {
        hub.dispatch(&action).expect("dispatch should succeed");
        app.dispatch(&action).expect("dispatch should succeed");
        assert_eq!(app.state().courses, courses.get_all(), "after {}", action.name());
        assert_eq!(app.state().authors, authors.get_all(), "after {}", action.name());
    }

    let state = app.state();
    assert_eq!(state.courses.len(), 1);
    assert_eq!(state.courses[0].title, "B2");
    let names: Vec<&str> = state.authors.iter().map(|author| author.name.as_str()).collect();
    assert_eq!(names, vec!["K. Scott Allen", "Dan Wahlin"]);
}

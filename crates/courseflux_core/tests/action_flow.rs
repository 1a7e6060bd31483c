use courseflux_core::seed::mock_data;
use courseflux_core::{
    ActionError, ApiError, AuthorActions, AuthorDraft, AuthorEditor, AuthorField, AuthorId,
    AuthorStore, CourseActions, CourseDraft, CourseEditor, CourseField, CourseId, CourseStore,
    DbDocument, Dispatcher, EditorEntry, MockDb, SubmitOutcome,
};
use std::cell::RefCell;
use std::rc::Rc;

struct Harness {
    hub: Rc<Dispatcher>,
    courses: Rc<CourseStore>,
    authors: Rc<AuthorStore>,
    course_actions: CourseActions<courseflux_core::CourseApi>,
    author_actions: AuthorActions<courseflux_core::AuthorApi>,
    db: MockDb,
}

fn harness() -> Harness {
    harness_with(mock_data().expect("bundled mock data should parse"))
}

fn harness_with(document: DbDocument) -> Harness {
    let db = MockDb::in_memory(document);
    let hub = Rc::new(Dispatcher::new());
    Harness {
        courses: CourseStore::register(&hub),
        authors: AuthorStore::register(&hub),
        course_actions: CourseActions::new(db.courses(), Rc::clone(&hub)),
        author_actions: AuthorActions::new(db.authors(), Rc::clone(&hub)),
        hub,
        db,
    }
}

#[tokio::test]
async fn load_then_save_flows_through_store_and_notifies_view() {
    let h = harness();
    let renders = Rc::new(RefCell::new(Vec::new()));
    let _view = {
        let renders = Rc::clone(&renders);
        let store = Rc::downgrade(&h.courses);
        h.courses.subscribe(move || {
            if let Some(store) = store.upgrade() {
                renders.borrow_mut().push(store.len());
            }
        })
    };

    assert_eq!(h.course_actions.load_courses().await.expect("courses should load"), 10);
    let created = h
        .course_actions
        .save_course(&CourseDraft::new("Async Rust", 3, "Systems"))
        .await
        .expect("course should save");
    assert_eq!(created.id, CourseId(11));
    assert!(h.courses.course_found("async-rust"));

    let mut draft = created.to_draft();
    draft.category = "Rust".to_string();
    h.course_actions.save_course(&draft).await.expect("course should save");
    let stored = h
        .courses
        .find_by_id(CourseId(11))
        .expect("record should be in the store");
    assert_eq!(stored.category, "Rust");
    assert_eq!(h.courses.len(), 11);

    h.course_actions.delete_course(CourseId(11)).await.expect("course should delete");
    assert!(!h.courses.exists(CourseId(11)));

    assert_eq!(*renders.borrow(), vec![10, 11, 11, 10]);
    assert!(!h.hub.is_dispatching());
}

#[tokio::test]
async fn api_failure_dispatches_nothing() {
    let h = harness();
    h.course_actions.load_courses().await.expect("courses should load");
    let calls = Rc::new(RefCell::new(0));
    let counter = Rc::clone(&calls);
    let _view = h.courses.subscribe(move || *counter.borrow_mut() += 1);

    let err = h
        .course_actions
        .delete_course(CourseId(999))
        .await
        .expect_err("delete should fail");
    assert!(matches!(err, ActionError::Api(ApiError::NotFound { .. })));
    assert_eq!(*calls.borrow(), 0);
    assert_eq!(h.courses.len(), 10);
}

#[tokio::test]
async fn author_actions_keep_store_in_sync_with_api() {
    let h = harness();
    h.author_actions.load_authors().await.expect("authors should load");
    let created = h
        .author_actions
        .save_author(&AuthorDraft::new("Kent Beck"))
        .await
        .expect("author should save");
    assert_eq!(created.id, AuthorId(4));
    assert_eq!(h.authors.author_name(AuthorId(4)).as_deref(), Some("Kent Beck"));

    h.author_actions.delete_author(AuthorId(2)).await.expect("author should delete");
    assert!(!h.authors.exists(AuthorId(2)));
    assert_eq!(h.db.snapshot().await.authors.len(), 3);

    let fetched = h
        .author_actions
        .get_author_by_id(AuthorId(1))
        .await
        .expect("author should be fetched");
    assert_eq!(fetched.name, "Cory House");
    assert_eq!(h.authors.len(), 3);
}

#[tokio::test]
async fn course_editor_resolves_entry_and_gates_submit_on_validation() {
    let h = harness();
    assert_eq!(CourseEditor::open(&h.courses, Some("react-big-picture")), EditorEntry::NeedsLoad);

    h.course_actions.load_courses().await.expect("courses should load");
    assert_eq!(CourseEditor::open(&h.courses, Some("no-such-course")), EditorEntry::NotFound);
    let draft = match CourseEditor::open(&h.courses, Some("react-big-picture")) {
        EditorEntry::Edit(draft) => draft,
        other => panic!("unexpected entry: {other:?}"),
    };
    assert_eq!(draft.id, Some(CourseId(2)));

    let mut editor = match CourseEditor::open(&h.courses, None) {
        EditorEntry::New(draft) => CourseEditor::new(draft),
        other => panic!("unexpected entry: {other:?}"),
    };
    editor.set_field(CourseField::Title, "Ownership in Practice");
    editor.set_field(CourseField::AuthorId, "not a number");
    let outcome = editor.submit(&h.course_actions).await.expect("submit should succeed");
    match outcome {
        SubmitOutcome::Invalid(errors) => {
            assert_eq!(errors.get("author_id"), Some("Author ID is required"));
            assert_eq!(errors.get("category"), Some("Category is required"));
            assert_eq!(errors.get("title"), None);
        }
        other => panic!("unexpected outcome: {other:?}"),
    }
    assert_eq!(h.db.snapshot().await.courses.len(), 10);

    editor.set_field(CourseField::AuthorId, "2");
    editor.set_field(CourseField::Category, "Rust");
    let saved = match editor.submit(&h.course_actions).await.expect("submit should succeed") {
        SubmitOutcome::Saved(course) => course,
        other => panic!("unexpected outcome: {other:?}"),
    };
    assert!(editor.errors().is_empty());
    assert_eq!(editor.draft().id, Some(saved.id));
    assert!(h.courses.course_found("ownership-in-practice"));
}

#[tokio::test]
async fn editors_create_first_records_on_empty_db() {
    let h = harness_with(DbDocument::default());
    assert!(matches!(CourseEditor::open(&h.courses, None), EditorEntry::New(_)));
    assert_eq!(CourseEditor::open(&h.courses, Some("clean-code")), EditorEntry::NeedsLoad);

    assert_eq!(h.author_actions.load_authors().await.expect("authors should load"), 0);
    assert_eq!(h.course_actions.load_courses().await.expect("courses should load"), 0);
    assert!(h.courses.is_empty());
    assert!(h.courses.is_loaded());
    assert_eq!(CourseEditor::open(&h.courses, Some("clean-code")), EditorEntry::NotFound);
    assert_eq!(AuthorEditor::open(&h.authors, Some(AuthorId(1))), EditorEntry::NotFound);

    let mut author_editor = match AuthorEditor::open(&h.authors, None) {
        EditorEntry::New(draft) => AuthorEditor::new(draft),
        other => panic!("unexpected entry: {other:?}"),
    };
    author_editor.set_field(AuthorField::Name, "Cory House");
    let outcome = author_editor.submit(&h.author_actions).await.expect("submit should succeed");
    let author = match outcome {
        SubmitOutcome::Saved(author) => author,
        other => panic!("unexpected outcome: {other:?}"),
    };
    assert_eq!(author.id, AuthorId(1));

    let mut course_editor = match CourseEditor::open(&h.courses, None) {
        EditorEntry::New(draft) => CourseEditor::new(draft),
        other => panic!("unexpected entry: {other:?}"),
    };
    course_editor.set_field(CourseField::Title, "Clean Code");
    course_editor.set_field(CourseField::AuthorId, "1");
    course_editor.set_field(CourseField::Category, "Software Practices");
    let outcome = course_editor.submit(&h.course_actions).await.expect("submit should succeed");
    assert!(matches!(outcome, SubmitOutcome::Saved(_)));
    assert!(matches!(
        CourseEditor::open(&h.courses, Some("clean-code")),
        EditorEntry::Edit(_)
    ));
}

#[tokio::test]
async fn author_editor_requires_name() {
    let h = harness();
    h.author_actions.load_authors().await.expect("authors should load");
    assert_eq!(AuthorEditor::open(&h.authors, Some(AuthorId(9))), EditorEntry::NotFound);

    let mut editor = match AuthorEditor::open(&h.authors, Some(AuthorId(3))) {
        EditorEntry::Edit(draft) => AuthorEditor::new(draft),
        other => panic!("unexpected entry: {other:?}"),
    };
    editor.set_field(AuthorField::Name, "  ");
    assert!(matches!(
        editor.submit(&h.author_actions).await.expect("submit should succeed"),
        SubmitOutcome::Invalid(_)
    ));
    assert_eq!(editor.errors().get("name"), Some("Name is required"));

    editor.set_field(AuthorField::Name, "Dan W.");
    editor.submit(&h.author_actions).await.expect("submit should succeed");
    assert_eq!(h.authors.author_name(AuthorId(3)).as_deref(), Some("Dan W."));
}

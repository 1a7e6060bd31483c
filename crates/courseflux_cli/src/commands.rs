//! Subcommand execution.

use crate::{AuthorCommand, Command, CourseCommand};
use courseflux_core::seed::write_mock_db;
use courseflux_core::{
    core_version, ActionError, ApiError, AppConfig, AuthorActions, AuthorDraft, AuthorId,
    AuthorStore, CourseActions, CourseDraft, CourseId, CourseStore, Dispatcher, FormErrors,
    MockDb,
};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::rc::Rc;

#[derive(Debug)]
pub(crate) enum CommandError {
    Action(ActionError),
    /// Form input failed validation; nothing was saved.
    InvalidForm(FormErrors),
}

impl Display for CommandError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Action(err) => write!(f, "{err}"),
            Self::InvalidForm(errors) => {
                write!(f, "invalid input:")?;
                for (field, message) in errors.iter() {
                    write!(f, " {field}: {message};")?;
                }
                Ok(())
            }
        }
    }
}

impl Error for CommandError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Action(err) => Some(err),
            Self::InvalidForm(_) => None,
        }
    }
}

impl From<ActionError> for CommandError {
    fn from(value: ActionError) -> Self {
        Self::Action(value)
    }
}

impl From<ApiError> for CommandError {
    fn from(value: ApiError) -> Self {
        Self::Action(value.into())
    }
}

struct App {
    courses: Rc<CourseStore>,
    authors: Rc<AuthorStore>,
    course_actions: CourseActions<courseflux_core::CourseApi>,
    author_actions: AuthorActions<courseflux_core::AuthorApi>,
}

impl App {
    async fn open(config: &AppConfig) -> Result<Self, ActionError> {
        let db = MockDb::open(&config.db_path).await?;
        let hub = Rc::new(Dispatcher::new());
        Ok(Self {
            courses: CourseStore::register(&hub),
            authors: AuthorStore::register(&hub),
            course_actions: CourseActions::new(db.courses(), Rc::clone(&hub)),
            author_actions: AuthorActions::new(db.authors(), hub),
        })
    }

    async fn load(&self) -> Result<(), ActionError> {
        self.author_actions.load_authors().await?;
        self.course_actions.load_courses().await?;
        Ok(())
    }

    fn print_courses(&self) {
        println!("{:<4} {:<55} {:<16} {}", "ID", "TITLE", "AUTHOR", "CATEGORY");
        for course in self.courses.get_all() {
            let author = self
                .authors
                .author_name(course.author_id)
                .unwrap_or_else(|| format!("#{}", course.author_id));
            println!(
                "{:<4} {:<55} {:<16} {}",
                course.id.0, course.title, author, course.category
            );
        }
    }

    fn print_authors(&self) {
        println!("{:<4} {}", "ID", "NAME");
        for author in self.authors.get_all() {
            println!("{:<4} {}", author.id.0, author.name);
        }
    }
}

pub(crate) async fn run(config: &AppConfig, command: Command) -> Result<(), CommandError> {
    match command {
        Command::Version => {
            println!("courseflux_core version={}", core_version());
            Ok(())
        }
        Command::Seed => {
            let document = write_mock_db(&config.db_path).await?;
            println!(
                "Mock DB created at {} ({} courses, {} authors).",
                config.db_path.display(),
                document.courses.len(),
                document.authors.len()
            );
            Ok(())
        }
        Command::Courses(command) => {
            let app = App::open(config).await?;
            app.load().await?;
            match command {
                CourseCommand::List => {}
                CourseCommand::Add {
                    title,
                    author_id,
                    category,
                } => {
                    let draft = CourseDraft::new(title, author_id, category);
                    let errors = draft.validate();
                    if !errors.is_empty() {
                        return Err(CommandError::InvalidForm(errors));
                    }
                    let saved = app.course_actions.save_course(&draft).await?;
                    println!("Course saved: {} ({})", saved.title, saved.slug);
                }
                CourseCommand::Delete { id } => {
                    app.course_actions.delete_course(CourseId(id)).await?;
                    println!("Course deleted: {id}");
                }
            }
            app.print_courses();
            Ok(())
        }
        Command::Authors(command) => {
            let app = App::open(config).await?;
            app.load().await?;
            match command {
                AuthorCommand::List => {}
                AuthorCommand::Add { name } => {
                    let draft = AuthorDraft::new(name);
                    let errors = draft.validate();
                    if !errors.is_empty() {
                        return Err(CommandError::InvalidForm(errors));
                    }
                    let saved = app.author_actions.save_author(&draft).await?;
                    println!("Author saved: {} ({})", saved.name, saved.id);
                }
                AuthorCommand::Delete { id } => {
                    app.author_actions.delete_author(AuthorId(id)).await?;
                    println!("Author deleted: {id}");
                }
            }
            app.print_authors();
            Ok(())
        }
    }
}

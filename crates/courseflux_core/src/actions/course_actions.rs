//! Course action creators.

use crate::actions::ActionResult;
use crate::api::RecordApi;
use crate::dispatch::{Action, Dispatcher};
use crate::model::course::{Course, CourseDraft, CourseId};
use log::{error, info};
use std::rc::Rc;

/// Bridges course API calls into dispatched actions.
pub struct CourseActions<A> {
    api: A,
    dispatcher: Rc<Dispatcher>,
}

impl<A> CourseActions<A>
where
    A: RecordApi<Course, Draft = CourseDraft>,
{
    pub fn new(api: A, dispatcher: Rc<Dispatcher>) -> Self {
        Self { api, dispatcher }
    }

    /// Saves `draft`, then dispatches `UpdateCourse` when it carried an id
    /// and `CreateCourse` otherwise.
    pub async fn save_course(&self, draft: &CourseDraft) -> ActionResult<Course> {
        let saved = self.api.save(draft).await.inspect_err(|err| {
            error!("event=save_course module=actions status=error error={err}");
        })?;
        let action = if draft.is_new() {
            Action::CreateCourse(saved.clone())
        } else {
            Action::UpdateCourse(saved.clone())
        };
        self.dispatcher.dispatch(&action)?;
        info!(
            "event=save_course module=actions status=ok id={} action={}",
            saved.id,
            action.name()
        );
        Ok(saved)
    }

    pub async fn load_courses(&self) -> ActionResult<usize> {
        let courses = self.api.get_all().await.inspect_err(|err| {
            error!("event=load_courses module=actions status=error error={err}");
        })?;
        let count = courses.len();
        self.dispatcher.dispatch(&Action::LoadCourses(courses))?;
        info!("event=load_courses module=actions status=ok count={count}");
        Ok(count)
    }

    pub async fn delete_course(&self, id: CourseId) -> ActionResult<()> {
        self.api.delete_by_id(id).await.inspect_err(|err| {
            error!("event=delete_course module=actions status=error id={id} error={err}");
        })?;
        self.dispatcher.dispatch(&Action::DeleteCourse(id))?;
        info!("event=delete_course module=actions status=ok id={id}");
        Ok(())
    }
}

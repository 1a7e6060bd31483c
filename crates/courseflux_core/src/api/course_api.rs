//! Course endpoints.

use crate::api::{next_id, ApiError, ApiResult, MockDb, RecordApi};
use crate::model::author::AuthorId;
use crate::model::course::{slugify, Course, CourseDraft, CourseId};
use log::info;

const COLLECTION: &str = "courses";

/// Mocked `/courses` resource.
#[derive(Clone)]
pub struct CourseApi {
    db: MockDb,
}

impl CourseApi {
    pub fn new(db: MockDb) -> Self {
        Self { db }
    }
}

impl RecordApi<Course> for CourseApi {
    type Draft = CourseDraft;

    async fn get_all(&self) -> ApiResult<Vec<Course>> {
        Ok(self.db.read(|document| document.courses.clone()).await)
    }

    async fn get_by_id(&self, id: CourseId) -> ApiResult<Course> {
        self.db
            .read(|document| {
                document
                    .courses
                    .iter()
                    .find(|course| course.id == id)
                    .cloned()
            })
            .await
            .ok_or(ApiError::NotFound {
                collection: COLLECTION,
                id: id.0,
            })
    }

    async fn save(&self, draft: &CourseDraft) -> ApiResult<Course> {
        let author_id = validate_course_draft(draft)?;
        let saved = self
            .db
            .write(|document| {
                let courses = &mut document.courses;
                match draft.id {
                    Some(id) => {
                        if !courses.iter().any(|course| course.id == id) {
                            return Err(ApiError::NotFound {
                                collection: COLLECTION,
                                id: id.0,
                            });
                        }
                        let slug = if draft.slug.trim().is_empty() {
                            unique_slug(courses.as_slice(), slugify(&draft.title), Some(id))
                        } else if slug_taken(courses.as_slice(), &draft.slug, Some(id)) {
                            return Err(ApiError::Validation(format!(
                                "Slug `{}` is already in use",
                                draft.slug
                            )));
                        } else {
                            draft.slug.clone()
                        };
                        let course = Course {
                            id,
                            slug,
                            title: draft.title.clone(),
                            author_id,
                            category: draft.category.clone(),
                        };
                        if let Some(slot) = courses.iter_mut().find(|course| course.id == id) {
                            *slot = course.clone();
                        }
                        Ok(course)
                    }
                    None => {
                        let id = next_id(courses.as_slice(), COLLECTION, |course: &Course| {
                            course.id.0
                        })?;
                        let course = Course {
                            id: CourseId(id),
                            slug: unique_slug(courses.as_slice(), slugify(&draft.title), None),
                            title: draft.title.clone(),
                            author_id,
                            category: draft.category.clone(),
                        };
                        courses.push(course.clone());
                        Ok(course)
                    }
                }
            })
            .await?;

        info!(
            "event=api_save module=api status=ok collection={COLLECTION} id={} mode={}",
            saved.id,
            if draft.is_new() { "create" } else { "update" }
        );
        Ok(saved)
    }

    async fn delete_by_id(&self, id: CourseId) -> ApiResult<()> {
        self.db
            .write(|document| {
                let before = document.courses.len();
                document.courses.retain(|course| course.id != id);
                if document.courses.len() == before {
                    return Err(ApiError::NotFound {
                        collection: COLLECTION,
                        id: id.0,
                    });
                }
                Ok(())
            })
            .await?;
        info!("event=api_delete module=api status=ok collection={COLLECTION} id={id}");
        Ok(())
    }
}

fn validate_course_draft(draft: &CourseDraft) -> ApiResult<AuthorId> {
    if draft.title.trim().is_empty() {
        return Err(ApiError::Validation("Title is required".to_string()));
    }
    draft
        .author_id
        .filter(|author_id| author_id.0 != 0)
        .ok_or_else(|| ApiError::Validation("Author ID is required".to_string()))
}

fn slug_taken(courses: &[Course], slug: &str, own: Option<CourseId>) -> bool {
    courses
        .iter()
        .any(|course| course.slug == slug && Some(course.id) != own)
}

/// `base`, or the first free `base-N` starting at 2.
fn unique_slug(courses: &[Course], base: String, own: Option<CourseId>) -> String {
    if !slug_taken(courses, &base, own) {
        return base;
    }
    (2u64..)
        .map(|suffix| format!("{base}-{suffix}"))
        .find(|candidate| !slug_taken(courses, candidate, own))
        .unwrap_or(base)
}

//! Course record and draft.
//!
//! # Invariants
//! - `slug` is unique within a course collection and used for lookups.
//! - `author_id` references an `Author` by id, never by position.

use crate::model::author::AuthorId;
use crate::model::validation::FormErrors;
use crate::model::Record;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

static SLUG_SEPARATOR_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^a-z0-9]+").expect("valid slug separator regex"));

/// Stable numeric identifier for a course.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CourseId(pub u64);

impl Display for CourseId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Saved course record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    pub id: CourseId,
    pub slug: String,
    pub title: String,
    pub author_id: AuthorId,
    pub category: String,
}

impl Course {
    pub fn new(
        id: u64,
        title: impl Into<String>,
        author_id: u64,
        category: impl Into<String>,
    ) -> Self {
        let title = title.into();
        Self {
            id: CourseId(id),
            slug: slugify(&title),
            title,
            author_id: AuthorId(author_id),
            category: category.into(),
        }
    }

    /// Converts the record back into editable form input.
    pub fn to_draft(&self) -> CourseDraft {
        CourseDraft {
            id: Some(self.id),
            slug: self.slug.clone(),
            title: self.title.clone(),
            author_id: Some(self.author_id),
            category: self.category.clone(),
        }
    }
}

impl Record for Course {
    type Id = CourseId;

    fn id(&self) -> CourseId {
        self.id
    }
}

/// Unsaved course form input.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseDraft {
    /// `None` until the API assigns an id.
    pub id: Option<CourseId>,
    /// Empty for new courses; derived from the title on first save.
    pub slug: String,
    pub title: String,
    pub author_id: Option<AuthorId>,
    pub category: String,
}

impl CourseDraft {
    pub fn new(title: impl Into<String>, author_id: u64, category: impl Into<String>) -> Self {
        Self {
            id: None,
            slug: String::new(),
            title: title.into(),
            author_id: Some(AuthorId(author_id)),
            category: category.into(),
        }
    }

    pub fn is_new(&self) -> bool {
        self.id.is_none()
    }

    /// Presence checks run before submitting the form.
    pub fn validate(&self) -> FormErrors {
        let mut errors = FormErrors::new();
        errors.require("title", &self.title, "Title is required");
        if self.author_id.map_or(true, |id| id.0 == 0) {
            errors.insert("author_id", "Author ID is required");
        }
        errors.require("category", &self.category, "Category is required");
        errors
    }
}

/// Derives a URL slug from a course title.
///
/// Lowercases, collapses every run of non-alphanumerics into one `-`
/// and trims separators from both ends.
pub fn slugify(title: &str) -> String {
    let lowered = title.trim().to_lowercase();
    SLUG_SEPARATOR_RE
        .replace_all(&lowered, "-")
        .trim_matches('-')
        .to_string()
}

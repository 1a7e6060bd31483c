//! Author record and draft.

use crate::model::validation::FormErrors;
use crate::model::Record;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Stable numeric identifier for an author.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AuthorId(pub u64);

impl Display for AuthorId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Saved author record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Author {
    pub id: AuthorId,
    pub name: String,
}

impl Author {
    pub fn new(id: u64, name: impl Into<String>) -> Self {
        Self {
            id: AuthorId(id),
            name: name.into(),
        }
    }

    pub fn to_draft(&self) -> AuthorDraft {
        AuthorDraft {
            id: Some(self.id),
            name: self.name.clone(),
        }
    }
}

impl Record for Author {
    type Id = AuthorId;

    fn id(&self) -> AuthorId {
        self.id
    }
}

/// Unsaved author form input.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthorDraft {
    pub id: Option<AuthorId>,
    pub name: String,
}

impl AuthorDraft {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
        }
    }

    pub fn is_new(&self) -> bool {
        self.id.is_none()
    }

    pub fn validate(&self) -> FormErrors {
        let mut errors = FormErrors::new();
        errors.require("name", &self.name, "Name is required");
        errors
    }
}

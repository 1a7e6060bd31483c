//! Shared JSON document behind the mocked endpoints.

use crate::api::{ApiError, ApiResult, AuthorApi, CourseApi};
use crate::model::author::Author;
use crate::model::course::Course;
use log::{error, info};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::Mutex;

/// On-disk shape of `db.json`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DbDocument {
    #[serde(default)]
    pub courses: Vec<Course>,
    #[serde(default)]
    pub authors: Vec<Author>,
}

impl DbDocument {
    pub fn from_json(text: &str) -> ApiResult<Self> {
        Ok(serde_json::from_str(text)?)
    }

    pub fn to_json(&self) -> ApiResult<String> {
        Ok(serde_json::to_string(self)?)
    }
}

struct DbState {
    path: Option<PathBuf>,
    document: DbDocument,
}

/// Handle to the mock database; clones share the same document.
#[derive(Clone)]
pub struct MockDb {
    state: Arc<Mutex<DbState>>,
}

impl MockDb {
    /// Loads `path` and keeps writing changes back to it.
    pub async fn open(path: impl AsRef<Path>) -> ApiResult<Self> {
        let path = path.as_ref().to_path_buf();
        let started_at = Instant::now();
        info!("event=mock_db_open module=api status=start path={}", path.display());

        let text = match tokio::fs::read_to_string(&path).await {
            Ok(text) => text,
            Err(source) => {
                error!(
                    "event=mock_db_open module=api status=error duration_ms={} error_code=read_failed error={}",
                    started_at.elapsed().as_millis(),
                    source
                );
                return Err(ApiError::Io { path, source });
            }
        };
        let document = DbDocument::from_json(&text)?;

        info!(
            "event=mock_db_open module=api status=ok duration_ms={} courses={} authors={}",
            started_at.elapsed().as_millis(),
            document.courses.len(),
            document.authors.len()
        );
        Ok(Self::with_state(Some(path), document))
    }

    /// Keeps the document in memory only.
    pub fn in_memory(document: DbDocument) -> Self {
        Self::with_state(None, document)
    }

    fn with_state(path: Option<PathBuf>, document: DbDocument) -> Self {
        Self {
            state: Arc::new(Mutex::new(DbState { path, document })),
        }
    }

    pub fn courses(&self) -> CourseApi {
        CourseApi::new(self.clone())
    }

    pub fn authors(&self) -> AuthorApi {
        AuthorApi::new(self.clone())
    }

    /// Copy of the current document.
    pub async fn snapshot(&self) -> DbDocument {
        self.state.lock().await.document.clone()
    }

    pub(crate) async fn read<R, F>(&self, reader: F) -> R
    where
        F: FnOnce(&DbDocument) -> R,
    {
        let state = self.state.lock().await;
        reader(&state.document)
    }

    /// Applies `writer` and persists when it succeeds.
    ///
    /// The in-memory document is only replaced once the file write succeeded.
    pub(crate) async fn write<R, F>(&self, writer: F) -> ApiResult<R>
    where
        F: FnOnce(&mut DbDocument) -> ApiResult<R>,
    {
        let mut state = self.state.lock().await;
        let mut next = state.document.clone();
        let result = writer(&mut next)?;

        if let Some(path) = state.path.clone() {
            let bytes = serde_json::to_vec(&next)?;
            if let Err(source) = tokio::fs::write(&path, bytes).await {
                error!(
                    "event=mock_db_persist module=api status=error error_code=write_failed path={} error={}",
                    path.display(),
                    source
                );
                return Err(ApiError::Io { path, source });
            }
        }

        state.document = next;
        Ok(result)
    }
}

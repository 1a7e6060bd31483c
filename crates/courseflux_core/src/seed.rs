//! One-shot mock DB seeding.
//!
//! # Responsibility
//! - Ship the bundled sample courses/authors.
//! - Write them as a fresh `db.json` for the mocked API.

use crate::api::{ApiError, ApiResult, DbDocument};
use log::{error, info};
use std::path::Path;

const MOCK_DATA_JSON: &str = include_str!("../data/mock_data.json");

/// Bundled sample data.
pub fn mock_data() -> ApiResult<DbDocument> {
    DbDocument::from_json(MOCK_DATA_JSON)
}

/// Writes the bundled sample data to `path`, replacing any existing file.
pub async fn write_mock_db(path: impl AsRef<Path>) -> ApiResult<DbDocument> {
    let path = path.as_ref();
    let document = mock_data()?;
    let json = document.to_json()?;

    match tokio::fs::write(path, json).await {
        Ok(()) => {
            info!(
                "event=mock_db_write module=seed status=ok path={} courses={} authors={}",
                path.display(),
                document.courses.len(),
                document.authors.len()
            );
            Ok(document)
        }
        Err(source) => {
            error!(
                "event=mock_db_write module=seed status=error path={} error={}",
                path.display(),
                source
            );
            Err(ApiError::Io {
                path: path.to_path_buf(),
                source,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::mock_data;
    use std::collections::HashSet;

    #[test]
    fn bundled_data_has_unique_ids_and_slugs() {
        let document = mock_data().expect("bundled mock data should parse");
        assert_eq!(document.courses.len(), 10);
        assert_eq!(document.authors.len(), 3);

        let ids: HashSet<_> = document.courses.iter().map(|course| course.id).collect();
        let slugs: HashSet<_> = document.courses.iter().map(|course| &course.slug).collect();
        assert_eq!(ids.len(), document.courses.len());
        assert_eq!(slugs.len(), document.courses.len());
    }
}

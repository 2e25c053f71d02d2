//! Project source backed by a local `projects.json`.

use std::path::PathBuf;

use async_trait::async_trait;
use log::{debug, info};

use crate::catalog::source::{CatalogError, ProjectSource, parse_projects};
use crate::catalog::types::Project;

pub struct FileProjectSource {
    path: PathBuf,
}

impl FileProjectSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl ProjectSource for FileProjectSource {
    fn name(&self) -> &str {
        "file"
    }

    async fn fetch_projects(&self) -> Result<Vec<Project>, CatalogError> {
        debug!("Reading projects from {}", self.path.display());
        let body = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|e| CatalogError::Io(format!("{}: {}", self.path.display(), e)))?;
        let projects = parse_projects(&body)?;
        info!(
            "Loaded {} projects from {}",
            projects.len(),
            self.path.display()
        );
        Ok(projects)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("dashhead-{}-{}", std::process::id(), name))
    }

    #[tokio::test]
    async fn test_reads_collection() {
        let path = temp_path("projects-ok.json");
        std::fs::write(
            &path,
            r#"[{"id":1,"name":"Atrium","startDate":"2024-01-01","endDate":"2024-02-01","status":"Done","venue":{"name":"Main"}}]"#,
        )
        .unwrap();

        let source = FileProjectSource::new(&path);
        let projects = source.fetch_projects().await.unwrap();
        assert_eq!(projects.len(), 1);
        assert_eq!(projects[0].name, "Atrium");

        std::fs::remove_file(&path).ok();
    }

    #[tokio::test]
    async fn test_missing_file_is_io_error() {
        let source = FileProjectSource::new(temp_path("does-not-exist.json"));
        let err = source.fetch_projects().await.unwrap_err();
        assert!(matches!(err, CatalogError::Io(_)));
    }

    #[tokio::test]
    async fn test_malformed_file_is_parse_error() {
        let path = temp_path("projects-bad.json");
        std::fs::write(&path, "[{\"id\": \"oops\"}]").unwrap();

        let source = FileProjectSource::new(&path);
        let err = source.fetch_projects().await.unwrap_err();
        assert!(matches!(err, CatalogError::Parse(_)));

        std::fs::remove_file(&path).ok();
    }
}

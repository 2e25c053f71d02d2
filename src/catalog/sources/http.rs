//! Project source that GETs a static JSON collection over HTTP.

use async_trait::async_trait;
use log::{debug, info, warn};

use crate::catalog::source::{CatalogError, ProjectSource, parse_projects};
use crate::catalog::types::Project;

pub struct HttpProjectSource {
    url: String,
    client: reqwest::Client,
}

impl HttpProjectSource {
    pub fn new(url: String) -> Self {
        Self {
            url,
            client: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl ProjectSource for HttpProjectSource {
    fn name(&self) -> &str {
        "http"
    }

    async fn fetch_projects(&self) -> Result<Vec<Project>, CatalogError> {
        debug!("GET {}", self.url);
        let response = self
            .client
            .get(&self.url)
            .send()
            .await
            .map_err(|e| CatalogError::Network(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let err_body = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            warn!("Project collection error: {} - {}", status, err_body);
            return Err(CatalogError::Api {
                status,
                message: err_body,
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| CatalogError::Network(e.to_string()))?;
        let projects = parse_projects(&body)?;
        info!("Fetched {} projects from {}", projects.len(), self.url);
        Ok(projects)
    }
}

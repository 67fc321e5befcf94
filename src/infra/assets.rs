//! Static asset serving from a directory on disk.

use std::path::{Path, PathBuf};

use axum::{
    body::Body,
    extract::Request,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use tower::ServiceExt;
use tower_http::services::ServeDir;

use crate::application::error::ErrorReport;

const SOURCE: &str = "infra::assets::serve";

/// Read-only view of the static asset directory.
#[derive(Debug, Clone)]
pub struct StaticAssets {
    root: PathBuf,
    service: ServeDir,
}

impl StaticAssets {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        let root = root.into();
        // Directories are not listed and have no implicit index page.
        let service = ServeDir::new(&root).append_index_html_on_directories(false);
        Self { root, service }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Stream the file the request path names, or 404 if there is none.
    pub async fn serve(&self, request: Request) -> Response {
        let Ok(response) = self.service.clone().oneshot(request).await;
        let response = response.map(Body::new);

        match response.status() {
            StatusCode::NOT_FOUND => not_found_response(),
            _ => response,
        }
    }
}

fn not_found_response() -> Response {
    let mut response = (StatusCode::NOT_FOUND, "404 page not found").into_response();
    ErrorReport::from_message(SOURCE, StatusCode::NOT_FOUND, "Static asset not found")
        .attach(&mut response);
    response
}

// src/server/pages.rs
// Static HTML page routes (home, self-care, nutrition, wellness)

use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use std::path::PathBuf;
use tracing::{error, warn};

use crate::error::PageError;
use crate::server::state::AppState;

/// Reads page files from the templates directory on each request
#[derive(Debug, Clone)]
pub struct PageStore {
    dir: PathBuf,
}

impl PageStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub async fn load(&self, name: &str) -> Result<String, PageError> {
        let path = self.dir.join(name);
        match tokio::fs::read_to_string(&path).await {
            Ok(html) => Ok(html),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                Err(PageError::NotFound(name.to_string()))
            }
            Err(e) => Err(PageError::Io(e)),
        }
    }
}

impl IntoResponse for PageError {
    fn into_response(self) -> Response {
        match self {
            PageError::NotFound(name) => {
                warn!(page = %name, "page template missing");
                (StatusCode::NOT_FOUND, format!("page not found: {}", name)).into_response()
            }
            PageError::Io(e) => {
                error!(error = %e, "failed to read page template");
                (StatusCode::INTERNAL_SERVER_ERROR, "failed to load page").into_response()
            }
        }
    }
}

async fn render(state: &AppState, name: &str) -> Result<Html<String>, PageError> {
    state.pages.load(name).await.map(Html)
}

pub async fn home(State(state): State<AppState>) -> Result<Html<String>, PageError> {
    render(&state, "index.html").await
}

pub async fn selfcare(State(state): State<AppState>) -> Result<Html<String>, PageError> {
    render(&state, "selfcare.html").await
}

pub async fn nutrition(State(state): State<AppState>) -> Result<Html<String>, PageError> {
    render(&state, "nutrition.html").await
}

pub async fn wellness(State(state): State<AppState>) -> Result<Html<String>, PageError> {
    render(&state, "wellness.html").await
}

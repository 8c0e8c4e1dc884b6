// src/server/state.rs
// Shared, read-only application state

use std::path::PathBuf;
use std::sync::Arc;

use crate::gateway::TextGenerator;
use crate::server::pages::PageStore;

/// State handed to every handler. Nothing in here is mutated after startup.
#[derive(Clone)]
pub struct AppState {
    /// Text-generation backend (watsonx.ai in production)
    pub generator: Arc<dyn TextGenerator>,

    /// HTML pages served by the page routes
    pub pages: Arc<PageStore>,

    /// Directory mounted at /static
    pub static_dir: PathBuf,
}

impl AppState {
    pub fn new(
        generator: Arc<dyn TextGenerator>,
        templates_dir: impl Into<PathBuf>,
        static_dir: impl Into<PathBuf>,
    ) -> Self {
        Self {
            generator,
            pages: Arc::new(PageStore::new(templates_dir)),
            static_dir: static_dir.into(),
        }
    }
}

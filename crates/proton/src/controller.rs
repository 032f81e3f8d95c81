// File: src/controller.rs
// Purpose: Existence-checked view rendering for route actions

use serde_json::Value as JsonValue;
use std::fs;
use std::path::{Component, Path, PathBuf};
use thiserror::Error;
use tracing::{debug, warn};

use axum::http::StatusCode;

use crate::config::ViewsConfig;
use crate::renderer::{RenderResult, Renderer};

#[derive(Debug, Error)]
pub enum ViewError {
    /// No view file exists for the requested path
    #[error("view not found: {0}")]
    NotFound(String),

    #[error("failed to read view {path:?}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ViewError {
    /// HTTP status a dispatcher should answer with
    pub fn status_code(&self) -> StatusCode {
        match self {
            ViewError::NotFound(_) => StatusCode::NOT_FOUND,
            ViewError::Io { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Base for route actions that render views
///
/// A view named `users/list` resolves to `<dir>/users/list.<extension>`.
#[derive(Debug, Clone)]
pub struct Controller {
    views_dir: PathBuf,
    extension: String,
}

impl Controller {
    pub fn new(views_dir: impl Into<PathBuf>, extension: impl Into<String>) -> Self {
        Self {
            views_dir: views_dir.into(),
            extension: extension.into(),
        }
    }

    pub fn from_config(config: &ViewsConfig) -> Self {
        Self::new(&config.dir, &config.extension)
    }

    /// File backing a view, or `None` if the name would leave the views
    /// directory
    pub fn view_path(&self, path: &str) -> Option<PathBuf> {
        let relative = Path::new(path);
        let escapes = relative
            .components()
            .any(|component| !matches!(component, Component::Normal(_)));
        if path.is_empty() || escapes {
            return None;
        }
        Some(
            self.views_dir
                .join(format!("{}.{}", path, self.extension)),
        )
    }

    /// Renders a view with `data` (a JSON object) as its variables
    pub fn view(&self, path: &str, data: &JsonValue) -> Result<RenderResult, ViewError> {
        let file = match self.view_path(path) {
            Some(file) if file.is_file() => file,
            _ => {
                warn!(view = path, "view not found");
                return Err(ViewError::NotFound(path.to_string()));
            }
        };

        let content = fs::read_to_string(&file).map_err(|source| ViewError::Io {
            path: file.clone(),
            source,
        })?;

        debug!(view = path, file = ?file, "rendering view");
        Ok(Renderer::with_data(data).render(&content))
    }
}

impl Default for Controller {
    fn default() -> Self {
        Self::from_config(&ViewsConfig::default())
    }
}

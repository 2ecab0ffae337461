mod handlers;

use std::path::PathBuf;
use std::sync::Arc;

use axum::{routing::get, Router};
use tower_http::{cors::CorsLayer, services::ServeDir, trace::TraceLayer};

use toolshelf_core::page::{render_page, PageOptions};
use toolshelf_core::Catalog;

use crate::config::ServeConfig;

pub use handlers::ToolResponse;

/// Shared, read-only state of the HTTP host.
#[derive(Clone)]
pub struct AppState {
    catalog: Arc<Catalog>,
    page: Arc<String>,
    tools_dir: PathBuf,
    pkg_dir: PathBuf,
}

impl AppState {
    /// Build the state; the page shell is rendered once, here.
    pub fn new(catalog: Catalog, config: &ServeConfig) -> Self {
        let page = render_page(&catalog, &PageOptions::default());
        Self {
            catalog: Arc::new(catalog),
            page: Arc::new(page),
            tools_dir: config.tools_dir.clone(),
            pkg_dir: config.pkg_dir.clone(),
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }
}

pub fn create_router(state: AppState) -> Router {
    let api = Router::new()
        .route("/catalog", get(handlers::get_catalog))
        .route("/tools/{index}", get(handlers::get_tool))
        .route("/health", get(handlers::health));

    Router::new()
        .route("/", get(handlers::index))
        .route("/index.html", get(handlers::index))
        .nest("/api/v1", api)
        .nest_service("/tools", ServeDir::new(&state.tools_dir))
        .nest_service("/pkg", ServeDir::new(&state.pkg_dir))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

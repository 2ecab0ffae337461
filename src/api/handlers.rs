use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    Json,
};
use serde::Serialize;

use toolshelf_core::{render, DownloadLink, Expansion, Tool};

use super::AppState;

/// A tool addressed by its row index in the rendered tree.
#[derive(Debug, Serialize)]
pub struct ToolResponse<'a> {
    pub index: usize,
    #[serde(flatten)]
    pub tool: &'a Tool,
    pub download: Option<DownloadLink>,
}

pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "ok" }))
}

pub async fn index(State(state): State<AppState>) -> Html<String> {
    Html(state.page.as_str().to_owned())
}

pub async fn get_catalog(State(state): State<AppState>) -> Response {
    Json(state.catalog()).into_response()
}

pub async fn get_tool(
    State(state): State<AppState>,
    Path(index): Path<usize>,
) -> Result<Response, (StatusCode, String)> {
    let tree = render(state.catalog(), &Expansion::default());
    let row = tree.row(index).ok_or_else(|| {
        tracing::debug!(index, "Tool lookup out of range");
        (StatusCode::NOT_FOUND, "Tool not found".to_string())
    })?;

    Ok(Json(ToolResponse {
        index: row.index,
        tool: row.tool,
        download: row.download(),
    })
    .into_response())
}

use std::path::PathBuf;
use std::sync::Arc;

use axum::{
    extract::{Path, State},
    response::Html,
    Json,
};
use campusmap_shared::models::{DatasetKind, FieldEntry};
use serde_json::Value;

use crate::assets::Assets;
use crate::error::AppError;

#[derive(Clone)]
pub struct AppState {
    pub assets: Arc<Assets>,
    pub dist_dir: PathBuf,
}

/// `GET /api/wherestudy`
pub async fn where_study(State(state): State<AppState>) -> Json<Vec<FieldEntry>> {
    Json(state.assets.fields.clone())
}

/// `GET /api/schools/{kind}`: the nested school -> campus dataset.
pub async fn schools(
    State(state): State<AppState>,
    Path(kind): Path<String>,
) -> Result<Json<Value>, AppError> {
    let kind: DatasetKind = kind.parse()?;
    let data = state.assets.dataset(kind).cloned().unwrap_or_else(|| {
        tracing::warn!(%kind, "No dataset loaded");
        Value::Object(Default::default())
    });
    Ok(Json(data))
}

/// Serve the built frontend, falling back to a short notice.
pub async fn serve_index(State(state): State<AppState>) -> Html<String> {
    match tokio::fs::read_to_string(state.dist_dir.join("index.html")).await {
        Ok(html) => Html(html),
        Err(_) => Html(
            r#"<!DOCTYPE html>
<html>
<head><title>Campus Map</title></head>
<body>
<h1>Campus Map</h1>
<p>Frontend not built yet. The API is available at <a href="/api/wherestudy">/api/wherestudy</a>.</p>
</body>
</html>"#
                .to_string(),
        ),
    }
}

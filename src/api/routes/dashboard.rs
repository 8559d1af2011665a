//! Dashboard Routes
//!
//! - GET / - Dashboard page
//! - GET /api/v1/layout - Page structure and initial render
//! - GET /api/v1/countries - Dropdown options
//! - POST /api/v1/view - Recompute outputs for a selection
//! - Anything else - 404 with a JSON error body

use axum::{
    extract::{rejection::JsonRejection, State},
    http::Uri,
    response::Html,
    Json,
};
use std::sync::Arc;

use crate::api::dto::ViewRequest;
use crate::api::error::{ApiError, ApiResult};
use crate::api::state::AppState;
use crate::dashboard::{DashboardLayout, DashboardUpdate, DropdownOption};

const INDEX_HTML: &str = include_str!("../../../assets/index.html");

/// GET /
pub async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

/// GET /api/v1/layout
pub async fn get_layout(State(state): State<Arc<AppState>>) -> Json<DashboardLayout> {
    Json(state.dashboard.layout())
}

/// GET /api/v1/countries
pub async fn list_countries(State(state): State<Arc<AppState>>) -> Json<Vec<DropdownOption>> {
    Json(state.dashboard.options())
}

/// POST /api/v1/view
///
/// Same computation the WebSocket runs on each selection change.
pub async fn compute_view(
    State(state): State<Arc<AppState>>,
    body: Result<Json<ViewRequest>, JsonRejection>,
) -> ApiResult<Json<DashboardUpdate>> {
    let Json(request) = body.map_err(|e| ApiError::Validation(e.body_text()))?;

    tracing::debug!(selected = request.countries.len(), "View requested");

    Ok(Json(state.dashboard.update(&request.countries)))
}

/// Fallback for unknown routes
pub async fn not_found(uri: Uri) -> ApiError {
    ApiError::NotFound(uri.path().to_string())
}

use crate::error::{AppError, Result};
use crate::model::{ApiResponse, SaveRequest, SaveResponse};
use crate::state::AppState;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::Json;
use tracing::info;
use wormhole_core::SaveParams;

pub async fn save_url_handler(
    State(state): State<AppState>,
    request: std::result::Result<Json<SaveRequest>, JsonRejection>,
) -> Result<Json<SaveResponse>> {
    let Json(request) = request.map_err(|e| AppError::InvalidRequest(e.body_text()))?;

    let params = SaveParams {
        url: request.url,
        alias: request.alias,
        cancel: state.shutdown().child_token(),
    };

    let saved = state.shortener().save(params).await?;
    info!(alias = %saved.alias, id = %saved.id, "url added");

    Ok(Json(SaveResponse::ok(saved.alias.into_inner())))
}

pub async fn delete_url_handler(
    Path(alias): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<ApiResponse>> {
    state.shortener().remove(&alias).await?;
    info!(alias = %alias, "alias deleted");

    Ok(Json(ApiResponse::ok()))
}

use crate::error::{AppError, Result};
use crate::state::AppState;
use axum::extract::{Path, State};
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use tracing::{debug, error};
use url::Url;

/// Answers `302 Found` pointing at the stored URL.
pub async fn redirect_handler(
    Path(alias): Path<String>,
    State(state): State<AppState>,
) -> Result<Response> {
    let target = state.shortener().resolve(&alias).await?;
    debug!(alias = %alias, url = %target, "got url");

    let parsed = Url::parse(&target).map_err(|e| {
        error!(alias = %alias, original_url = %target, error = %e, "stored url does not parse");
        AppError::MalformedTarget(target.clone())
    })?;

    Ok((StatusCode::FOUND, [(header::LOCATION, parsed.to_string())]).into_response())
}

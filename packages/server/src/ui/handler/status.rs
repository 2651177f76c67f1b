//! Heartbeat endpoint.

use std::sync::Arc;

use axum::{extract::State, http::StatusCode};

use crate::ui::{error::ApiError, extractor::CallerIdentity, state::AppState};

/// `POST /status`
pub async fn heartbeat(
    State(state): State<Arc<AppState>>,
    CallerIdentity(name): CallerIdentity,
) -> Result<StatusCode, ApiError> {
    state.heartbeat_usecase.execute(name).await?;
    Ok(StatusCode::OK)
}

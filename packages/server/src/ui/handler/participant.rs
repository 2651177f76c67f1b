//! Participant registry endpoints.

use std::sync::Arc;

use axum::{Json, extract::State, http::StatusCode};

use crate::{
    infrastructure::dto::http::{ParticipantDto, RegisterParticipantRequest},
    ui::{error::ApiError, state::AppState},
};

/// `POST /participants`
pub async fn register_participant(
    State(state): State<Arc<AppState>>,
    Json(request): Json<RegisterParticipantRequest>,
) -> Result<StatusCode, ApiError> {
    state
        .register_participant_usecase
        .execute(request.name)
        .await?;
    Ok(StatusCode::CREATED)
}

/// `GET /participants`
pub async fn list_participants(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<ParticipantDto>>, ApiError> {
    let participants = state.list_participants_usecase.execute().await?;

    // Domain Model から DTO への変換
    Ok(Json(participants.into_iter().map(Into::into).collect()))
}

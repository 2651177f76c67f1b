//! Message log endpoints.

use std::sync::Arc;

use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::{
    infrastructure::dto::http::{ListMessagesQuery, MessageDto, PostMessageRequest},
    ui::{error::ApiError, extractor::CallerIdentity, state::AppState},
    usecase::MessageDraft,
};

/// Body returned when no message is visible to the caller.
const NO_MESSAGES_BODY: &str = "No messages";

/// Result of a message listing as seen by HTTP clients.
///
/// Clients expect an empty mailbox to be answered with 404, so the empty
/// case gets its own variant instead of an error.
#[derive(Debug)]
pub enum MessageListing {
    Found(Vec<MessageDto>),
    Empty,
}

impl From<Vec<MessageDto>> for MessageListing {
    fn from(messages: Vec<MessageDto>) -> Self {
        if messages.is_empty() {
            MessageListing::Empty
        } else {
            MessageListing::Found(messages)
        }
    }
}

impl IntoResponse for MessageListing {
    fn into_response(self) -> Response {
        match self {
            MessageListing::Found(messages) => Json(messages).into_response(),
            MessageListing::Empty => (StatusCode::NOT_FOUND, NO_MESSAGES_BODY).into_response(),
        }
    }
}

/// `POST /messages`
pub async fn post_message(
    State(state): State<Arc<AppState>>,
    CallerIdentity(from): CallerIdentity,
    Json(request): Json<PostMessageRequest>,
) -> Result<StatusCode, ApiError> {
    let draft = MessageDraft {
        from,
        to: request.to,
        text: request.text,
        kind: request.kind,
    };
    state.post_message_usecase.execute(draft).await?;
    Ok(StatusCode::CREATED)
}

/// `GET /messages`
pub async fn list_messages(
    State(state): State<Arc<AppState>>,
    CallerIdentity(viewer): CallerIdentity,
    Query(query): Query<ListMessagesQuery>,
) -> Result<MessageListing, ApiError> {
    let messages = state
        .list_messages_usecase
        .execute(viewer, query.limit)
        .await?;

    // Domain Model から DTO への変換
    let messages: Vec<MessageDto> = messages.into_iter().map(Into::into).collect();
    Ok(messages.into())
}

//! Conversion logic between DTOs and domain entities.

use crate::domain::entity;
use crate::infrastructure::dto::http as dto;

// ========================================
// Domain Entity → DTO
// ========================================

impl From<entity::Participant> for dto::ParticipantDto {
    fn from(model: entity::Participant) -> Self {
        Self {
            id: model.id.to_string(),
            name: model.name.into_string(),
            last_status: model.last_status.value(),
        }
    }
}

impl From<entity::Message> for dto::MessageDto {
    fn from(model: entity::Message) -> Self {
        Self {
            id: model.id.to_string(),
            from: model.from.into_string(),
            to: model.to.into_string(),
            text: model.text.into_string(),
            kind: model.kind.as_str().to_string(),
            time: model.time,
        }
    }
}

//! Domain layer for the chat room.
//!
//! This module contains business logic that is independent of
//! data transfer objects (DTOs) and infrastructure concerns.

pub mod entity;
pub mod error;
pub mod factory;
pub mod repository;
pub mod value_object;

pub use entity::{JOIN_NOTICE, LEAVE_NOTICE, Message, Participant};
pub use error::{RepositoryError, ValidationErrors, ValueObjectError};
pub use factory::DocumentIdFactory;
pub use repository::{MessageRepository, ParticipantRepository};
pub use value_object::{
    BROADCAST_TARGET, DocumentId, MIN_NAME_LENGTH, MessageKind, MessageLimit, MessageText,
    ParticipantName, Recipient, Timestamp, required,
};

#[cfg(test)]
pub use repository::{MockMessageRepository, MockParticipantRepository};

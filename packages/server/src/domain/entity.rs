//! Core domain models for the chat room.

use serde::{Deserialize, Serialize};

use super::{
    factory::DocumentIdFactory,
    value_object::{
        DocumentId, MessageKind, MessageText, ParticipantName, Recipient, Timestamp,
    },
};

/// Text of the notice emitted when a participant registers
pub const JOIN_NOTICE: &str = "entrei na sala...";

/// Text of the notice emitted when a participant is swept for inactivity
pub const LEAVE_NOTICE: &str = "sai da sala...";

/// A registered participant
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Participant {
    /// Document identifier
    pub id: DocumentId,
    /// Unique display name
    pub name: ParticipantName,
    /// Timestamp of the last sign of life (registration or heartbeat)
    pub last_status: Timestamp,
}

impl Participant {
    /// Create a new participant seen at `last_status`
    pub fn new(name: ParticipantName, last_status: Timestamp) -> Self {
        Self {
            id: DocumentIdFactory::generate(),
            name,
            last_status,
        }
    }

    /// Whether the last heartbeat is at or before `cutoff`
    pub fn is_inactive_since(&self, cutoff: Timestamp) -> bool {
        self.last_status <= cutoff
    }
}

/// Represents a chat entry in the message log
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    /// Document identifier
    pub id: DocumentId,
    /// Sender name
    pub from: ParticipantName,
    /// Recipient name or the broadcast target
    pub to: Recipient,
    /// Message body
    pub text: MessageText,
    /// Entry kind
    pub kind: MessageKind,
    /// Wall-clock creation time (`HH:MM:SS`), display only
    pub time: String,
}

impl Message {
    /// Create a new chat entry
    pub fn new(
        from: ParticipantName,
        to: Recipient,
        text: MessageText,
        kind: MessageKind,
        time: String,
    ) -> Self {
        Self {
            id: DocumentIdFactory::generate(),
            from,
            to,
            text,
            kind,
            time,
        }
    }

    /// Status notice announcing that `name` joined
    pub fn joined(name: ParticipantName, time: String) -> Self {
        Self::status(name, JOIN_NOTICE, time)
    }

    /// Status notice announcing that `name` left
    pub fn left(name: ParticipantName, time: String) -> Self {
        Self::status(name, LEAVE_NOTICE, time)
    }

    fn status(name: ParticipantName, notice: &str, time: String) -> Self {
        Self::new(
            name,
            Recipient::broadcast(),
            MessageText(notice.to_string()),
            MessageKind::Status,
            time,
        )
    }

    /// Whether `viewer` may see this entry.
    ///
    /// Visible when the viewer sent it, it is addressed to the viewer or to
    /// everyone, or it is a public message. An anonymous viewer only gets
    /// the last two.
    pub fn is_visible_to(&self, viewer: Option<&str>) -> bool {
        if self.to.is_broadcast() || self.kind == MessageKind::Message {
            return true;
        }
        match viewer {
            Some(viewer) => self.from.as_str() == viewer || self.to.as_str() == viewer,
            None => false,
        }
    }
}

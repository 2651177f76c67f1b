//! Value Objects for domain models.
//!
//! Value Objects are immutable objects that represent values in the domain.
//! They are compared by their value, not by identity.

use std::{fmt, num::NonZeroUsize};

use serde::{Deserialize, Serialize};

use super::error::ValueObjectError;

/// Reserved recipient that addresses everyone in the room.
pub const BROADCAST_TARGET: &str = "Todos";

/// Minimum length (in characters) of participant names and recipients.
pub const MIN_NAME_LENGTH: usize = 3;

/// Unwrap an optional input field, reporting it as required when absent.
pub fn required(field: &'static str, value: Option<String>) -> Result<String, ValueObjectError> {
    value.ok_or(ValueObjectError::Required { field })
}

fn check_min_length(
    field: &'static str,
    value: &str,
    min: usize,
) -> Result<(), ValueObjectError> {
    if value.is_empty() {
        return Err(ValueObjectError::Empty { field });
    }
    let actual = value.chars().count();
    if actual < min {
        return Err(ValueObjectError::TooShort { field, min, actual });
    }
    Ok(())
}

/// Store-assigned document identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DocumentId(String);

impl DocumentId {
    /// Create a DocumentId from a UUID.
    pub fn from_uuid(uuid: uuid::Uuid) -> Self {
        Self(uuid.to_string())
    }

    /// Get the inner string value.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DocumentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Participant display name value object.
///
/// Unique within the registry. Also used as the sender of a message, in
/// which case only non-emptiness is enforced.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ParticipantName(String);

impl ParticipantName {
    /// Create a new ParticipantName, validated as the `name` field.
    ///
    /// # Errors
    ///
    /// Fails when the name is empty or shorter than [`MIN_NAME_LENGTH`].
    pub fn new(name: String) -> Result<Self, ValueObjectError> {
        Self::for_field("name", name)
    }

    /// Create a ParticipantName taken from the caller identity (`from` field).
    ///
    /// Any non-empty identity is accepted; the minimum length applies to
    /// registration only.
    pub fn sender(name: String) -> Result<Self, ValueObjectError> {
        check_min_length("from", &name, 1)?;
        Ok(Self(name))
    }

    fn for_field(field: &'static str, name: String) -> Result<Self, ValueObjectError> {
        check_min_length(field, &name, MIN_NAME_LENGTH)?;
        Ok(Self(name))
    }

    /// Get the inner string value.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert to owned String.
    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for ParticipantName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Message recipient: a participant name or [`BROADCAST_TARGET`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recipient(String);

impl Recipient {
    /// Create a new Recipient, validated as the `to` field.
    pub fn new(to: String) -> Result<Self, ValueObjectError> {
        check_min_length("to", &to, MIN_NAME_LENGTH)?;
        Ok(Self(to))
    }

    /// The recipient meaning "everyone".
    pub fn broadcast() -> Self {
        Self(BROADCAST_TARGET.to_string())
    }

    pub fn is_broadcast(&self) -> bool {
        self.0 == BROADCAST_TARGET
    }

    /// Get the inner string value.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert to owned String.
    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for Recipient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Message body value object.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageText(pub(super) String);

impl MessageText {
    /// Create a new MessageText.
    ///
    /// # Errors
    ///
    /// Fails when the text is empty.
    pub fn new(text: String) -> Result<Self, ValueObjectError> {
        check_min_length("text", &text, 1)?;
        Ok(Self(text))
    }

    /// Get the inner string value.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert to owned String.
    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for MessageText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Kind of a chat entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MessageKind {
    /// Public message, visible to everyone
    Message,
    /// Targeted message, visible to sender and recipient
    PrivateMessage,
    /// System generated join/leave notice
    Status,
}

impl MessageKind {
    /// Parse a kind a participant is allowed to post (`message` or `private_message`).
    ///
    /// `status` is reserved for the server and rejected here.
    pub fn parse_postable(value: String) -> Result<Self, ValueObjectError> {
        match value.as_str() {
            "message" => Ok(Self::Message),
            "private_message" => Ok(Self::PrivateMessage),
            _ => Err(ValueObjectError::InvalidMessageKind {
                field: "type",
                value,
            }),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Message => "message",
            Self::PrivateMessage => "private_message",
            Self::Status => "status",
        }
    }
}

impl fmt::Display for MessageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Upper bound on the number of messages returned by one listing.
///
/// `0` and an empty value mean "no bound".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MessageLimit(Option<NonZeroUsize>);

impl MessageLimit {
    /// Parse the raw `limit` query value.
    ///
    /// # Errors
    ///
    /// Fails unless the value is empty or a non-negative integer.
    pub fn parse(raw: &str) -> Result<Self, ValueObjectError> {
        let raw_trimmed = raw.trim();
        if raw_trimmed.is_empty() {
            return Ok(Self::default());
        }
        raw_trimmed
            .parse::<usize>()
            .map(|n| Self(NonZeroUsize::new(n)))
            .map_err(|_| ValueObjectError::InvalidLimit {
                field: "limit",
                value: raw.to_string(),
            })
    }

    /// Maximum number of messages, `None` when unbounded.
    pub fn get(&self) -> Option<usize> {
        self.0.map(NonZeroUsize::get)
    }
}

/// Timestamp value object.
///
/// Represents a Unix timestamp in milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Timestamp(i64);

impl Timestamp {
    /// Create a new Timestamp from Unix milliseconds.
    pub fn new(value: i64) -> Self {
        Self(value)
    }

    /// Get the inner i64 value.
    pub fn value(&self) -> i64 {
        self.0
    }

    /// The timestamp `millis` milliseconds earlier.
    pub fn saturating_sub_millis(&self, millis: i64) -> Self {
        Self(self.0.saturating_sub(millis))
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

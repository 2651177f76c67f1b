//! HTTP API request/response DTOs for the chat room.
//!
//! Field names follow the JSON documents clients already consume
//! (`_id`, `lastStatus`, `type`).

use serde::{Deserialize, Serialize};

/// Body of `POST /participants`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RegisterParticipantRequest {
    pub name: Option<String>,
}

/// Body of `POST /messages`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PostMessageRequest {
    pub to: Option<String>,
    pub text: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
}

/// Query of `GET /messages`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListMessagesQuery {
    pub limit: Option<String>,
}

/// Participant as returned by `GET /participants`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParticipantDto {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    #[serde(rename = "lastStatus")]
    pub last_status: i64, // Unix milliseconds
}

/// Message as returned by `GET /messages`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageDto {
    #[serde(rename = "_id")]
    pub id: String,
    pub from: String,
    pub to: String,
    pub text: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub time: String, // HH:MM:SS
}

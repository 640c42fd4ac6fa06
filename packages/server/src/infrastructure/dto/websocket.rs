//! WebSocket message DTOs.
//!
//! Every frame is a JSON object tagged by `"type"`; tags and field names are
//! camelCase.

use serde::{Deserialize, Serialize};

/// Message sent by a client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum ClientMessage {
    Join { display_name: String },
    ChatMessage { body: String },
    DeleteMessage { message_id: String },
}

/// Message sent by the server.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum ServerMessage {
    JoinSuccess,
    JoinError {
        reason: String,
    },
    HistorySnapshot {
        /// `chatMessage` and `systemMessage` entries, oldest first
        events: Vec<ServerMessage>,
    },
    ChatMessage {
        id: String,
        sender_name: String,
        body: String,
        timestamp: i64,
    },
    SystemMessage {
        id: String,
        text: String,
        timestamp: i64,
    },
    MessageDeleted {
        message_id: String,
    },
    PresenceList {
        names: Vec<String>,
    },
}

//! Conversion logic between DTOs and domain types.

use crate::domain::{ChatEvent, ClientEvent, RoomSnapshot, ServerEvent};
use crate::infrastructure::dto::{http as http_dto, websocket as dto};
use tsudoi_shared::time::timestamp_to_rfc3339;

// ========================================
// DTO → Domain
// ========================================

impl From<dto::ClientMessage> for ClientEvent {
    fn from(dto: dto::ClientMessage) -> Self {
        match dto {
            dto::ClientMessage::Join { display_name } => ClientEvent::Join { display_name },
            dto::ClientMessage::ChatMessage { body } => ClientEvent::ChatMessage { body },
            dto::ClientMessage::DeleteMessage { message_id } => {
                ClientEvent::DeleteMessage { message_id }
            }
        }
    }
}

// ========================================
// Domain → DTO
// ========================================

impl From<ChatEvent> for dto::ServerMessage {
    fn from(event: ChatEvent) -> Self {
        match event {
            ChatEvent::Message(message) => dto::ServerMessage::ChatMessage {
                id: message.id.to_string(),
                sender_name: message.sender_name.into_string(),
                body: message.body.into_string(),
                timestamp: message.timestamp.value(),
            },
            ChatEvent::SystemNotice(notice) => dto::ServerMessage::SystemMessage {
                id: notice.id.to_string(),
                text: notice.text,
                timestamp: notice.timestamp.value(),
            },
        }
    }
}

impl From<ServerEvent> for dto::ServerMessage {
    fn from(event: ServerEvent) -> Self {
        match event {
            ServerEvent::JoinSuccess => dto::ServerMessage::JoinSuccess,
            ServerEvent::JoinError { reason } => dto::ServerMessage::JoinError { reason },
            ServerEvent::HistorySnapshot { events } => dto::ServerMessage::HistorySnapshot {
                events: events.into_iter().map(Into::into).collect(),
            },
            ServerEvent::ChatMessage(message) => ChatEvent::Message(message).into(),
            ServerEvent::SystemMessage(notice) => ChatEvent::SystemNotice(notice).into(),
            ServerEvent::MessageDeleted { message_id } => dto::ServerMessage::MessageDeleted {
                message_id: message_id.to_string(),
            },
            ServerEvent::PresenceList { names } => dto::ServerMessage::PresenceList {
                names: names.into_iter().map(|name| name.into_string()).collect(),
            },
        }
    }
}

impl From<RoomSnapshot> for http_dto::RoomSummaryDto {
    fn from(snapshot: RoomSnapshot) -> Self {
        Self {
            participants: snapshot
                .participants
                .into_iter()
                .map(|name| name.into_string())
                .collect(),
            connections: snapshot.connection_count,
            history_len: snapshot.history_len,
            history_limit: snapshot.history_limit.value(),
            created_at: timestamp_to_rfc3339(snapshot.created_at.value()).unwrap_or_default(),
        }
    }
}

/// Serialize a domain event into the JSON text frame sent to clients.
pub fn encode_server_event(event: &ServerEvent) -> Result<String, serde_json::Error> {
    serde_json::to_string(&dto::ServerMessage::from(event.clone()))
}

/// Parse a JSON text frame sent by a client.
pub fn decode_client_message(text: &str) -> Result<ClientEvent, serde_json::Error> {
    serde_json::from_str::<dto::ClientMessage>(text).map(Into::into)
}

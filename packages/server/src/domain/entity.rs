//! Entities of the chat room.

use super::value_object::{ConnectionId, DisplayName, EventId, MessageBody, Timestamp};

/// A display name bound to a live, joined connection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    pub connection_id: ConnectionId,
    pub display_name: DisplayName,
}

impl Identity {
    pub fn new(connection_id: ConnectionId, display_name: DisplayName) -> Self {
        Self {
            connection_id,
            display_name,
        }
    }
}

/// A chat message posted by a joined connection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatMessage {
    pub id: EventId,
    /// Connection that posted the message; the only one allowed to delete it.
    pub sender_connection_id: ConnectionId,
    pub sender_name: DisplayName,
    pub body: MessageBody,
    pub timestamp: Timestamp,
}

/// Join/leave notice generated by the room itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SystemNotice {
    pub id: EventId,
    pub text: String,
    pub timestamp: Timestamp,
}

impl SystemNotice {
    pub fn joined(name: &DisplayName, timestamp: Timestamp) -> Self {
        Self {
            id: EventId::generate(),
            text: format!("{name} has joined"),
            timestamp,
        }
    }

    pub fn left(name: &DisplayName, timestamp: Timestamp) -> Self {
        Self {
            id: EventId::generate(),
            text: format!("{name} has left"),
            timestamp,
        }
    }
}

/// An entry of the shared history.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChatEvent {
    Message(ChatMessage),
    SystemNotice(SystemNotice),
}

impl ChatEvent {
    pub fn id(&self) -> EventId {
        match self {
            ChatEvent::Message(message) => message.id,
            ChatEvent::SystemNotice(notice) => notice.id,
        }
    }

    #[cfg(test)]
    pub fn timestamp(&self) -> Timestamp {
        match self {
            ChatEvent::Message(message) => message.timestamp,
            ChatEvent::SystemNotice(notice) => notice.timestamp,
        }
    }

    /// Whether this event is a message posted by `connection_id`.
    pub fn is_message_from(&self, connection_id: &ConnectionId) -> bool {
        matches!(self, ChatEvent::Message(message) if &message.sender_connection_id == connection_id)
    }
}

impl From<ChatMessage> for ChatEvent {
    fn from(message: ChatMessage) -> Self {
        ChatEvent::Message(message)
    }
}

impl From<SystemNotice> for ChatEvent {
    fn from(notice: SystemNotice) -> Self {
        ChatEvent::SystemNotice(notice)
    }
}

//! Inbound and outbound room events.

use super::{
    entity::{ChatEvent, ChatMessage, SystemNotice},
    value_object::{DisplayName, EventId},
};

/// Event raised by (or on behalf of) a client connection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClientEvent {
    Join { display_name: String },
    ChatMessage { body: String },
    DeleteMessage { message_id: String },
    /// Raised by the transport when the connection goes away.
    Disconnect,
}

/// Event emitted by the room.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ServerEvent {
    JoinSuccess,
    JoinError { reason: String },
    HistorySnapshot { events: Vec<ChatEvent> },
    ChatMessage(ChatMessage),
    SystemMessage(SystemNotice),
    MessageDeleted { message_id: EventId },
    PresenceList { names: Vec<DisplayName> },
}

/// Who an emitted event is addressed to, relative to the requesting connection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Audience {
    Sender,
    Others,
    All,
}

/// One outbound event and its audience.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Effect {
    pub audience: Audience,
    pub event: ServerEvent,
}

impl Effect {
    pub fn to_sender(event: ServerEvent) -> Self {
        Self {
            audience: Audience::Sender,
            event,
        }
    }

    pub fn to_others(event: ServerEvent) -> Self {
        Self {
            audience: Audience::Others,
            event,
        }
    }

    pub fn to_all(event: ServerEvent) -> Self {
        Self {
            audience: Audience::All,
            event,
        }
    }
}

//! Domain layer for the chat room.
//!
//! Pure state and rules: presence, history and the broadcast room state
//! machine. Transport and serialization live in the infrastructure layer.

pub mod entity;
pub mod error;
pub mod event;
pub mod history;
pub mod message_pusher;
pub mod presence;
pub mod repository;
pub mod room;
pub mod value_object;

pub use entity::{ChatEvent, ChatMessage, Identity, SystemNotice};
pub use error::{MessagePushError, RoomError, ValueObjectError};
pub use event::{Audience, ClientEvent, Effect, ServerEvent};
pub use history::HistoryRing;
pub use message_pusher::{MessagePusher, PusherChannel};
#[cfg(test)]
pub use message_pusher::MockMessagePusher;
pub use presence::PresenceTable;
pub use repository::RoomRepository;
pub use room::{BroadcastRoom, RoomSnapshot, SessionState};
pub use value_object::{
    ConnectionId, DisplayName, EventId, HistoryLimit, MessageBody, Timestamp,
};

//! Domain error types.

use thiserror::Error;

use super::value_object::{ConnectionId, DisplayName, EventId};

/// Errors raised when constructing value objects from raw input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValueObjectError {
    #[error("display name must not be empty")]
    EmptyDisplayName,

    #[error("invalid event id '{0}'")]
    InvalidEventId(String),

    #[error("history limit must be at least 1")]
    InvalidHistoryLimit,
}

/// Reasons a room operation was refused.
///
/// Only `NameTaken` (and invalid names) ever reach a client; the others are
/// logged and the operation produces no effects.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RoomError {
    #[error("name already taken")]
    NameTaken(DisplayName),

    #[error("connection '{0}' has not joined")]
    NotJoined(ConnectionId),

    #[error("connection '{0}' is not live")]
    UnknownConnection(ConnectionId),

    #[error("connection '{0}' is already live")]
    DuplicateConnection(ConnectionId),

    #[error("connection '{0}' has already joined")]
    AlreadyJoined(ConnectionId),

    #[error("message '{0}' not found")]
    MessageNotFound(EventId),

    #[error("connection '{requester}' may not delete event '{event_id}'")]
    Unauthorized {
        requester: ConnectionId,
        event_id: EventId,
    },

    #[error(transparent)]
    InvalidInput(#[from] ValueObjectError),
}

/// Errors raised while pushing events to connected clients.
#[derive(Debug, Error)]
pub enum MessagePushError {
    #[error("client '{0}' not found")]
    ClientNotFound(ConnectionId),

    #[error("failed to push message: {0}")]
    PushFailed(String),
}

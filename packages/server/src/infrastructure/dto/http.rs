//! HTTP API response DTOs.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthDto {
    pub status: String,
}

/// Summary of the chat room
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomSummaryDto {
    /// Display names of joined participants, sorted
    pub participants: Vec<String>,
    /// Live connections, including those that have not joined yet
    pub connections: usize,
    pub history_len: usize,
    pub history_limit: usize,
    /// RFC 3339 (UTC) time the room was created, i.e. server start
    pub created_at: String,
}

//! Tsudoi: ephemeral in-memory group chat server.
//!
//! Clients connect over WebSocket, claim a unique display name, exchange
//! messages with everyone in the room and may delete their own messages.
//! Nothing survives a restart.

pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod ui;
pub mod usecase;

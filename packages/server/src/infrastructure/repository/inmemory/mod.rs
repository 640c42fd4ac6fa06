//! In-memory repositories.

pub mod room;

pub use room::InMemoryRoomRepository;

//! UseCase layer: one use case per room operation, plus the session glue.

pub mod connect_session;
pub mod delete_message;
mod delivery;
pub mod disconnect_session;
pub mod error;
pub mod get_room_state;
pub mod join_room;
pub mod send_message;
pub mod session;

pub use connect_session::ConnectSessionUseCase;
pub use delete_message::DeleteMessageUseCase;
pub use disconnect_session::DisconnectSessionUseCase;
pub use error::ConnectError;
pub use get_room_state::GetRoomStateUseCase;
pub use join_room::JoinRoomUseCase;
pub use send_message::SendMessageUseCase;
pub use session::{Session, SessionUseCases};

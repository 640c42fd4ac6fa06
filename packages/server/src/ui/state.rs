//! Server state shared by every handler.

use std::sync::Arc;

use crate::usecase::{ConnectSessionUseCase, GetRoomStateUseCase, SessionUseCases};

/// Shared application state
pub struct AppState {
    /// ConnectSessionUseCase（接続のユースケース）
    pub connect_session_usecase: Arc<ConnectSessionUseCase>,
    /// 接続ごとの Session が使うユースケース一式
    pub session_usecases: SessionUseCases,
    /// GetRoomStateUseCase（Room の状態取得のユースケース）
    pub get_room_state_usecase: Arc<GetRoomStateUseCase>,
}

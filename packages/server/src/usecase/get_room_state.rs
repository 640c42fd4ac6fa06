//! UseCase: Room の状態取得処理

use std::sync::Arc;

use crate::domain::{RoomRepository, RoomSnapshot};

/// Room の状態取得のユースケース
pub struct GetRoomStateUseCase {
    /// Repository（データアクセス層の抽象化）
    repository: Arc<dyn RoomRepository>,
}

impl GetRoomStateUseCase {
    /// 新しい GetRoomStateUseCase を作成
    pub fn new(repository: Arc<dyn RoomRepository>) -> Self {
        Self { repository }
    }

    /// Room の現在の状態を取得
    pub async fn execute(&self) -> RoomSnapshot {
        let room = self.repository.lock().await;
        room.summary()
    }
}

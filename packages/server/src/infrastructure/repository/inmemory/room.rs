//! InMemory Room Repository 実装
//!
//! ドメイン層が定義する RoomRepository trait の具体的な実装。
//! `BroadcastRoom` を 1 つの Mutex で保護し、全ての Room 操作を直列化します。
//! プロセス再起動で状態は失われます（永続化はしない）。

use async_trait::async_trait;
use tokio::sync::{Mutex, MutexGuard};

use crate::domain::{BroadcastRoom, RoomRepository};

/// インメモリ Room Repository 実装
pub struct InMemoryRoomRepository {
    /// Room ドメインモデル（唯一の排他制御単位）
    room: Mutex<BroadcastRoom>,
}

impl InMemoryRoomRepository {
    /// 新しい InMemoryRoomRepository を作成
    pub fn new(room: BroadcastRoom) -> Self {
        Self {
            room: Mutex::new(room),
        }
    }
}

#[async_trait]
impl RoomRepository for InMemoryRoomRepository {
    async fn lock<'a>(&'a self) -> MutexGuard<'a, BroadcastRoom> {
        self.room.lock().await
    }
}

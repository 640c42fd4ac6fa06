//! UseCase: 切断処理
//!
//! ## テスト実装の作業記録
//!
//! ### 何をテストしているか
//! - DisconnectSessionUseCase::execute() メソッド
//! - 参加者の削除、退室通知と参加者一覧のブロードキャスト
//!
//! ### なぜこのテストが必要か
//! - 切断後に表示名が解放され、他のクライアントが再利用できることを保証
//! - 切断処理が複数回呼ばれても退室通知は一度しか配信されない
//!
//! ### どのような状況を想定しているか
//! - 正常系：参加済みクライアントの切断
//! - エッジケース：参加前の切断、二重の切断

use std::sync::Arc;

use crate::domain::{ConnectionId, Effect, MessagePusher, RoomRepository};

use super::delivery::deliver;

/// 切断のユースケース
pub struct DisconnectSessionUseCase {
    /// Repository（データアクセス層の抽象化）
    repository: Arc<dyn RoomRepository>,
    /// MessagePusher（メッセージ通知の抽象化）
    message_pusher: Arc<dyn MessagePusher>,
}

impl DisconnectSessionUseCase {
    /// 新しい DisconnectSessionUseCase を作成
    pub fn new(
        repository: Arc<dyn RoomRepository>,
        message_pusher: Arc<dyn MessagePusher>,
    ) -> Self {
        Self {
            repository,
            message_pusher,
        }
    }

    /// 切断を実行
    ///
    /// 切断したクライアント自身には何も送らない。送信キューの登録解除は
    /// Room の更新と同じロックの中で行う。
    pub async fn execute(&self, connection_id: &ConnectionId) -> Vec<Effect> {
        let mut room = self.repository.lock().await;

        // 1. MessagePusher から送信キューを登録解除
        self.message_pusher.unregister_client(connection_id).await;

        // 2. Room から接続を削除し、残りのクライアントに通知
        let effects = room.disconnect(connection_id);
        deliver(&room, self.message_pusher.as_ref(), connection_id, &effects).await;
        effects
    }
}

//! UseCase: チャットメッセージ送信処理
//!
//! ## テスト実装の作業記録
//!
//! ### 何をテストしているか
//! - SendMessageUseCase::execute() メソッド
//! - メッセージの履歴への追加と、送信者を含む全員へのブロードキャスト
//!
//! ### なぜこのテストが必要か
//! - 全ての受信者がブロードキャストを同じ順序で受け取ることを保証
//! - 参加前の接続からのメッセージは黙って破棄されることを確認
//! - 空白のみや空のメッセージもそのまま配信されることを確認
//!
//! ### どのような状況を想定しているか
//! - 正常系：参加済みクライアントからの送信
//! - 異常系：未参加クライアントからの送信
//! - エッジケース：空白のみ・空のメッセージ
//! - エッジケース：複数クライアントからの同時送信

use std::sync::Arc;

use crate::domain::{ConnectionId, Effect, MessagePusher, RoomRepository};

use super::delivery::deliver;

/// チャットメッセージ送信のユースケース
pub struct SendMessageUseCase {
    /// Repository（データアクセス層の抽象化）
    repository: Arc<dyn RoomRepository>,
    /// MessagePusher（メッセージ通知の抽象化）
    message_pusher: Arc<dyn MessagePusher>,
}

impl SendMessageUseCase {
    /// 新しい SendMessageUseCase を作成
    pub fn new(
        repository: Arc<dyn RoomRepository>,
        message_pusher: Arc<dyn MessagePusher>,
    ) -> Self {
        Self {
            repository,
            message_pusher,
        }
    }

    /// メッセージ送信を実行
    ///
    /// # Arguments
    ///
    /// * `connection_id` - 送信者の接続 ID
    /// * `body` - メッセージ本文（未検証）
    ///
    /// # Returns
    ///
    /// 配信した効果の一覧（破棄された場合は空）
    pub async fn execute(&self, connection_id: &ConnectionId, body: String) -> Vec<Effect> {
        let mut room = self.repository.lock().await;
        let effects = room.post_message(connection_id, body);
        deliver(&room, self.message_pusher.as_ref(), connection_id, &effects).await;
        effects
    }
}

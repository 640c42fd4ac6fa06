//! UseCase: 参加（表示名の取得）処理
//!
//! ## テスト実装の作業記録
//!
//! ### 何をテストしているか
//! - JoinRoomUseCase::execute() メソッド
//! - 表示名の一意性チェック、履歴の送信、入室通知と参加者一覧のブロードキャスト
//!
//! ### なぜこのテストが必要か
//! - 同じ名前での同時参加が両方成功してはならない（線形化可能性）
//! - 参加者本人は履歴を一度だけ受け取り、自分の入室通知を受け取らない
//!
//! ### どのような状況を想定しているか
//! - 正常系：新規参加
//! - 異常系：使用中の名前での参加
//! - エッジケース：同じ名前での同時参加

use std::sync::Arc;

use crate::domain::{ConnectionId, Effect, MessagePusher, RoomRepository};

use super::delivery::deliver;

/// 参加のユースケース
pub struct JoinRoomUseCase {
    /// Repository（データアクセス層の抽象化）
    repository: Arc<dyn RoomRepository>,
    /// MessagePusher（メッセージ通知の抽象化）
    message_pusher: Arc<dyn MessagePusher>,
}

impl JoinRoomUseCase {
    /// 新しい JoinRoomUseCase を作成
    pub fn new(
        repository: Arc<dyn RoomRepository>,
        message_pusher: Arc<dyn MessagePusher>,
    ) -> Self {
        Self {
            repository,
            message_pusher,
        }
    }

    /// 参加を実行
    ///
    /// # Arguments
    ///
    /// * `connection_id` - 参加するクライアントの接続 ID
    /// * `display_name` - 希望する表示名（未検証の文字列）
    ///
    /// # Returns
    ///
    /// 配信した効果の一覧（名前が使用中の場合は送信者宛ての joinError のみ）
    pub async fn execute(&self, connection_id: &ConnectionId, display_name: &str) -> Vec<Effect> {
        let mut room = self.repository.lock().await;
        let effects = room.join(connection_id, display_name);
        deliver(&room, self.message_pusher.as_ref(), connection_id, &effects).await;
        effects
    }
}

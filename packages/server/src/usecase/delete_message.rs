//! UseCase: メッセージ削除処理
//!
//! ## テスト実装の作業記録
//!
//! ### 何をテストしているか
//! - DeleteMessageUseCase::execute() メソッド
//! - 投稿者本人による削除と、削除通知のブロードキャスト
//!
//! ### どのような状況を想定しているか
//! - 正常系：自分のメッセージの削除
//! - 異常系：他人のメッセージ、存在しない ID、形式が不正な ID

use std::sync::Arc;

use crate::domain::{ConnectionId, Effect, MessagePusher, RoomRepository};

use super::delivery::deliver;

/// メッセージ削除のユースケース
pub struct DeleteMessageUseCase {
    /// Repository（データアクセス層の抽象化）
    repository: Arc<dyn RoomRepository>,
    /// MessagePusher（メッセージ通知の抽象化）
    message_pusher: Arc<dyn MessagePusher>,
}

impl DeleteMessageUseCase {
    /// 新しい DeleteMessageUseCase を作成
    pub fn new(
        repository: Arc<dyn RoomRepository>,
        message_pusher: Arc<dyn MessagePusher>,
    ) -> Self {
        Self {
            repository,
            message_pusher,
        }
    }

    /// メッセージ削除を実行
    ///
    /// 削除できない要求（権限なし・存在しない・形式不正）は黙って無視され、
    /// 空の効果一覧が返る。
    pub async fn execute(&self, connection_id: &ConnectionId, message_id: &str) -> Vec<Effect> {
        let mut room = self.repository.lock().await;
        let effects = room.delete_message(connection_id, message_id);
        deliver(&room, self.message_pusher.as_ref(), connection_id, &effects).await;
        effects
    }
}

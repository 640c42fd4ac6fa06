//! UseCase: 接続処理
//!
//! ## テスト実装の作業記録
//!
//! ### 何をテストしているか
//! - ConnectSessionUseCase::execute() メソッド
//! - 接続の登録（Room と MessagePusher の両方）
//!
//! ### どのような状況を想定しているか
//! - 正常系：新規接続（まだ参加していない状態になる）
//! - 異常系：同じ接続 ID での二重登録

use std::sync::Arc;

use crate::domain::{ConnectionId, MessagePusher, PusherChannel, RoomRepository};

use super::error::ConnectError;

/// 接続のユースケース
pub struct ConnectSessionUseCase {
    /// Repository（データアクセス層の抽象化）
    repository: Arc<dyn RoomRepository>,
    /// MessagePusher（メッセージ通知の抽象化）
    message_pusher: Arc<dyn MessagePusher>,
}

impl ConnectSessionUseCase {
    /// 新しい ConnectSessionUseCase を作成
    pub fn new(
        repository: Arc<dyn RoomRepository>,
        message_pusher: Arc<dyn MessagePusher>,
    ) -> Self {
        Self {
            repository,
            message_pusher,
        }
    }

    /// 接続を実行
    ///
    /// Room に接続を登録し（まだ参加していない状態）、送信キューを
    /// MessagePusher に登録する。この時点では何も配信しない。
    ///
    /// # Arguments
    ///
    /// * `connection_id` - トランスポート層が割り当てた接続 ID
    /// * `sender` - クライアントへの送信キュー
    pub async fn execute(
        &self,
        connection_id: ConnectionId,
        sender: PusherChannel,
    ) -> Result<(), ConnectError> {
        let mut room = self.repository.lock().await;

        // 1. Room に接続を登録
        room.connect(connection_id.clone())
            .map_err(|_| ConnectError::DuplicateConnectionId(connection_id.to_string()))?;

        // 2. MessagePusher に送信キューを登録
        self.message_pusher
            .register_client(connection_id, sender)
            .await;

        Ok(())
    }
}
